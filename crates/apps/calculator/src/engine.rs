#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{00D7}",
            Self::Divide => "\u{00F7}",
        }
    }

    /// Division by zero yields zero.
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide if rhs == 0.0 => 0.0,
            Self::Divide => lhs / rhs,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcAction {
    Digit(char),
    Decimal,
    Backspace,
    Clear,
    ToggleSign,
    Percent,
    Binary(BinaryOp),
    Equals,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalculatorState {
    entry: String,
    accumulator: Option<f64>,
    pending_op: Option<BinaryOp>,
    /// The next digit starts a fresh entry.
    replace_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending_op: None,
            replace_entry: false,
        }
    }
}

impl CalculatorState {
    pub(crate) fn apply(&mut self, action: CalcAction) {
        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Decimal => self.input_decimal(),
            CalcAction::Backspace => self.backspace(),
            CalcAction::Clear => *self = Self::default(),
            CalcAction::ToggleSign => {
                let value = -self.current_value();
                self.entry = format_number(value);
            }
            CalcAction::Percent => {
                let value = self.current_value() / 100.0;
                self.entry = format_number(value);
            }
            CalcAction::Binary(op) => self.set_pending_operation(op),
            CalcAction::Equals => self.equals(),
        }
    }

    pub(crate) fn display_text(&self) -> &str {
        &self.entry
    }

    pub(crate) fn expression_text(&self) -> String {
        match (self.accumulator, self.pending_op) {
            (Some(acc), Some(op)) => format!("{} {}", format_number(acc), op.symbol()),
            _ => String::new(),
        }
    }

    pub(crate) fn pending_op(&self) -> Option<BinaryOp> {
        self.pending_op
    }

    /// Unparseable entries (a lone "-" or ".") count as zero.
    fn current_value(&self) -> f64 {
        self.entry.parse::<f64>().unwrap_or(0.0)
    }

    fn input_digit(&mut self, digit: char) {
        if self.replace_entry {
            self.entry = digit.to_string();
            self.replace_entry = false;
        } else if self.entry == "0" {
            self.entry = digit.to_string();
        } else {
            self.entry.push(digit);
        }
    }

    fn input_decimal(&mut self) {
        if self.replace_entry {
            self.entry = "0.".to_string();
            self.replace_entry = false;
        } else if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.replace_entry {
            return;
        }
        self.entry.pop();
        if self.entry.is_empty() || self.entry == "-" {
            self.entry = "0".to_string();
        }
    }

    /// Chained operators evaluate the pending operation first.
    fn set_pending_operation(&mut self, op: BinaryOp) {
        let input = self.current_value();
        match (self.accumulator, self.pending_op) {
            (None, _) => self.accumulator = Some(input),
            (Some(acc), Some(pending)) => {
                let result = pending.apply(acc, input);
                self.entry = format_number(result);
                self.accumulator = Some(result);
            }
            (Some(_), None) => {}
        }
        self.pending_op = Some(op);
        self.replace_entry = true;
    }

    fn equals(&mut self) {
        let (Some(acc), Some(op)) = (self.accumulator, self.pending_op) else {
            return;
        };
        let result = op.apply(acc, self.current_value());
        self.entry = format_number(result);
        self.accumulator = None;
        self.pending_op = None;
        self.replace_entry = true;
    }
}

pub(crate) fn keyboard_action(key: &str) -> Option<CalcAction> {
    let action = match key {
        "." | "," => CalcAction::Decimal,
        "+" => CalcAction::Binary(BinaryOp::Add),
        "-" => CalcAction::Binary(BinaryOp::Subtract),
        "*" | "x" | "X" => CalcAction::Binary(BinaryOp::Multiply),
        "/" => CalcAction::Binary(BinaryOp::Divide),
        "%" => CalcAction::Percent,
        "=" | "Enter" => CalcAction::Equals,
        "Backspace" => CalcAction::Backspace,
        "Escape" | "c" | "C" => CalcAction::Clear,
        "F9" => CalcAction::ToggleSign,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(digit), None) if digit.is_ascii_digit() => CalcAction::Digit(digit),
                _ => return None,
            }
        }
    };
    Some(action)
}

/// Shortest decimal rendering; negative zero renders as `0`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply_all(state: &mut CalculatorState, actions: &[CalcAction]) {
        for action in actions {
            state.apply(*action);
        }
    }

    fn enter_number(state: &mut CalculatorState, text: &str) {
        for ch in text.chars() {
            if ch == '.' {
                state.apply(CalcAction::Decimal);
            } else {
                state.apply(CalcAction::Digit(ch));
            }
        }
    }

    #[test]
    fn digits_replace_leading_zero() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "007");
        assert_eq!(state.display_text(), "7");
        enter_number(&mut state, ".50");
        assert_eq!(state.display_text(), "7.50");
        state.apply(CalcAction::Decimal);
        assert_eq!(state.display_text(), "7.50");
    }

    #[test]
    fn addition_and_equals() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "12");
        state.apply(CalcAction::Binary(BinaryOp::Add));
        assert_eq!(state.expression_text(), "12 +");
        enter_number(&mut state, "30");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display_text(), "42");
        assert_eq!(state.pending_op(), None);
    }

    #[test]
    fn chained_operations_evaluate_pending_first() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "2");
        state.apply(CalcAction::Binary(BinaryOp::Add));
        enter_number(&mut state, "3");
        state.apply(CalcAction::Binary(BinaryOp::Multiply));
        assert_eq!(state.display_text(), "5");
        enter_number(&mut state, "4");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display_text(), "20");
    }

    #[test]
    fn division_by_zero_yields_zero() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "9");
        state.apply(CalcAction::Binary(BinaryOp::Divide));
        enter_number(&mut state, "0");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display_text(), "0");
    }

    #[test]
    fn equals_without_pending_operation_is_noop() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "15");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display_text(), "15");
    }

    #[test]
    fn digit_after_result_starts_fresh_entry() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "6");
        state.apply(CalcAction::Binary(BinaryOp::Subtract));
        enter_number(&mut state, "8");
        state.apply(CalcAction::Equals);
        assert_eq!(state.display_text(), "-2");
        state.apply(CalcAction::Decimal);
        assert_eq!(state.display_text(), "0.");
    }

    #[test]
    fn sign_percent_and_clear() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "25");
        state.apply(CalcAction::ToggleSign);
        assert_eq!(state.display_text(), "-25");
        state.apply(CalcAction::Percent);
        assert_eq!(state.display_text(), "-0.25");
        state.apply(CalcAction::Clear);
        assert_eq!(state, CalculatorState::default());
        state.apply(CalcAction::ToggleSign);
        assert_eq!(state.display_text(), "0");
    }

    #[test]
    fn backspace_falls_back_to_zero() {
        let mut state = CalculatorState::default();
        enter_number(&mut state, "4");
        state.apply(CalcAction::ToggleSign);
        apply_all(&mut state, &[CalcAction::Backspace, CalcAction::Backspace]);
        assert_eq!(state.display_text(), "0");
    }

    #[test]
    fn shortest_decimal_rendering() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn keyboard_action_maps_supported_keys() {
        assert_eq!(keyboard_action("7"), Some(CalcAction::Digit('7')));
        assert_eq!(keyboard_action("Enter"), Some(CalcAction::Equals));
        assert_eq!(keyboard_action("Escape"), Some(CalcAction::Clear));
        assert_eq!(
            keyboard_action("/"),
            Some(CalcAction::Binary(BinaryOp::Divide))
        );
        assert_eq!(keyboard_action("Tab"), None);
        assert_eq!(keyboard_action("77"), None);
    }
}
