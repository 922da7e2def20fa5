//! Calculator desktop app.
//!
//! A four-function immediate-execution calculator. Division by zero yields zero instead of an
//! error state.

use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::prelude::*;

mod engine;

use engine::{keyboard_action, BinaryOp, CalcAction, CalculatorState};

#[derive(Clone, Copy)]
struct CalcKeySpec {
    label: &'static str,
    class_name: &'static str,
    action: CalcAction,
}

const fn key(label: &'static str, class_name: &'static str, action: CalcAction) -> CalcKeySpec {
    CalcKeySpec {
        label,
        class_name,
        action,
    }
}

const CALC_KEYS: [CalcKeySpec; 19] = [
    key("C", "calc-key util", CalcAction::Clear),
    key("\u{00B1}", "calc-key util", CalcAction::ToggleSign),
    key("%", "calc-key util", CalcAction::Percent),
    key("\u{00F7}", "calc-key op", CalcAction::Binary(BinaryOp::Divide)),
    key("7", "calc-key", CalcAction::Digit('7')),
    key("8", "calc-key", CalcAction::Digit('8')),
    key("9", "calc-key", CalcAction::Digit('9')),
    key("\u{00D7}", "calc-key op", CalcAction::Binary(BinaryOp::Multiply)),
    key("4", "calc-key", CalcAction::Digit('4')),
    key("5", "calc-key", CalcAction::Digit('5')),
    key("6", "calc-key", CalcAction::Digit('6')),
    key("\u{2212}", "calc-key op", CalcAction::Binary(BinaryOp::Subtract)),
    key("1", "calc-key", CalcAction::Digit('1')),
    key("2", "calc-key", CalcAction::Digit('2')),
    key("3", "calc-key", CalcAction::Digit('3')),
    key("+", "calc-key op", CalcAction::Binary(BinaryOp::Add)),
    key("0", "calc-key wide", CalcAction::Digit('0')),
    key(".", "calc-key", CalcAction::Decimal),
    key("=", "calc-key op", CalcAction::Equals),
];

#[component]
/// Calculator window contents.
pub fn CalculatorApp() -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }

        if let Some(action) = keyboard_action(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(action));
        }
    };

    view! {
        <div class="app-shell app-calculator-shell" tabindex="0" on:keydown=on_keydown>
            <div class="calc-display-panel">
                <div class="calc-expression" aria-live="off">
                    {move || calc.with(|state| state.expression_text())}
                </div>
                <div class="calc-display" role="status" aria-live="polite">
                    {move || calc.with(|state| state.display_text().to_string())}
                </div>
            </div>

            <Grid columns=4 gap=LayoutGap::Sm ui_slot="calc-keypad">
                {CALC_KEYS
                    .into_iter()
                    .map(|key| {
                        let selected = Signal::derive(move || match key.action {
                            CalcAction::Binary(op) => calc.with(|state| state.pending_op() == Some(op)),
                            _ => false,
                        });
                        view! {
                            <Button
                                layout_class=key.class_name
                                variant=if key.class_name.ends_with("op") {
                                    ButtonVariant::Primary
                                } else {
                                    ButtonVariant::Standard
                                }
                                size=ButtonSize::Lg
                                selected=selected
                                on_click=Callback::new(move |_| calc.update(|state| state.apply(key.action)))
                            >
                                {key.label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Grid>
        </div>
    }
}
