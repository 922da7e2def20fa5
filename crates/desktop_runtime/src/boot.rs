//! Boot progress and login-screen rules.

/// Simulated boot progress, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BootProgress {
    percent: f64,
}

impl BootProgress {
    pub const COMPLETE: f64 = 100.0;

    /// Adds `random() * max_step`, capped at 100. Returns `true` once complete.
    pub fn advance(&mut self, max_step: f64, random: &mut dyn FnMut() -> f64) -> bool {
        let step = random().clamp(0.0, 1.0) * max_step;
        self.percent = (self.percent + step).min(Self::COMPLETE);
        self.is_complete()
    }

    pub fn is_complete(self) -> bool {
        self.percent >= Self::COMPLETE
    }

    pub fn percent(self) -> f64 {
        self.percent
    }

    /// Whole percent for the progress bar.
    pub fn display_percent(self) -> u16 {
        self.percent.floor() as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Booting,
    Login,
}

/// Sign-in is allowed once the trimmed name is non-empty.
pub fn can_sign_in(name: &str) -> bool {
    !name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn progress_accumulates_random_steps() {
        let mut progress = BootProgress::default();
        let mut rolls = [0.5, 1.0].into_iter();
        let mut random = move || rolls.next().unwrap_or(0.0);

        assert!(!progress.advance(15.0, &mut random));
        assert_eq!(progress.percent(), 7.5);
        assert!(!progress.advance(15.0, &mut random));
        assert_eq!(progress.display_percent(), 22);
    }

    #[test]
    fn progress_caps_at_complete() {
        let mut progress = BootProgress::default();
        let mut random = || 1.0;
        let mut ticks = 0;
        while !progress.advance(15.0, &mut random) {
            ticks += 1;
        }
        assert_eq!(ticks, 6);
        assert_eq!(progress.percent(), 100.0);
        assert!(progress.advance(15.0, &mut random));
        assert_eq!(progress.display_percent(), 100);
    }

    #[test]
    fn blank_names_cannot_sign_in() {
        assert!(!can_sign_in(""));
        assert!(!can_sign_in(" \t "));
        assert!(can_sign_in(" Grace "));
    }
}
