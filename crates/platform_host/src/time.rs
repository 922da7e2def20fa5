//! Time helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Local wall-clock reading used by clock displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Four-digit year.
    pub year: u32,
    /// Month, 1-based.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Day of week, 0 = Sunday.
    pub weekday: u32,
    /// Hour, 0..=23.
    pub hour: u32,
    /// Minute, 0..=59.
    pub minute: u32,
}

impl ClockSnapshot {
    /// Reads the host's local time.
    ///
    /// Host builds have no timezone source and report the unix epoch.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::EPOCH
        }
    }

    /// Thursday, January 1 1970, midnight.
    pub const EPOCH: Self = Self {
        year: 1970,
        month: 1,
        day: 1,
        weekday: 4,
        hour: 0,
        minute: 0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_time_is_after_2020_on_host() {
        assert!(unix_time_ms_now() > 1_577_836_800_000);
    }

    #[test]
    fn host_clock_snapshot_is_the_epoch() {
        assert_eq!(ClockSnapshot::now(), ClockSnapshot::EPOCH);
    }
}
