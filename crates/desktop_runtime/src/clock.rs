//! Clock text for the taskbar and login screen.

use platform_host::ClockSnapshot;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn month_name(snapshot: &ClockSnapshot) -> &'static str {
    MONTHS
        .get(snapshot.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("January")
}

fn weekday_name(snapshot: &ClockSnapshot) -> &'static str {
    WEEKDAYS
        .get(snapshot.weekday as usize)
        .copied()
        .unwrap_or("Sunday")
}

/// `h:mm AM`, twelve-hour with no leading zero on the hour.
pub fn format_time(snapshot: &ClockSnapshot) -> String {
    let meridiem = if snapshot.hour < 12 { "AM" } else { "PM" };
    let hour = match snapshot.hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{hour}:{:02} {meridiem}", snapshot.minute)
}

/// `Mon D, YYYY`.
pub fn format_short_date(snapshot: &ClockSnapshot) -> String {
    format!(
        "{} {}, {}",
        &month_name(snapshot)[..3],
        snapshot.day,
        snapshot.year
    )
}

/// `Weekday, Month D`.
pub fn format_long_date(snapshot: &ClockSnapshot) -> String {
    format!(
        "{}, {} {}",
        weekday_name(snapshot),
        month_name(snapshot),
        snapshot.day
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            year: 2024,
            month: 3,
            day: 9,
            weekday: 6,
            hour,
            minute,
        }
    }

    #[test]
    fn time_uses_twelve_hour_clock() {
        assert_eq!(format_time(&at(0, 5)), "12:05 AM");
        assert_eq!(format_time(&at(9, 30)), "9:30 AM");
        assert_eq!(format_time(&at(12, 0)), "12:00 PM");
        assert_eq!(format_time(&at(23, 59)), "11:59 PM");
    }

    #[test]
    fn dates_render_short_and_long_forms() {
        assert_eq!(format_short_date(&at(10, 0)), "Mar 9, 2024");
        assert_eq!(format_long_date(&at(10, 0)), "Saturday, March 9");
    }

    #[test]
    fn epoch_snapshot_formats() {
        let epoch = ClockSnapshot::EPOCH;
        assert_eq!(format_time(&epoch), "12:00 AM");
        assert_eq!(format_short_date(&epoch), "Jan 1, 1970");
        assert_eq!(format_long_date(&epoch), "Thursday, January 1");
    }
}
