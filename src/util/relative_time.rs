use chrono::{DateTime, Datelike, TimeZone, Timelike};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Human-readable distance from `then` to `now`, e.g. "5 minutes",
/// "about 2 hours", "over 1 year". Future times read as "less than a minute".
pub fn time_since<Tz: TimeZone>(then: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let seconds = now
        .clone()
        .signed_duration_since(then.clone())
        .num_seconds()
        .max(0);
    let minutes = rounded_div(seconds, 60);

    if minutes == 0 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", plural(rounded_div(minutes, 60), "hour"));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural(rounded_div(minutes, MINUTES_IN_DAY), "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return format!(
            "about {}",
            plural(rounded_div(minutes, MINUTES_IN_MONTH), "month")
        );
    }

    let months = whole_months_between(then, now);
    if months < 12 {
        return plural(rounded_div(minutes, MINUTES_IN_MONTH).max(1), "month");
    }
    let years = months / 12;
    match months % 12 {
        0..3 => format!("about {}", plural(years, "year")),
        3..9 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}

/// Division rounding half up, for non-negative operands
fn rounded_div(n: i64, d: i64) -> i64 {
    (n + d / 2) / d
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// Calendar months between two instants, not counting a partial last month
fn whole_months_between<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    let later_pos = (later.day(), later.num_seconds_from_midnight());
    let earlier_pos = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_pos < earlier_pos {
        months -= 1;
    }
    months
}
