use crate::Cents;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Returns true when the amount has no cents.
pub fn is_round_dollar(total: Cents) -> bool {
    total.fraction() == 0
}

/// Returns true when the amount is an exact multiple of $0.25.
pub fn is_quarter_multiple(total: Cents) -> bool {
    total.get() % 25 == 0
}

/// Returns true when the trimmed description length is a positive multiple
/// of three.
pub fn has_bonus_description(description: &str) -> bool {
    let len = super::helpers::trimmed_len(description);
    len > 0 && len % 3 == 0
}

/// Returns true when the day of month is odd.
pub fn is_odd_day(date: NaiveDate) -> bool {
    date.day() % 2 == 1
}

/// Returns true for any minute of the 14:00 hour and for 15:00 exactly.
///
/// The breakdown text says "between 2:00pm and 4:00pm", but 15:01 through
/// 15:59 do not qualify.
pub fn is_afternoon_window(time: NaiveTime) -> bool {
    time.hour() == 14 || (time.hour() == 15 && time.minute() == 0)
}
