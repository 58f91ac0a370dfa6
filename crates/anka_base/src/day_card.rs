//! Arcana-of-the-day calculator.
//!
//! Combines the birth day, a name-derived sum (computed by an external
//! transliteration collaborator) and the current date into four
//! time-of-day arcana. Note the two reduction schemes in play:
//! `morning`/`evening`/`night` wrap modulo 22 while `day` digit-sums,
//! and the schemes must not be mixed.

use anka_math::{arcana_wrap, digit_sum};
use anka_time::CalendarDate;

use crate::day_card_types::DayCard;

/// Morning arcana: the birth day wrapped into 1..=22.
///
/// Depends on the birth day alone, so it never changes for a person.
pub fn morning_arcana(birth_day: i64) -> i64 {
    arcana_wrap(birth_day)
}

/// Day arcana: digit-sum of the current date's YYYYMMDD concatenation,
/// digit-summed again while it exceeds 22.
pub fn day_arcana(current: CalendarDate) -> i64 {
    let mut v = digit_sum(current.digit_concat());
    while v > 22 {
        v = digit_sum(v);
    }
    v
}

/// Evening arcana: name sum + morning + day, wrapped into 1..=22.
pub fn evening_arcana(name_sum: i64, morning: i64, day: i64) -> i64 {
    arcana_wrap(name_sum + morning + day)
}

/// Night arcana: day + evening, wrapped into 1..=22.
///
/// A sum of exactly 44 lands on 22, never 0.
pub fn night_arcana(day: i64, evening: i64) -> i64 {
    arcana_wrap(day + evening)
}

/// The full card for an explicit current date.
pub fn day_card(birth_day: i64, name_sum: i64, current: CalendarDate) -> DayCard {
    let morning = morning_arcana(birth_day);
    let day = day_arcana(current);
    let evening = evening_arcana(name_sum, morning, day);
    let night = night_arcana(day, evening);
    DayCard {
        morning,
        day,
        evening,
        night,
    }
}

/// The card for today's date.
pub fn day_card_today(birth_day: i64, name_sum: i64) -> DayCard {
    day_card(birth_day, name_sum, CalendarDate::today())
}
