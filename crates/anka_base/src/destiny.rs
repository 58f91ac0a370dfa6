//! Destiny number and 8-position destiny matrix.

use anka_math::{digit_sum, reduce_to_single_or_master};
use anka_time::CalendarDate;

use crate::destiny_types::{DestinyMatrix, DestinyNumber};

/// Destiny number: the sum of every digit of day, month and year,
/// reduced to a single digit or master number.
pub fn destiny_number(date: CalendarDate) -> DestinyNumber {
    let total =
        digit_sum(date.day as i64) + digit_sum(date.month as i64) + digit_sum(date.year as i64);
    DestinyNumber::from_value(reduce_to_single_or_master(total))
}

/// The 8-position destiny matrix.
///
/// Each position reduces its stated input sum through
/// `reduce_to_single_or_master`:
/// - day/month/year: the raw component
/// - life path: same algorithm as [`destiny_number`]
/// - personality: day + month (raw components)
/// - soul: reduced(month) + reduced(year)
/// - power: reduced(day) + reduced(year)
/// - karmic: reduced(day) + reduced(month) + reduced(year)
pub fn destiny_matrix(date: CalendarDate) -> DestinyMatrix {
    let day = date.day as i64;
    let month = date.month as i64;
    let year = date.year as i64;

    let day_number = reduce_to_single_or_master(day);
    let month_number = reduce_to_single_or_master(month);
    let year_number = reduce_to_single_or_master(digit_sum(year));

    DestinyMatrix {
        day_number,
        month_number,
        year_number,
        life_path: destiny_number(date).value,
        personality: reduce_to_single_or_master(day + month),
        soul: reduce_to_single_or_master(month_number + year_number),
        power: reduce_to_single_or_master(day_number + year_number),
        karmic: reduce_to_single_or_master(day_number + month_number + year_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destiny_master_33() {
        let n = destiny_number(CalendarDate::new(1990, 8, 15));
        assert_eq!(n.value, 33);
        assert!(n.is_master);
    }

    #[test]
    fn destiny_plain_4() {
        let n = destiny_number(CalendarDate::new(2000, 1, 1));
        assert_eq!(n.value, 4);
        assert!(!n.is_master);
    }

    #[test]
    fn matrix_reference_date() {
        let m = destiny_matrix(CalendarDate::new(1990, 6, 15));
        assert_eq!(m.day_number, 6);
        assert_eq!(m.month_number, 6);
        assert_eq!(m.year_number, 1);
        assert_eq!(m.life_path, 4);
        assert_eq!(m.personality, 3);
        assert_eq!(m.soul, 7);
        assert_eq!(m.power, 7);
        assert_eq!(m.karmic, 4);
    }

    #[test]
    fn matrix_preserves_masters() {
        // 11 Feb 1980: day stays 11, life path 1+1+2+1+9+8+0 = 22.
        let m = destiny_matrix(CalendarDate::new(1980, 2, 11));
        assert_eq!(m.day_number, 11);
        assert_eq!(m.life_path, 22);
        assert_eq!(m.soul, 11);
        assert_eq!(m.karmic, 22);
    }

    #[test]
    fn life_path_matches_destiny_number() {
        for (y, mo, d) in [(1990, 6, 15), (2000, 1, 1), (1980, 2, 11), (1999, 12, 31)] {
            let date = CalendarDate::new(y, mo, d);
            assert_eq!(destiny_matrix(date).life_path, destiny_number(date).value);
        }
    }
}
