//! Pythagorean square: working numbers and digit-frequency grid.

use anka_math::{digit_sum, digits_of, leading_digit};
use anka_time::CalendarDate;

use crate::square_types::{PythagoreanSquare, WorkingNumbers};

/// Derive the four working numbers from a birth date.
///
/// Formulas:
/// - `first  = digit_sum(day) + digit_sum(month) + digit_sum(year)`
/// - `second = digit_sum(first)`
/// - `third  = first - 2 * leading_digit(day)`
/// - `fourth = digit_sum(third)`
///
/// `third` can go negative for small sums; `fourth` digit-sums its
/// absolute value.
pub fn working_numbers(date: CalendarDate) -> WorkingNumbers {
    let first =
        digit_sum(date.day as i64) + digit_sum(date.month as i64) + digit_sum(date.year as i64);
    let second = digit_sum(first);
    let third = first - 2 * leading_digit(date.day as i64);
    let fourth = digit_sum(third);
    WorkingNumbers {
        first,
        second,
        third,
        fourth,
    }
}

/// Tabulate digit frequencies into the 3×3 square.
///
/// Counts every digit 1..=9 (0 is ignored) across day, month, year
/// and all four working numbers, using `|third|`.
pub fn pythagorean_square(date: CalendarDate, working: &WorkingNumbers) -> PythagoreanSquare {
    let mut cells = [[0u32; 3]; 3];
    let sources = [
        date.day as i64,
        date.month as i64,
        date.year as i64,
        working.first,
        working.second,
        working.third,
        working.fourth,
    ];
    for n in sources {
        for d in digits_of(n) {
            if d == 0 {
                continue;
            }
            let idx = (d - 1) as usize;
            cells[idx / 3][idx % 3] += 1;
        }
    }
    PythagoreanSquare { cells }
}
