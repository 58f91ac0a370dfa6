//! Property tests over the full calendar input domain.

use anka_base::{
    ALL_CHART_POSITIONS, ALL_POSITIONS, arcana_chart, day_card, destiny_matrix, destiny_number,
    pythagorean_square, working_numbers,
};
use anka_math::{digits_of, is_master_number, reduce_to_single_or_master};
use anka_time::CalendarDate;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = CalendarDate> {
    (1900i32..=2035, 1u32..=12, 1u32..=31)
        .prop_map(|(year, month, day)| CalendarDate::new(year, month, day))
}

proptest! {
    #[test]
    fn calculators_are_idempotent(date in any_date()) {
        let w = working_numbers(date);
        prop_assert_eq!(working_numbers(date), w);
        prop_assert_eq!(pythagorean_square(date, &w), pythagorean_square(date, &w));
        prop_assert_eq!(destiny_number(date), destiny_number(date));
        prop_assert_eq!(destiny_matrix(date), destiny_matrix(date));
        prop_assert_eq!(arcana_chart(date), arcana_chart(date));
    }

    #[test]
    fn destiny_value_in_documented_range(date in any_date()) {
        let n = destiny_number(date);
        prop_assert!((1..=9).contains(&n.value) || is_master_number(n.value));
        prop_assert_eq!(n.is_master, is_master_number(n.value));
    }

    #[test]
    fn matrix_positions_in_documented_range(date in any_date()) {
        let matrix = destiny_matrix(date);
        for p in ALL_POSITIONS {
            let v = matrix.get(p);
            prop_assert!((1..=9).contains(&v) || is_master_number(v), "{} = {v}", p.name());
        }
    }

    #[test]
    fn life_path_cross_consistency(date in any_date()) {
        prop_assert_eq!(destiny_matrix(date).life_path, destiny_number(date).value);
    }

    #[test]
    fn chart_positions_in_arcana_range(date in any_date()) {
        let chart = arcana_chart(date);
        for p in ALL_CHART_POSITIONS {
            let v = chart.get(p);
            prop_assert!((1..=22).contains(&v), "{} = {v}", p.name());
        }
    }

    #[test]
    fn square_conserves_nonzero_digits(date in any_date()) {
        let w = working_numbers(date);
        let square = pythagorean_square(date, &w);
        let mut expected = 0u32;
        for n in [
            date.day as i64,
            date.month as i64,
            date.year as i64,
            w.first,
            w.second,
            w.third,
            w.fourth,
        ] {
            expected += digits_of(n).iter().filter(|&&d| d != 0).count() as u32;
        }
        prop_assert_eq!(square.total_count(), expected);
    }

    #[test]
    fn master_numbers_are_fixed_points(v in prop::sample::select(vec![11i64, 22, 33])) {
        prop_assert_eq!(reduce_to_single_or_master(v), v);
    }

    #[test]
    fn day_card_in_arcana_range(
        date in any_date(),
        birth_day in 1i64..=31,
        name_sum in 0i64..=200,
    ) {
        let card = day_card(birth_day, name_sum, date);
        for v in [card.morning, card.day, card.evening, card.night] {
            prop_assert!((1..=22).contains(&v));
        }
    }
}
