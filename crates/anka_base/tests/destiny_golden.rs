//! Golden fixtures for the destiny number and matrix.

use anka_base::{ALL_POSITIONS, MatrixPosition, destiny_matrix, destiny_number};
use anka_math::is_master_number;
use anka_time::CalendarDate;

// ---------------------------------------------------------------------------
// Destiny number
// ---------------------------------------------------------------------------

#[test]
fn destiny_15_08_1990_is_master_33() {
    let n = destiny_number(CalendarDate::new(1990, 8, 15));
    assert_eq!(n.value, 33);
    assert!(n.is_master);
}

#[test]
fn destiny_01_01_2000_is_4() {
    let n = destiny_number(CalendarDate::new(2000, 1, 1));
    assert_eq!(n.value, 4);
    assert!(!n.is_master);
}

#[test]
fn destiny_master_flag_tracks_value() {
    for (y, m, d) in [(1990, 8, 15), (2000, 1, 1), (1980, 2, 11), (1990, 6, 15)] {
        let n = destiny_number(CalendarDate::new(y, m, d));
        assert_eq!(n.is_master, is_master_number(n.value));
    }
}

// ---------------------------------------------------------------------------
// Destiny matrix
// ---------------------------------------------------------------------------

#[test]
fn matrix_15_06_1990() {
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
fn matrix_01_01_2000() {
    let m = destiny_matrix(CalendarDate::new(2000, 1, 1));
    assert_eq!(m.day_number, 1);
    assert_eq!(m.month_number, 1);
    assert_eq!(m.year_number, 2);
    assert_eq!(m.life_path, 4);
    assert_eq!(m.personality, 2);
    assert_eq!(m.soul, 3);
    assert_eq!(m.power, 3);
    assert_eq!(m.karmic, 4);
}

#[test]
fn life_path_equals_destiny_number() {
    for (y, m, d) in [
        (1990, 6, 15),
        (2000, 1, 1),
        (1980, 2, 11),
        (1999, 12, 31),
        (1975, 12, 29),
    ] {
        let date = CalendarDate::new(y, m, d);
        assert_eq!(
            destiny_matrix(date).get(MatrixPosition::LifePath),
            destiny_number(date).value,
            "{date}"
        );
    }
}

#[test]
fn all_positions_in_destiny_range() {
    for (y, m, d) in [(1990, 6, 15), (2000, 1, 1), (1980, 2, 11), (1999, 12, 31)] {
        let matrix = destiny_matrix(CalendarDate::new(y, m, d));
        for p in ALL_POSITIONS {
            let v = matrix.get(p);
            assert!(
                (1..=9).contains(&v) || is_master_number(v),
                "{} = {v}",
                p.name()
            );
        }
    }
}
