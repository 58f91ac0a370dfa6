//! Golden fixtures for the 22-arcana chakra chart.

use anka_base::{ALL_CHART_POSITIONS, arcana_chart};
use anka_time::CalendarDate;

#[test]
fn chart_15_06_1990() {
    let chart = arcana_chart(CalendarDate::new(1990, 6, 15));

    // base triad and karma
    assert_eq!(chart.a, 15);
    assert_eq!(chart.b, 6);
    assert_eq!(chart.c, 19);
    assert_eq!(chart.d, 4);
    assert_eq!(chart.x, 8);

    // lines toward the center
    assert_eq!((chart.a1, chart.a2, chart.a3), (20, 5, 13));
    assert_eq!((chart.b1, chart.b2, chart.b3), (20, 14, 22));
    assert_eq!((chart.c1, chart.c2), (10, 9));
    assert_eq!((chart.d1, chart.d2), (16, 12));

    // chakra sums
    assert_eq!(
        [chart.k1, chart.k2, chart.k3, chart.k4, chart.k5, chart.k6],
        [5, 21, 16, 8, 19, 4]
    );

    // diagonal square and crossings
    assert_eq!((chart.e, chart.f, chart.g, chart.h), (21, 7, 5, 19));
    assert_eq!((chart.lo, chart.lm, chart.y), (8, 8, 7));

    // purpose lines and totals
    assert_eq!((chart.ln, chart.lz, chart.lp1, chart.lp3), (10, 7, 17, 6));
    assert_eq!((chart.t1, chart.t2, chart.t3), (14, 17, 13));

    // parents reuse derived points
    assert_eq!(chart.parents.man, [21, 5, 8]);
    assert_eq!(chart.parents.woman, [7, 19, 8]);
}

#[test]
fn chart_01_01_2000() {
    let chart = arcana_chart(CalendarDate::new(2000, 1, 1));

    assert_eq!(chart.a, 1);
    assert_eq!(chart.b, 1);
    assert_eq!(chart.c, 2);
    assert_eq!(chart.d, 4);
    assert_eq!(chart.x, 8);

    assert_eq!((chart.a1, chart.a2, chart.a3), (10, 9, 17));
    assert_eq!((chart.b1, chart.b2, chart.b3), (10, 9, 17));
    assert_eq!((chart.c1, chart.c2), (12, 10));
    assert_eq!((chart.d1, chart.d2), (16, 12));

    assert_eq!(
        [chart.k1, chart.k2, chart.k3, chart.k4, chart.k5, chart.k6],
        [6, 22, 16, 7, 18, 20]
    );

    assert_eq!((chart.e, chart.f, chart.g, chart.h), (2, 3, 6, 5));
    assert_eq!((chart.lo, chart.lm, chart.y), (8, 8, 16));

    assert_eq!((chart.ln, chart.lz, chart.lp1, chart.lp3), (5, 3, 8, 6));
    assert_eq!((chart.t1, chart.t2, chart.t3), (7, 12, 10));

    assert_eq!(chart.parents.man, [2, 6, 8]);
    assert_eq!(chart.parents.woman, [3, 5, 8]);
}

#[test]
fn every_position_stays_in_arcana_range() {
    for year in [1900, 1947, 1984, 1999, 2000, 2025] {
        for (month, day) in [(1, 1), (12, 31), (6, 15), (2, 29)] {
            let chart = arcana_chart(CalendarDate::new(year, month, day));
            for p in ALL_CHART_POSITIONS {
                let v = chart.get(p);
                assert!(
                    (1..=22).contains(&v),
                    "{} = {v} for {day}-{month}-{year}",
                    p.name()
                );
            }
        }
    }
}
