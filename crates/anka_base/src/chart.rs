//! The 22-arcana chakra chart derivation.

use anka_math::arcana_fold;
use anka_time::CalendarDate;

use crate::chart_types::{ArcanaChart, ParentArcana};

/// Compute the full chart for a birth date.
///
/// Positions are derived strictly in dependency order; every sum goes
/// through [`arcana_fold`] before it is stored or reused. The chart is
/// a pure function of the date.
pub fn arcana_chart(date: CalendarDate) -> ArcanaChart {
    let a = arcana_fold(date.day as i64);
    let b = arcana_fold(date.month as i64);
    let c = arcana_fold(date.year as i64);

    let d = arcana_fold(a + b + c);
    let k1 = arcana_fold(d + c);

    let x = arcana_fold(a + b + c + d);

    let d2 = arcana_fold(d + x);
    let d1 = arcana_fold(d + d2);
    let c2 = arcana_fold(c + x);
    let c1 = arcana_fold(c + c2);
    let k2 = arcana_fold(d2 + c2);

    let k3 = arcana_fold(x + x);

    let b2 = arcana_fold(b + x);
    let b3 = arcana_fold(b2 + x);
    let a2 = arcana_fold(a + x);
    let a3 = arcana_fold(a2 + x);
    let k4 = arcana_fold(b3 + a3);

    let k5 = arcana_fold(b2 + a2);

    let b1 = arcana_fold(b + b2);
    let a1 = arcana_fold(a + a2);
    let k6 = arcana_fold(b1 + a1);

    let e = arcana_fold(a + b);

    let t1 = arcana_fold(d + d2 + b3 + x + b1 + b2 + b);
    let t2 = arcana_fold(a + a1 + a2 + a3 + x + c2 + c);
    let t3 = arcana_fold(e + k6 + k5 + k4 + k3 + k2 + k1);

    let ln = arcana_fold(b + d);
    let lz = arcana_fold(a + c);
    let lp1 = arcana_fold(ln + lz);

    let g = arcana_fold(c + d);
    let f = arcana_fold(b + c);
    let h = arcana_fold(d + a);
    let lo = arcana_fold(e + g);
    let lm = arcana_fold(f + h);
    let y = arcana_fold(e + f + g + h);

    let lp3 = arcana_fold(lp1 + y);

    ArcanaChart {
        a,
        b,
        c,
        d,
        x,
        a1,
        a2,
        a3,
        b1,
        b2,
        b3,
        c1,
        c2,
        d1,
        d2,
        k1,
        k2,
        k3,
        k4,
        k5,
        k6,
        e,
        f,
        g,
        h,
        lo,
        lm,
        y,
        ln,
        lz,
        lp1,
        lp3,
        t1,
        t2,
        t3,
        parents: ParentArcana {
            man: [e, g, x],
            woman: [f, h, x],
        },
    }
}
