//! Types for the 22-arcana chakra chart.
//!
//! Chart positions carry the letter names used on the printed chart:
//! the base points A (day), B (month), C (year), D (karma), the
//! center X, numbered points along each base line (A1..A3, B1..B3,
//! C1..C2, D1..D2), the six chakra sums K1..K6, the diagonal square
//! E/F/G/H with its crossings LO/LM/Y, the purpose lines LN/LZ/LP1/LP3
//! and the three column totals T1..T3.

use serde::{Deserialize, Serialize};

/// One named position of the arcana chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartPosition {
    A,
    B,
    C,
    D,
    X,
    A1,
    A2,
    A3,
    B1,
    B2,
    B3,
    C1,
    C2,
    D1,
    D2,
    K1,
    K2,
    K3,
    K4,
    K5,
    K6,
    E,
    F,
    G,
    H,
    Lo,
    Lm,
    Y,
    Ln,
    Lz,
    Lp1,
    Lp3,
    T1,
    T2,
    T3,
}

/// All 35 chart positions in presentation order.
pub const ALL_CHART_POSITIONS: [ChartPosition; 35] = [
    ChartPosition::A,
    ChartPosition::B,
    ChartPosition::C,
    ChartPosition::D,
    ChartPosition::X,
    ChartPosition::A1,
    ChartPosition::A2,
    ChartPosition::A3,
    ChartPosition::B1,
    ChartPosition::B2,
    ChartPosition::B3,
    ChartPosition::C1,
    ChartPosition::C2,
    ChartPosition::D1,
    ChartPosition::D2,
    ChartPosition::K1,
    ChartPosition::K2,
    ChartPosition::K3,
    ChartPosition::K4,
    ChartPosition::K5,
    ChartPosition::K6,
    ChartPosition::E,
    ChartPosition::F,
    ChartPosition::G,
    ChartPosition::H,
    ChartPosition::Lo,
    ChartPosition::Lm,
    ChartPosition::Y,
    ChartPosition::Ln,
    ChartPosition::Lz,
    ChartPosition::Lp1,
    ChartPosition::Lp3,
    ChartPosition::T1,
    ChartPosition::T2,
    ChartPosition::T3,
];

impl ChartPosition {
    /// Chart label, as printed on the chart and used in content keys.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::X => "x",
            Self::A1 => "a1",
            Self::A2 => "a2",
            Self::A3 => "a3",
            Self::B1 => "b1",
            Self::B2 => "b2",
            Self::B3 => "b3",
            Self::C1 => "c1",
            Self::C2 => "c2",
            Self::D1 => "d1",
            Self::D2 => "d2",
            Self::K1 => "k1",
            Self::K2 => "k2",
            Self::K3 => "k3",
            Self::K4 => "k4",
            Self::K5 => "k5",
            Self::K6 => "k6",
            Self::E => "e",
            Self::F => "f",
            Self::G => "g",
            Self::H => "h",
            Self::Lo => "lo",
            Self::Lm => "lm",
            Self::Y => "y",
            Self::Ln => "ln",
            Self::Lz => "lz",
            Self::Lp1 => "lp1",
            Self::Lp3 => "lp3",
            Self::T1 => "t1",
            Self::T2 => "t2",
            Self::T3 => "t3",
        }
    }
}

/// Arcana triads reused by the parents block.
///
/// No further computation happens here: the man triad is `{E, G, X}`
/// and the woman triad `{F, H, X}`, straight from the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentArcana {
    pub man: [i64; 3],
    pub woman: [i64; 3],
}

/// The full chakra chart: every position in 1..=22.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcanaChart {
    /// Day point.
    pub a: i64,
    /// Month point.
    pub b: i64,
    /// Year point.
    pub c: i64,
    /// Karma point, folded from the base triad.
    pub d: i64,
    /// Center of the chart.
    pub x: i64,
    /// Day line toward the center: outer, middle, inner.
    pub a1: i64,
    pub a2: i64,
    pub a3: i64,
    /// Month line toward the center: outer, middle, inner.
    pub b1: i64,
    pub b2: i64,
    pub b3: i64,
    /// Year line: outer, middle.
    pub c1: i64,
    pub c2: i64,
    /// Karma line: outer, middle.
    pub d1: i64,
    pub d2: i64,
    /// Chakra sums, paired off the facing lines.
    pub k1: i64,
    pub k2: i64,
    pub k3: i64,
    pub k4: i64,
    pub k5: i64,
    pub k6: i64,
    /// Diagonal square corners.
    pub e: i64,
    pub f: i64,
    pub g: i64,
    pub h: i64,
    /// Diagonal crossings and their combined point.
    pub lo: i64,
    pub lm: i64,
    pub y: i64,
    /// Personal purpose line: month-karma, day-year, combined.
    pub ln: i64,
    pub lz: i64,
    pub lp1: i64,
    /// Spiritual purpose: personal combined with the social point.
    pub lp3: i64,
    /// Column totals.
    pub t1: i64,
    pub t2: i64,
    pub t3: i64,
    /// Parent triads reusing already-derived positions.
    pub parents: ParentArcana,
}

impl ArcanaChart {
    /// Value at a named chart position.
    pub fn get(&self, position: ChartPosition) -> i64 {
        match position {
            ChartPosition::A => self.a,
            ChartPosition::B => self.b,
            ChartPosition::C => self.c,
            ChartPosition::D => self.d,
            ChartPosition::X => self.x,
            ChartPosition::A1 => self.a1,
            ChartPosition::A2 => self.a2,
            ChartPosition::A3 => self.a3,
            ChartPosition::B1 => self.b1,
            ChartPosition::B2 => self.b2,
            ChartPosition::B3 => self.b3,
            ChartPosition::C1 => self.c1,
            ChartPosition::C2 => self.c2,
            ChartPosition::D1 => self.d1,
            ChartPosition::D2 => self.d2,
            ChartPosition::K1 => self.k1,
            ChartPosition::K2 => self.k2,
            ChartPosition::K3 => self.k3,
            ChartPosition::K4 => self.k4,
            ChartPosition::K5 => self.k5,
            ChartPosition::K6 => self.k6,
            ChartPosition::E => self.e,
            ChartPosition::F => self.f,
            ChartPosition::G => self.g,
            ChartPosition::H => self.h,
            ChartPosition::Lo => self.lo,
            ChartPosition::Lm => self.lm,
            ChartPosition::Y => self.y,
            ChartPosition::Ln => self.ln,
            ChartPosition::Lz => self.lz,
            ChartPosition::Lp1 => self.lp1,
            ChartPosition::Lp3 => self.lp3,
            ChartPosition::T1 => self.t1,
            ChartPosition::T2 => self.t2,
            ChartPosition::T3 => self.t3,
        }
    }
}
