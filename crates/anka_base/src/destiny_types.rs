//! Types for the destiny number and 8-position destiny matrix.

use serde::{Deserialize, Serialize};

use anka_math::is_master_number;

/// A reduced destiny value in `{1..9, 11, 22, 33}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinyNumber {
    pub value: i64,
    pub is_master: bool,
}

impl DestinyNumber {
    /// Wrap a reduced value, deriving the master flag from it.
    pub fn from_value(value: i64) -> Self {
        Self {
            value,
            is_master: is_master_number(value),
        }
    }
}

/// The 8 named matrix positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatrixPosition {
    DayNumber,
    MonthNumber,
    YearNumber,
    LifePath,
    Personality,
    Soul,
    Power,
    Karmic,
}

/// All 8 positions in presentation order.
pub const ALL_POSITIONS: [MatrixPosition; 8] = [
    MatrixPosition::DayNumber,
    MatrixPosition::MonthNumber,
    MatrixPosition::YearNumber,
    MatrixPosition::LifePath,
    MatrixPosition::Personality,
    MatrixPosition::Soul,
    MatrixPosition::Power,
    MatrixPosition::Karmic,
];

impl MatrixPosition {
    /// Key used by content lookups (`"<name>_<value>"` convention).
    pub const fn name(self) -> &'static str {
        match self {
            Self::DayNumber => "dayNumber",
            Self::MonthNumber => "monthNumber",
            Self::YearNumber => "yearNumber",
            Self::LifePath => "lifePathNumber",
            Self::Personality => "personalityNumber",
            Self::Soul => "soulNumber",
            Self::Power => "powerNumber",
            Self::Karmic => "karmicNumber",
        }
    }

    /// 0-based index.
    pub const fn index(self) -> u8 {
        match self {
            Self::DayNumber => 0,
            Self::MonthNumber => 1,
            Self::YearNumber => 2,
            Self::LifePath => 3,
            Self::Personality => 4,
            Self::Soul => 5,
            Self::Power => 6,
            Self::Karmic => 7,
        }
    }
}

/// The 8-position destiny matrix.
///
/// Every field is in `{1..9, 11, 22, 33}`. `life_path` always equals
/// the destiny number computed from the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinyMatrix {
    pub day_number: i64,
    pub month_number: i64,
    pub year_number: i64,
    pub life_path: i64,
    pub personality: i64,
    pub soul: i64,
    pub power: i64,
    pub karmic: i64,
}

impl DestinyMatrix {
    /// Value at a named position.
    pub fn get(&self, position: MatrixPosition) -> i64 {
        match position {
            MatrixPosition::DayNumber => self.day_number,
            MatrixPosition::MonthNumber => self.month_number,
            MatrixPosition::YearNumber => self.year_number,
            MatrixPosition::LifePath => self.life_path,
            MatrixPosition::Personality => self.personality,
            MatrixPosition::Soul => self.soul,
            MatrixPosition::Power => self.power,
            MatrixPosition::Karmic => self.karmic,
        }
    }
}
