//! Types for the arcana-of-the-day card.

use serde::{Deserialize, Serialize};

/// The four time-of-day arcana, each in 1..=22.
///
/// `day`, `evening` and `night` are functions of the current date, so
/// the card changes from one calendar day to the next; only `morning`
/// is stable for a given birth day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCard {
    pub morning: i64,
    pub day: i64,
    pub evening: i64,
    pub night: i64,
}
