//! Numerology calculators over calendar dates.
//!
//! This crate provides:
//! - Working numbers and the Pythagorean square
//! - Destiny number and the 8-position destiny matrix
//! - The 22-arcana chakra chart
//! - The arcana-of-the-day card
//!
//! Every calculator is a pure, total function of its date (and, for
//! the day card, a name-derived sum): same input, same output, no
//! shared state. Calendar validity of the input triple is the caller's
//! concern.

pub mod chart;
pub mod chart_types;
pub mod day_card;
pub mod day_card_types;
pub mod destiny;
pub mod destiny_types;
pub mod square;
pub mod square_types;

pub use chart::arcana_chart;
pub use chart_types::{ALL_CHART_POSITIONS, ArcanaChart, ChartPosition, ParentArcana};
pub use day_card::{
    day_arcana, day_card, day_card_today, evening_arcana, morning_arcana, night_arcana,
};
pub use day_card_types::DayCard;
pub use destiny::{destiny_matrix, destiny_number};
pub use destiny_types::{ALL_POSITIONS, DestinyMatrix, DestinyNumber, MatrixPosition};
pub use square::{pythagorean_square, working_numbers};
pub use square_types::{PythagoreanSquare, WorkingNumbers};
