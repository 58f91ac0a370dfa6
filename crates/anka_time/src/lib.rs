//! Calendar date value type shared by all calculators.
//!
//! This crate provides:
//! - `CalendarDate`, the canonical `{year, month, day}` triple
//! - Parsing and field-range validation for caller edges
//! - Cache-key and digit-concatenation helpers
//!
//! The calculators themselves accept any syntactically valid triple;
//! calendar validity (real date, not in the future, not before 1900)
//! is the concern of whatever layer admits user input.

pub mod calendar_date;
pub mod error;

pub use calendar_date::CalendarDate;
pub use error::DateError;
