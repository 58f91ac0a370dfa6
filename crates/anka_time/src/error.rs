//! Error types for date parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date parsing or field-range validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DateError {
    /// Input string is not a recognized date format.
    Malformed(String),
    /// A date field is outside its documented range.
    FieldRange(&'static str),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed date: {s}"),
            Self::FieldRange(msg) => write!(f, "date field out of range: {msg}"),
        }
    }
}

impl Error for DateError {}
