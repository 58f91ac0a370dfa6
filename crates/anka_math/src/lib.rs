//! Digit arithmetic primitives for numerology calculations.
//!
//! This crate provides:
//! - Base-10 digit extraction and digit sums
//! - Master-number detection (11, 22, 33)
//! - The two reduction schemes used by the calculators
//!
//! All functions are pure, total over `i64`, and operate on `|n|`
//! when extracting digits.

pub mod digits;
pub mod reduce;

pub use digits::{digit_sum, digits_of, leading_digit};
pub use reduce::{arcana_fold, arcana_wrap, is_master_number, reduce_to_single_or_master};
