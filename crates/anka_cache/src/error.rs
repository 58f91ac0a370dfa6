//! Error types for cache configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from cache construction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CacheError {
    /// Invalid configuration parameter.
    InvalidConfig(&'static str),
}

impl Display for CacheError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid cache config: {msg}"),
        }
    }
}

impl Error for CacheError {}
