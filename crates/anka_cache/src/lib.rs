//! Bounded, TTL-based memoization for calculation results.
//!
//! This crate provides:
//! - `CalcCache`, a fixed-capacity cache keyed by calendar date with
//!   lazy TTL expiry and FIFO eviction by insertion order
//! - `CachedResult`, the bundle of calculator outputs stored per date
//! - A process-wide shared instance behind a mutex
//!
//! The cache itself takes `&mut self` and holds no lock; callers that
//! share one across threads wrap it the way [`shared`] does. Every
//! operation has an explicit-clock `*_at` variant so tests drive time
//! directly instead of sleeping.

pub mod cache;
pub mod error;

use std::sync::{LazyLock, Mutex};

pub use cache::{CacheConfig, CacheEntry, CachedResult, CalcCache};
pub use error::CacheError;

static SHARED: LazyLock<Mutex<CalcCache>> = LazyLock::new(|| Mutex::new(CalcCache::new()));

/// The process-wide cache with default capacity and TTL.
///
/// Constructed on first use and shared by every caller that does not
/// inject its own instance; the mutex keeps the check-then-evict and
/// check-then-expire sequences atomic across threads.
pub fn shared() -> &'static Mutex<CalcCache> {
    &SHARED
}
