//! The calculation cache: bounded capacity, lazy TTL expiry, FIFO
//! eviction by insertion order.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use anka_base::{
    DestinyMatrix, DestinyNumber, PythagoreanSquare, WorkingNumbers, destiny_matrix,
    destiny_number, pythagorean_square, working_numbers,
};
use anka_time::CalendarDate;

use crate::error::CacheError;

/// Cache configuration used at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries held at once.
    pub capacity: usize,
    /// Entry lifetime; entries older than this are expired on access.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            ttl: Duration::from_secs(3600),
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// The calculator outputs stored for one birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResult {
    pub date: CalendarDate,
    pub working: WorkingNumbers,
    pub square: PythagoreanSquare,
    pub destiny: DestinyNumber,
    pub matrix: DestinyMatrix,
}

impl CachedResult {
    /// Run every cached calculator for `date`.
    pub fn compute(date: CalendarDate) -> Self {
        let working = working_numbers(date);
        let square = pythagorean_square(date, &working);
        Self {
            date,
            working,
            square,
            destiny: destiny_number(date),
            matrix: destiny_matrix(date),
        }
    }
}

/// One cache slot: the stored result plus its insertion instant.
///
/// Owned exclusively by the cache; recomputation always produces a
/// fresh entry rather than mutating one in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheEntry {
    pub result: CachedResult,
    inserted: Instant,
}

impl CacheEntry {
    /// Age of the entry relative to `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.duration_since(self.inserted)
    }
}

/// Bounded memoization cache keyed by `CalendarDate::cache_key()`.
///
/// Eviction is FIFO by first insertion: overwriting an existing key
/// refreshes its value and timestamp but does NOT move it to the back
/// of the eviction queue. Expiry is lazy on `get` plus an eager
/// [`cleanup`](CalcCache::cleanup) sweep the caller may run
/// periodically; there is no built-in timer.
#[derive(Debug)]
pub struct CalcCache {
    config: CacheConfig,
    entries: HashMap<String, CacheEntry>,
    /// Live keys in first-insertion order; kept in exact sync with
    /// `entries`.
    order: VecDeque<String>,
}

impl Default for CalcCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcCache {
    /// Cache with the default configuration (1000 entries, 1 h TTL).
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default()).expect("default config is valid")
    }

    pub fn with_config(config: CacheConfig) -> Result<Self, CacheError> {
        config.validate()?;
        Ok(Self {
            config,
            entries: HashMap::with_capacity(config.capacity),
            order: VecDeque::with_capacity(config.capacity),
        })
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Number of live entries (expired-but-unswept entries included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `date`, expiring the entry if its TTL has passed.
    pub fn get(&mut self, date: CalendarDate) -> Option<&CacheEntry> {
        self.get_at(date, Instant::now())
    }

    /// [`get`](CalcCache::get) against an explicit clock.
    pub fn get_at(&mut self, date: CalendarDate, now: Instant) -> Option<&CacheEntry> {
        let key = date.cache_key();
        let expired = match self.entries.get(&key) {
            Some(entry) => entry.age(now) > self.config.ttl,
            None => {
                trace!("cache miss for {key}");
                return None;
            }
        };
        if expired {
            self.remove_key(&key);
            debug!("cache entry for {key} expired");
            return None;
        }
        debug!("cache hit for {key}");
        self.entries.get(&key)
    }

    /// Store a result for `date`, evicting the oldest-inserted entry
    /// if the cache is full.
    pub fn insert(&mut self, date: CalendarDate, result: CachedResult) {
        self.insert_at(date, result, Instant::now());
    }

    /// [`insert`](CalcCache::insert) against an explicit clock.
    pub fn insert_at(&mut self, date: CalendarDate, result: CachedResult, now: Instant) {
        let key = date.cache_key();
        let entry = CacheEntry {
            result,
            inserted: now,
        };
        if let Some(slot) = self.entries.get_mut(&key) {
            // Overwrite refreshes the slot but keeps its FIFO position.
            *slot = entry;
            trace!("cache overwrite for {key}");
            return;
        }
        if self.entries.len() >= self.config.capacity {
            self.evict_oldest();
        }
        trace!("cache insert for {key}");
        self.order.push_back(key.clone());
        self.entries.insert(key, entry);
    }

    /// Memoizing entry point: compute on miss, then serve the entry.
    pub fn get_or_compute(&mut self, date: CalendarDate) -> &CacheEntry {
        self.get_or_compute_at(date, Instant::now())
    }

    /// [`get_or_compute`](CalcCache::get_or_compute) against an
    /// explicit clock.
    pub fn get_or_compute_at(&mut self, date: CalendarDate, now: Instant) -> &CacheEntry {
        if self.get_at(date, now).is_none() {
            self.insert_at(date, CachedResult::compute(date), now);
        }
        let key = date.cache_key();
        self.entries.get(&key).expect("entry present after insert")
    }

    /// Eagerly remove every expired entry, returning how many were
    /// dropped. Non-expired entries are untouched.
    pub fn cleanup(&mut self) -> usize {
        self.cleanup_at(Instant::now())
    }

    /// [`cleanup`](CalcCache::cleanup) against an explicit clock.
    pub fn cleanup_at(&mut self, now: Instant) -> usize {
        let ttl = self.config.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.age(now) <= ttl);
        self.order.retain(|key| self.entries.contains_key(key));
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!("cache cleanup removed {removed} expired entries");
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        debug!("cache cleared");
    }

    fn evict_oldest(&mut self) {
        if let Some(key) = self.order.pop_front() {
            self.entries.remove(&key);
            debug!("cache evicted oldest entry {key}");
        }
    }

    fn remove_key(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.retain(|k| k != key);
    }
}
