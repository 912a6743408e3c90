//! # View Invalidation
//!
//! Generation counter for cached catalog views.
//!
//! ## Contract
//! ```text
//! caller renders listing      snapshot = views.current()
//! admin writes succeed        views.bump()   (once per write)
//! caller re-checks            snapshot != views.current() → refetch
//! ```
//!
//! The counter only ever moves forward; a stale snapshot can never be
//! mistaken for fresh.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic generation counter for catalog views.
///
/// Bumped by the service after every successful write. Callers keep a
/// snapshot and compare it to [`current`](ViewVersion::current) to
/// decide whether their cached listing is stale.
#[derive(Debug, Default)]
pub struct ViewVersion {
    generation: AtomicU64,
}

impl ViewVersion {
    /// Starts at generation zero.
    pub fn new() -> Self {
        ViewVersion::default()
    }

    /// The current generation.
    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Advances the generation, invalidating all earlier snapshots.
    /// Returns the new generation.
    pub fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Whether a snapshot taken earlier is out of date.
    pub fn is_stale(&self, snapshot: u64) -> bool {
        snapshot != self.current()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_advances_generation() {
        let views = ViewVersion::new();
        assert_eq!(views.current(), 0);
        assert_eq!(views.bump(), 1);
        assert_eq!(views.bump(), 2);
        assert_eq!(views.current(), 2);
    }

    #[test]
    fn test_staleness() {
        let views = ViewVersion::new();
        let snapshot = views.current();
        assert!(!views.is_stale(snapshot));
        views.bump();
        assert!(views.is_stale(snapshot));
    }
}
