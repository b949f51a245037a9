//! Coordinate frame identity.
//!
//! A [`Frame`] is nothing but an identifier. Fresh frames draw from a
//! process-wide atomic counter, so two frames created with [`Frame::new`] are
//! never equal. [`Frame::with_id`] rebuilds a frame equal to an existing one.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static NEXT_FRAME_ID: AtomicU64 = AtomicU64::new(0);

/// Identity tag for the coordinate frame a quantity is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    id: u64,
}

impl Frame {
    /// Allocate a frame with a new, never-before-returned identifier.
    pub fn new() -> Self {
        let id = Self::next_id();
        tracing::trace!(frame_id = id, "allocated frame");
        Self { id }
    }

    /// A frame with exactly this identifier. Does not advance the counter.
    pub const fn with_id(id: u64) -> Self {
        Self { id }
    }

    /// Advance the process-wide counter and return the previous value.
    pub fn next_id() -> u64 {
        NEXT_FRAME_ID.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Reset the frame counter to zero.
    ///
    /// Identifiers handed out before the reset will be handed out again, so
    /// this must only be used from single-threaded test harnesses.
    #[cfg(any(test, feature = "test-utils"))]
    #[doc(hidden)]
    pub fn reset_counter() {
        NEXT_FRAME_ID.store(0, Ordering::SeqCst);
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fresh_frames_are_distinct() {
        let f1 = Frame::new();
        let f2 = Frame::new();
        assert_ne!(f1, f2);
        assert_ne!(f2, f1);
        assert!(f2.id() > f1.id());
    }

    #[test]
    fn explicit_id_matches() {
        let f1 = Frame::new();
        let f2 = Frame::with_id(f1.id());
        assert_eq!(f1, f2);
    }

    #[test]
    fn explicit_id_does_not_advance_counter() {
        let before = Frame::new();
        let _ = Frame::with_id(u64::MAX);
        let after = Frame::new();
        assert!(after.id() > before.id());
        assert_ne!(after.id(), u64::MAX);
    }

    #[test]
    fn default_is_fresh() {
        assert_ne!(Frame::default(), Frame::default());
    }

    #[test]
    fn concurrent_allocation_is_unique() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| (0..1000).map(|_| Frame::new()).collect::<Vec<_>>()))
            .collect();
        let mut seen = HashSet::new();
        for h in handles {
            for frame in h.join().unwrap() {
                assert!(seen.insert(frame), "duplicate {frame}");
            }
        }
        assert_eq!(seen.len(), 8000);
    }

    #[test]
    fn display() {
        assert_eq!(Frame::with_id(3).to_string(), "frame#3");
    }
}
