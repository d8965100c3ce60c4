//! # Height Windows
//!
//! A compliance version is eligible to be active during an inclusive range of
//! heights (typically block numbers). Heights always come from the caller;
//! nothing here reads a clock.

use serde::{Deserialize, Serialize};

/// A point in the host's monotonic height sequence (e.g. a block number).
pub type Height = u64;

/// Inclusive `[start, end]` height range.
///
/// `start <= end` is expected but not enforced. A window with `start > end`
/// contains no height, so a version carrying one can never be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeightWindow {
    /// First height at which the window is open.
    pub start: Height,
    /// Last height at which the window is open.
    pub end: Height,
}

impl HeightWindow {
    /// Create a window from explicit bounds.
    pub fn new(start: Height, end: Height) -> Self {
        Self { start, end }
    }

    /// Create a window that never closes.
    pub fn open_ended(start: Height) -> Self {
        Self {
            start,
            end: Height::MAX,
        }
    }

    /// Whether `height` falls inside the window, bounds included.
    pub fn contains(&self, height: Height) -> bool {
        self.start <= height && height <= self.end
    }

    /// Whether `start <= end`.
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }
}

impl From<Height> for HeightWindow {
    fn from(start: Height) -> Self {
        Self::open_ended(start)
    }
}

impl std::fmt::Display for HeightWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounds_are_inclusive() {
        let w = HeightWindow::new(200, 300);
        assert!(!w.contains(199));
        assert!(w.contains(200));
        assert!(w.contains(300));
        assert!(!w.contains(301));
    }

    #[test]
    fn open_ended_window_reaches_max() {
        let w = HeightWindow::from(200);
        assert_eq!(w.end, u64::MAX);
        assert!(w.contains(u64::MAX));
        assert!(!w.contains(199));
    }

    #[test]
    fn inverted_window_contains_nothing() {
        let w = HeightWindow::new(10, 5);
        assert!(!w.is_well_formed());
        assert!((0..=20).all(|h| !w.contains(h)));
    }

    #[test]
    fn display_format() {
        assert_eq!(HeightWindow::new(1, 2).to_string(), "[1, 2]");
    }

    proptest! {
        #[test]
        fn contains_matches_range_check(start: u64, end: u64, h: u64) {
            let w = HeightWindow::new(start, end);
            prop_assert_eq!(w.contains(h), (start..=end).contains(&h));
        }
    }
}
