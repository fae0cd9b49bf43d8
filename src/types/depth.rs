//! Fluid depth levels.

use serde::{Deserialize, Serialize};

/// A discrete fluid depth level.
///
/// Levels run from 1 (shallowest visible fluid) up to the configured maximum
/// (a source/full block, 8 by default). Higher level always means a taller
/// visible column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepthLevel(u8);

impl DepthLevel {
    pub fn new(level: u8) -> Self {
        Self(level)
    }

    /// The raw integer level.
    pub fn level(self) -> u8 {
        self.0
    }

    /// Fullness as a fraction of `max_depth`, in (0, 1].
    pub fn fraction(self, max_depth: u8) -> f32 {
        self.0 as f32 / max_depth as f32
    }

    /// Visible column height in 16ths of a block, rounded half-away-from-zero.
    pub fn fluid_height(self, max_depth: u8) -> i32 {
        (self.fraction(max_depth) * 16.0).round() as i32
    }

    /// Whether this level is (within epsilon) a full block.
    pub fn is_full(self, max_depth: u8) -> bool {
        1.0 - self.fraction(max_depth) < 0.01
    }

    /// All levels from 1 up to and including `max_depth`.
    pub fn all(max_depth: u8) -> impl Iterator<Item = DepthLevel> {
        (1..=max_depth).map(DepthLevel)
    }
}

impl std::fmt::Display for DepthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluid_height_monotonic() {
        let heights: Vec<i32> = DepthLevel::all(8).map(|d| d.fluid_height(8)).collect();
        assert_eq!(heights, vec![2, 4, 6, 8, 10, 12, 14, 16]);
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_is_full_only_at_max() {
        assert!(DepthLevel::new(8).is_full(8));
        assert!(!DepthLevel::new(7).is_full(8));
        assert!(!DepthLevel::new(1).is_full(8));
    }

    #[test]
    fn test_all_covers_domain() {
        let levels: Vec<u8> = DepthLevel::all(8).map(|d| d.level()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
