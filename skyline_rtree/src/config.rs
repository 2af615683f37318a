// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time parameters for an [`RTree`](crate::RTree).

use crate::error::{IndexError, Result};

/// Default maximum number of entries per node.
pub const DEFAULT_CAPACITY: usize = 4;

/// Default minimum fill of a split product, in percent of the capacity.
pub const DEFAULT_MIN_FILL_PERCENT: usize = 40;

/// Fan-out parameters, fixed for the lifetime of a tree.
///
/// ```
/// use skyline_rtree::TreeConfig;
///
/// let config = TreeConfig::default().with_capacity(10);
/// assert_eq!(config.min_fill(), 4);
/// assert!(config.validate().is_ok());
/// assert!(TreeConfig::default().with_capacity(1).validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreeConfig {
    capacity: usize,
    min_fill_percent: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            min_fill_percent: DEFAULT_MIN_FILL_PERCENT,
        }
    }
}

impl TreeConfig {
    /// Set the maximum number of points (leaf) or children (internal) per node.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the minimum size of each split product, in percent of the capacity.
    #[must_use]
    pub const fn with_min_fill_percent(mut self, percent: usize) -> Self {
        self.min_fill_percent = percent;
        self
    }

    /// Maximum entries per node.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Minimum fill in percent of the capacity.
    pub const fn min_fill_percent(&self) -> usize {
        self.min_fill_percent
    }

    /// Minimum number of entries in each product of a split: `ceil(capacity * percent / 100)`.
    ///
    /// Saturates instead of overflowing; [`validate`](Self::validate) rejects
    /// parameters where that would happen.
    pub const fn min_fill(&self) -> usize {
        self.capacity
            .saturating_mul(self.min_fill_percent)
            .div_ceil(100)
    }

    /// Check that splits are well defined for these parameters.
    ///
    /// With at most 50 percent minimum fill, an overflowing node of
    /// `capacity + 1` entries always has at least one valid split position.
    pub fn validate(&self) -> Result<()> {
        if self.capacity < 2 || self.capacity.checked_mul(self.min_fill_percent).is_none() {
            return Err(IndexError::InvalidCapacity(self.capacity));
        }
        if !(1..=50).contains(&self.min_fill_percent) {
            return Err(IndexError::InvalidMinFill(self.min_fill_percent));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_fan_out() {
        let c = TreeConfig::default();
        assert_eq!(c.capacity(), 4);
        assert_eq!(c.min_fill(), 2, "ceil(0.4 * 4)");
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn min_fill_rounds_up() {
        assert_eq!(TreeConfig::default().with_capacity(2).min_fill(), 1);
        assert_eq!(TreeConfig::default().with_capacity(5).min_fill(), 2);
        assert_eq!(TreeConfig::default().with_capacity(8).min_fill(), 4);
        assert_eq!(
            TreeConfig::default()
                .with_capacity(7)
                .with_min_fill_percent(50)
                .min_fill(),
            4
        );
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert_eq!(
            TreeConfig::default().with_capacity(1).validate(),
            Err(IndexError::InvalidCapacity(1))
        );
        assert_eq!(
            TreeConfig::default().with_min_fill_percent(0).validate(),
            Err(IndexError::InvalidMinFill(0))
        );
        assert_eq!(
            TreeConfig::default().with_min_fill_percent(60).validate(),
            Err(IndexError::InvalidMinFill(60))
        );
    }

    #[test]
    fn huge_capacity_is_rejected_without_overflow() {
        let huge = usize::MAX / 10;
        let config = TreeConfig::default().with_capacity(huge);
        assert_eq!(config.validate(), Err(IndexError::InvalidCapacity(huge)));
        assert_eq!(config.min_fill(), usize::MAX.div_ceil(100));
        assert_eq!(
            crate::RTree::<u64>::with_config(config).unwrap_err(),
            IndexError::InvalidCapacity(huge)
        );
    }
}
