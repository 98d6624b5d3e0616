//! Per-instance operation counters
//!
//! Both heaps count the primitive steps they perform so that tests and
//! benchmarks can compare algorithmic cost without relying on wall-clock
//! time. Counters are plain integers owned by the heap; they never affect
//! its behavior.

use std::ops::Sub;

/// Snapshot of the work a heap has done since creation or the last reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpStats {
    /// Calls into the comparator
    pub comparisons: u64,
    /// Pairing-heap `meld` operations
    pub melds: u64,
    /// Binary-heap element swaps
    pub swaps: u64,
}

impl OpStats {
    #[inline]
    pub(crate) fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub(crate) fn record_meld(&mut self) {
        self.melds += 1;
    }

    #[inline]
    pub(crate) fn record_swap(&mut self) {
        self.swaps += 1;
    }
}

impl Sub for OpStats {
    type Output = OpStats;

    /// Work done between two snapshots.
    fn sub(self, earlier: OpStats) -> OpStats {
        OpStats {
            comparisons: self.comparisons.saturating_sub(earlier.comparisons),
            melds: self.melds.saturating_sub(earlier.melds),
            swaps: self.swaps.saturating_sub(earlier.swaps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_difference() {
        let mut stats = OpStats::default();
        stats.record_comparison();
        let before = stats;
        stats.record_comparison();
        stats.record_meld();
        stats.record_swap();

        let delta = stats - before;
        assert_eq!(
            delta,
            OpStats {
                comparisons: 1,
                melds: 1,
                swaps: 1
            }
        );
    }
}
