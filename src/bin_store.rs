use crate::{bin::*, config::validate_bin_count, error::Error};
use tracing::trace;

/// What [BinStore::find_compaction_point] found for an incoming sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompactionPoint {
    /// A bin's value equals the sample exactly.
    ExactMatch(usize),
    /// Left index of the cheapest adjacent pair to merge.
    Merge { idx: usize, cost: f64 },
}

/// Bounded, ascending collection of [Bin]s.
///
/// Once full, every insertion either folds into an exactly matching bin or
/// first merges the cheapest adjacent pair to make room.
#[derive(Debug, Clone)]
pub struct BinStore {
    capacity: usize,
    bins: Vec<Bin>,
}

impl BinStore {
    /// `capacity` must be at least 2 so that a full store always has an
    /// adjacent pair to merge.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        validate_bin_count(capacity)?;
        Ok(Self::with_valid_capacity(capacity))
    }

    pub(crate) fn with_valid_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            bins: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bins.len() >= self.capacity
    }

    #[inline]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Total number of samples represented by all bins.
    pub fn sample_count(&self) -> usize {
        self.bins.iter().map(Bin::count).sum()
    }

    pub fn clear(&mut self) {
        self.bins.clear();
    }

    /// Adds one sample, compacting first if the store is full.
    pub fn insert(&mut self, value: f64) {
        if self.is_full() && self.compact(value) {
            return;
        }
        self.insert_sorted(Bin::singleton(value));
    }

    /// Frees one slot by merging the cheapest adjacent pair, unless `value`
    /// exactly matches a bin, in which case that bin absorbs it and `true` is
    /// returned.
    fn compact(&mut self, value: f64) -> bool {
        match self.find_compaction_point(value) {
            Some(CompactionPoint::ExactMatch(idx)) => {
                trace!(idx, value, "Folding sample into exactly matching bin.");
                self.bins[idx].count += 1;
                true
            }
            Some(CompactionPoint::Merge { idx, cost }) => {
                let right = self.bins.remove(idx + 1);
                let left = self.bins.remove(idx);
                let merged = left + right;
                trace!(
                    idx,
                    cost,
                    merged_value = merged.value,
                    merged_count = merged.count,
                    "Merging adjacent bins."
                );
                self.insert_sorted(merged);
                false
            }
            None => false,
        }
    }

    /// Scans adjacent pairs in ascending order.
    ///
    /// Only the left element of each pair is checked for an exact match, so the
    /// last bin never matches. Among non-matching pairs, the first one with the
    /// strictly smallest merge cost wins.
    pub fn find_compaction_point(&self, value: f64) -> Option<CompactionPoint> {
        let mut best: Option<CompactionPoint> = None;
        let mut min_cost = f64::INFINITY;
        for (idx, pair) in self.bins.windows(2).enumerate() {
            let (curr, next) = (&pair[0], &pair[1]);
            if curr.value == value {
                return Some(CompactionPoint::ExactMatch(idx));
            }
            let cost = curr.merge_cost(next);
            if cost < min_cost {
                min_cost = cost;
                best = Some(CompactionPoint::Merge { idx, cost });
            }
        }
        best
    }

    /// Inserts after every bin ordered at or below `bin`.
    fn insert_sorted(&mut self, bin: Bin) {
        let idx = self.bins.partition_point(|b| *b <= bin);
        self.bins.insert(idx, bin);
    }
}
