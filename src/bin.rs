use float_ord::FloatOrd;
use std::{cmp::Ordering, ops::Add};

/// A cluster of samples represented as their count-weighted mean.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    pub(crate) value: f64,
    pub(crate) count: usize,
    pub(crate) merges: usize,
}

impl PartialEq for Bin {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Bin {}

impl PartialOrd for Bin {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bin {
    /// Orders by value, then count, then merge depth.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        FloatOrd(self.value)
            .cmp(&FloatOrd(other.value))
            .then(self.count.cmp(&other.count))
            .then(self.merges.cmp(&other.merges))
    }
}

impl Add for Bin {
    type Output = Self;

    /// Merges two bins into one. The merge itself adds one to the merge depth.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let count = self.count + rhs.count;
        Self {
            value: (self.value * self.count as f64 + rhs.value * rhs.count as f64) / count as f64,
            count,
            merges: self.merges + rhs.merges + 1,
        }
    }
}

impl Bin {
    /// A bin holding one unmerged sample.
    #[inline]
    pub fn singleton(value: f64) -> Self {
        Self {
            value,
            count: 1,
            merges: 0,
        }
    }

    /// `count` must be at least 1.
    #[inline]
    pub fn new(value: f64, count: usize, merges: usize) -> Self {
        debug_assert!(count >= 1, "a bin holds at least one sample");
        Self {
            value,
            count,
            merges,
        }
    }

    /// Weighted mean of the samples folded into this bin.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of merges that produced this bin.
    #[inline]
    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Cost of merging `self` with its right neighbour: the average merge
    /// depth after the merge divided by the average mass of the pair.
    #[inline]
    pub fn merge_cost(&self, next: &Self) -> f64 {
        let merges = (self.merges + next.merges + 1) as f64 / 2.0;
        let count = (self.count + next.count) as f64 / 2.0;
        merges / count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_weighted_mean() {
        let merged = Bin::new(3.0, 2, 1) + Bin::singleton(9.0);
        assert_eq!(merged.value(), 5.0);
        assert_eq!(merged.count(), 3);
        assert_eq!(merged.merges(), 2);
    }

    #[test]
    fn test_merge_cost() {
        assert_eq!(Bin::singleton(1.0).merge_cost(&Bin::singleton(2.0)), 0.5);
        let cost = Bin::singleton(2.0).merge_cost(&Bin::new(3.0, 2, 1));
        assert!((cost - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_ordering_breaks_value_ties_by_count_then_merges() {
        let mut bins = vec![
            Bin::new(1.0, 3, 0),
            Bin::singleton(1.0),
            Bin::new(0.5, 4, 2),
            Bin::new(1.0, 3, 1),
        ];
        bins.sort();
        assert_eq!(
            bins,
            vec![
                Bin::new(0.5, 4, 2),
                Bin::singleton(1.0),
                Bin::new(1.0, 3, 0),
                Bin::new(1.0, 3, 1),
            ]
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "a bin holds at least one sample")]
    fn test_rejects_empty_bin() {
        let _ = Bin::new(1.0, 0, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let bin = Bin::new(2.5, 3, 1);
        let json = serde_json::to_string(&bin).unwrap();
        assert_eq!(json, r#"{"value":2.5,"count":3,"merges":1}"#);
        let decoded: Bin = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, bin);
    }
}
