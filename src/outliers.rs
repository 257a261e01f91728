use float_ord::FloatOrd;

/// Which tail of the distribution an [OutlierSet] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Low,
    High,
}

/// Result of offering a sample to an [OutlierSet].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission {
    /// The set had room; the sample is consumed.
    Retained,
    /// The sample displaced the set's boundary member, which must continue
    /// downstream.
    Evicted(f64),
    /// The sample is not more extreme than the boundary and continues
    /// downstream unchanged.
    Passed(f64),
}

impl Admission {
    /// The value that continues downstream, if any.
    #[inline]
    pub fn remainder(self) -> Option<f64> {
        match self {
            Admission::Retained => None,
            Admission::Evicted(value) | Admission::Passed(value) => Some(value),
        }
    }
}

/// Exact, ascending set of the `capacity` most extreme samples seen on one
/// side.
#[derive(Debug, Clone)]
pub struct OutlierSet {
    side: Side,
    capacity: usize,
    values: Vec<f64>,
}

impl OutlierSet {
    pub fn new(side: Side, capacity: usize) -> Self {
        Self {
            side,
            capacity,
            values: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Members in ascending order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The member closest to the bulk of the distribution.
    #[inline]
    pub fn boundary(&self) -> Option<f64> {
        match self.side {
            Side::Low => self.values.last().copied(),
            Side::High => self.values.first().copied(),
        }
    }

    pub fn offer(&mut self, value: f64) -> Admission {
        if self.values.len() < self.capacity {
            self.insert_sorted(value);
            return Admission::Retained;
        }

        let Some(boundary) = self.boundary() else {
            // Zero capacity.
            return Admission::Passed(value);
        };

        let more_extreme = match self.side {
            Side::Low => value < boundary,
            Side::High => value > boundary,
        };
        if !more_extreme {
            return Admission::Passed(value);
        }

        let boundary_idx = match self.side {
            Side::Low => self.values.len() - 1,
            Side::High => 0,
        };
        self.values.remove(boundary_idx);
        self.insert_sorted(value);
        Admission::Evicted(boundary)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    fn insert_sorted(&mut self, value: f64) {
        let idx = self
            .values
            .partition_point(|v| FloatOrd(*v) <= FloatOrd(value));
        self.values.insert(idx, value);
    }
}
