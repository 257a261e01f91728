use crate::error::Error;

pub const DEFAULT_BIN_COUNT: usize = 100;
pub const DEFAULT_OUTLIER_COUNT: usize = 10;
pub const DEFAULT_DECAY: f64 = 0.95;

/// Capacities for a [Distribution](crate::Distribution).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionConfig {
    /// Maximum number of [Bin](crate::Bin)s kept for the bulk of the samples.
    pub bin_count: usize,
    /// Number of exact extreme values kept on each side.
    pub outlier_count: usize,
    /// Reserved. Stored with the distribution but never applied to samples.
    pub decay: f64,
}

impl Default for DistributionConfig {
    #[inline]
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            outlier_count: DEFAULT_OUTLIER_COUNT,
            decay: DEFAULT_DECAY,
        }
    }
}

impl DistributionConfig {
    #[inline]
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    #[inline]
    pub fn with_outlier_count(mut self, outlier_count: usize) -> Self {
        self.outlier_count = outlier_count;
        self
    }

    #[inline]
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Checks that the bin store can always be compacted.
    ///
    /// Compaction merges an adjacent pair of bins, so at least two bins are
    /// required.
    pub fn validate(&self) -> Result<(), Error> {
        validate_bin_count(self.bin_count)?;
        if !self.decay.is_finite() {
            return Err(Error::InvalidConfig {
                field: "decay",
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_bin_count(bin_count: usize) -> Result<(), Error> {
    if bin_count < 2 {
        return Err(Error::InvalidConfig {
            field: "bin_count",
            reason: "must be at least 2",
        });
    }
    Ok(())
}
