use crate::{bin::*, bin_store::*, config::*, error::Error, outliers::*};
use std::fmt;
use tracing::debug;

/// Approximation of a sample distribution that keeps its extremes exact.
///
/// Every sample is first offered to the low [OutlierSet], then to the high
/// one, and whatever comes out the other end is folded into a bounded
/// [BinStore]. The two outlier sets always hold exact values; the bins hold
/// count-weighted means of everything in between.
#[derive(Debug, Clone)]
pub struct Distribution {
    config: DistributionConfig,
    low: OutlierSet,
    high: OutlierSet,
    bins: BinStore,
    count: usize,
}

impl Default for Distribution {
    #[inline]
    fn default() -> Self {
        Self::from_valid_config(DistributionConfig::default())
    }
}

impl Distribution {
    pub fn new(config: DistributionConfig) -> Result<Self, Error> {
        config.validate()?;
        debug!(
            bin_count = config.bin_count,
            outlier_count = config.outlier_count,
            decay = config.decay,
            "Created distribution."
        );
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DistributionConfig) -> Self {
        Self {
            config,
            low: OutlierSet::new(Side::Low, config.outlier_count),
            high: OutlierSet::new(Side::High, config.outlier_count),
            bins: BinStore::with_valid_capacity(config.bin_count),
            count: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &DistributionConfig {
        &self.config
    }

    /// Reserved configuration value. Samples are never decayed.
    #[inline]
    pub fn decay(&self) -> f64 {
        self.config.decay
    }

    /// Number of samples that reached the bins, either as a new bin or folded
    /// into an exactly matching one.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of samples accepted by [Distribution::update].
    #[inline]
    pub fn total_count(&self) -> usize {
        self.low.len() + self.high.len() + self.bins.sample_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low.is_empty() && self.high.is_empty() && self.bins.is_empty()
    }

    /// The smallest samples seen, ascending.
    #[inline]
    pub fn low_outliers(&self) -> &[f64] {
        self.low.values()
    }

    /// The largest samples seen that are not low outliers, ascending.
    #[inline]
    pub fn high_outliers(&self) -> &[f64] {
        self.high.values()
    }

    /// Bins covering the bulk of the samples, ascending by value.
    #[inline]
    pub fn bins(&self) -> &[Bin] {
        self.bins.bins()
    }

    /// Minimum of all samples. Exact whenever outliers are kept.
    pub fn min(&self) -> Option<f64> {
        self.low
            .values()
            .first()
            .copied()
            .or_else(|| self.bins.bins().first().map(Bin::value))
            .or_else(|| self.high.values().first().copied())
    }

    /// Maximum of all samples. Exact whenever outliers are kept.
    pub fn max(&self) -> Option<f64> {
        self.high
            .values()
            .last()
            .copied()
            .or_else(|| self.bins.bins().last().map(Bin::value))
            .or_else(|| self.low.values().last().copied())
    }

    /// Adds one sample.
    ///
    /// Non-finite samples are rejected and leave the distribution unchanged.
    pub fn update(&mut self, value: f64) -> Result<(), Error> {
        if !value.is_finite() {
            debug!(value, "Rejected non-finite sample.");
            return Err(Error::NonFiniteSample(value));
        }

        let Some(value) = self.low.offer(value).remainder() else {
            return Ok(());
        };
        let Some(value) = self.high.offer(value).remainder() else {
            return Ok(());
        };

        self.bins.insert(value);
        self.count += 1;
        Ok(())
    }

    /// Adds every sample of `values` in order, stopping at the first rejected
    /// one.
    pub fn update_all<I>(&mut self, values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().try_for_each(|value| self.update(value))
    }

    /// Drops every sample while keeping the configuration.
    pub fn clear(&mut self) {
        self.low.clear();
        self.high.clear();
        self.bins.clear();
        self.count = 0;
    }

    /// Approximate order statistics: low outliers, then each bin's value
    /// repeated `count` times, then high outliers.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.low
            .values()
            .iter()
            .copied()
            .chain(
                self.bins
                    .bins()
                    .iter()
                    .flat_map(|bin| std::iter::repeat_n(bin.value(), bin.count())),
            )
            .chain(self.high.values().iter().copied())
    }

    /// Returns an estimate for
    /// [quantile](https://en.wikipedia.org/wiki/Quantile) `q` where `0.0 <= q
    /// <= 1.0`, by nearest rank over [Distribution::iter].
    ///
    /// `q` outside that range is clamped. Returns `None` when empty or when
    /// `q` is NaN.
    pub fn estimate_quantile(&self, q: f64) -> Option<f64> {
        let total = self.total_count();
        if total == 0 || q.is_nan() {
            return None;
        }

        let q = q.clamp(0.0, 1.0);
        let mut rank = ((q * total as f64) as usize).min(total - 1);

        let low = self.low.values();
        if rank < low.len() {
            return Some(low[rank]);
        }
        rank -= low.len();

        for bin in self.bins.bins() {
            if rank < bin.count() {
                return Some(bin.value());
            }
            rank -= bin.count();
        }

        self.high.values().get(rank).copied()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Distribution: Count = {}, Bin Count = {}, Low Outliers = {}, High Outliers = {}",
            self.count,
            self.bins.len(),
            self.low.len(),
            self.high.len()
        )?;
        write_row(f, "Low Outliers", self.low.values().iter().copied())?;
        write_row(f, "Bins", self.bins.bins().iter().map(Bin::value))?;
        write_row(f, "High Outliers", self.high.values().iter().copied())
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    values: impl Iterator<Item = f64>,
) -> fmt::Result {
    writeln!(f, "    {label}:")?;
    for (i, value) in values.enumerate() {
        if i % 20 == 0 {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "    {value:.2}")?;
        } else {
            write!(f, " {value:.2}")?;
        }
    }
    writeln!(f)
}
