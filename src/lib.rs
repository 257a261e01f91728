//! Outlier-preserving streaming histogram in Rust
//!
//! A data structure for approximating the empirical distribution of an
//! unbounded stream of samples in bounded memory. The most extreme samples on
//! each side are kept exactly, so tail percentiles are never distorted by
//! merging, while the bulk of the samples is folded into a fixed number of
//! bins.
//!
//! ## Example
//!
//! ```rust
//! use histog::{Distribution, DistributionConfig};
//!
//! let config = DistributionConfig::default()
//!     .with_bin_count(100)
//!     .with_outlier_count(10);
//! let mut d = Distribution::new(config).unwrap();
//!
//! d.update_all((1..=100_000).map(f64::from)).unwrap();
//!
//! assert_eq!(d.total_count(), 100_000);
//! assert_eq!(d.max(), Some(100_000.0));
//! assert_eq!(d.low_outliers(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
//!
//! let ans = d.estimate_quantile(0.5).unwrap();
//! let expected: f64 = 50_000.0;
//!
//! let percentage: f64 = (expected - ans).abs() / expected;
//! assert!(percentage < 0.01);
//! ```

mod bin;
mod bin_store;
mod config;
mod distribution;
mod error;
mod outliers;

pub use bin::*;
pub use bin_store::*;
pub use config::*;
pub use distribution::*;
pub use error::*;
pub use outliers::*;
