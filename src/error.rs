use thiserror::Error;

/// Errors returned when configuring or feeding a [Distribution](crate::Distribution).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("non-finite sample: {0}")]
    NonFiniteSample(f64),
}
