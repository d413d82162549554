use thiserror::Error;

/// Malformed unit table. Returned by normalization and every formatting call
/// that has to normalize.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("unit table is empty")]
    EmptyTable,
    #[error("unit '{suffix}' at index {index} has non-positive threshold {threshold}")]
    NonPositiveThreshold {
        index: usize,
        suffix: String,
        threshold: f64,
    },
}
