//! Eligibility domain error types

use thiserror::Error;

use crate::catalog::CatalogError;
use core_kernel::TemporalError;

/// Top-level error for the eligibility domain
///
/// Evaluation itself never fails; errors arise only from loading
/// configuration or constructing temporal values.
#[derive(Debug, Error)]
pub enum EligibilityError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),
}
