//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and builders for the
//! eligibility engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
