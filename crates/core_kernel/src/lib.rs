//! Core Kernel - Foundational types and utilities for the eligibility engine
//!
//! This crate provides the fundamental building blocks used across the domain:
//! - Strongly-typed identifiers for applicants and claims
//! - Temporal types for lookback windows and civil-age computation

pub mod identifiers;
pub mod temporal;

pub use identifiers::{ApplicantId, ClaimId};
pub use temporal::{age_at, full_years_between, LookbackWindow, TemporalError, CLAIMS_LOOKBACK};
