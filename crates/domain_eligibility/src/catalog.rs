//! Rule catalog loading
//!
//! Partner rule sets live in JSON documents so underwriting rules can change
//! without a code deploy. Every catalog is validated on construction:
//! malformed or incoherent entries are load-time errors, never silently
//! passing criteria at evaluation time.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::ruleset::RuleSet;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to parse the catalog JSON
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// Catalog file not found or unreadable
    #[error("Catalog file not found: {0}")]
    FileNotFound(String),

    /// Catalog contains no rule sets
    #[error("Catalog contains no rule sets")]
    Empty,

    /// Two rule sets share a product name
    #[error("Duplicate product in catalog: {0}")]
    DuplicateProduct(String),

    /// A rule set's thresholds are incoherent
    #[error("Invalid rule set {product}: {message}")]
    Validation { product: String, message: String },
}

/// A validated, read-only collection of partner rule sets
///
/// Loaded once at startup and shared by reference; the engine never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RuleSet>", into = "Vec<RuleSet>")]
pub struct Catalog {
    rule_sets: Vec<RuleSet>,
}

impl TryFrom<Vec<RuleSet>> for Catalog {
    type Error = CatalogError;

    fn try_from(rule_sets: Vec<RuleSet>) -> Result<Self, Self::Error> {
        Catalog::new(rule_sets)
    }
}

impl From<Catalog> for Vec<RuleSet> {
    fn from(catalog: Catalog) -> Self {
        catalog.rule_sets
    }
}

impl Catalog {
    /// Validates and wraps a list of rule sets
    pub fn new(rule_sets: Vec<RuleSet>) -> Result<Self, CatalogError> {
        if rule_sets.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen: Vec<&str> = Vec::new();
        for rule_set in &rule_sets {
            if seen.contains(&rule_set.product.as_str()) {
                return Err(CatalogError::DuplicateProduct(rule_set.product.clone()));
            }
            seen.push(&rule_set.product);
            rule_set.validate().map_err(|message| CatalogError::Validation {
                product: rule_set.product.clone(),
                message,
            })?;
        }
        info!(products = rule_sets.len(), "catalog loaded");
        Ok(Self { rule_sets })
    }

    /// Parses a catalog from a JSON array of rule sets
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let rule_sets: Vec<RuleSet> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(rule_sets)
    }

    /// Loads a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| CatalogError::FileNotFound(path.display().to_string()))?;
        Self::from_json_str(&content)
    }

    /// The partner catalog shipped with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(include_str!("../products/partners.json"))
    }

    /// All rule sets, in catalog order
    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.rule_sets
    }

    /// Looks up a rule set by product name
    pub fn get(&self, product: &str) -> Option<&RuleSet> {
        self.rule_sets.iter().find(|r| r.product == product)
    }

    /// Number of rule sets in the catalog
    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    /// Always false for a validated catalog; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }
}
