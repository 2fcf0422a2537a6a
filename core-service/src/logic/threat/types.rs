//! Threat Types
//!
//! Core types cho threat detection.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::logic::dataset::DatasetKind;

// ============================================================================
// FINDING
// ============================================================================

/// One human-readable line describing an anomaly or a diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Finding(String);

impl Finding {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MissingColumn> for Finding {
    fn from(err: MissingColumn) -> Self {
        Finding(err.to_string())
    }
}

// ============================================================================
// RULE
// ============================================================================

/// The detection rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    LogonFrequency,
    SensitiveFileAccess,
    DeviceDiversity,
    SuspiciousEmail,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::LogonFrequency => "logon-frequency",
            Rule::SensitiveFileAccess => "sensitive-file-access",
            Rule::DeviceDiversity => "device-diversity",
            Rule::SuspiciousEmail => "suspicious-email",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RULE OUTCOME
// ============================================================================

/// A required column is absent from a dataset
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Column missing in {dataset}: '{column}'")]
pub struct MissingColumn {
    pub dataset: DatasetKind,
    pub column: String,
}

impl MissingColumn {
    pub fn new(dataset: DatasetKind, column: impl Into<String>) -> Self {
        Self {
            dataset,
            column: column.into(),
        }
    }
}

/// Result of one rule: its findings, or the column that stopped it
pub type RuleOutcome = Result<Vec<Finding>, MissingColumn>;
