//! Threat Module
//!
//! Insider threat detection: chạy 4 rule độc lập trên 4 datasets,
//! trả về danh sách findings (chuỗi human-readable).
//!
//! ## Structure
//! - `types`: Core types (Finding, Rule, MissingColumn)
//! - `rules`: Thresholds and constants
//! - `detector`: Detection logic
//!
//! ## Usage
//! ```ignore
//! use insider_threat_core::logic::{dataset, threat};
//!
//! let bundle = dataset::load_bundle(Path::new("./data"));
//! for finding in threat::detect(&bundle) {
//!     println!("{}", finding);
//! }
//! ```

pub mod types;
pub mod rules;
pub mod detector;

// Re-export main types for convenience
pub use types::{Finding, MissingColumn, Rule, RuleOutcome};

pub use rules::{
    DEVICE_COUNT_THRESHOLD,
    LOAD_ERROR_FINDING,
    LOGON_COUNT_THRESHOLD,
    NO_THREATS_FINDING,
    SENSITIVE_FILES,
};

pub use detector::{detect, detect_datasets};
