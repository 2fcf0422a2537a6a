//! Insider Threat Detection - Core Engine
//!
//! Loads four activity logs (logon, device, file, email) and flags
//! potentially anomalous user behavior with a fixed set of heuristic rules.

pub mod constants;
pub mod logic;

pub use logic::dataset::{load_bundle, DatasetBundle};
pub use logic::threat::{detect, Finding};
