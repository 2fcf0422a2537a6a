//! Logic Module - Detection Engine
//!
//! - `dataset/` - Data acquisition (CSV logs -> typed datasets)
//! - `threat/` - Rule evaluation (datasets -> findings)

pub mod dataset;
pub mod threat;
