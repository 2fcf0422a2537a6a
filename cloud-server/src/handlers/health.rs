//! Health check handler
//!
//! Reports whether the data directory currently holds the four CSV logs.
//! Only checks presence; parsing happens on the detection routes.

use axum::{extract::State, Json};
use serde::Serialize;

use insider_threat_core::logic::dataset::DatasetKind;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DatasetPresence {
    pub file: &'static str,
    pub present: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" when every log file is present, otherwise "degraded"
    pub status: &'static str,
    pub version: &'static str,
    pub data_dir: String,
    pub datasets: Vec<DatasetPresence>,
    pub timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let data_dir = &state.config.data_dir;

    let datasets: Vec<DatasetPresence> = DatasetKind::ALL
        .iter()
        .map(|kind| DatasetPresence {
            file: kind.file_name(),
            present: data_dir.join(kind.file_name()).is_file(),
        })
        .collect();

    let status = if datasets.iter().all(|d| d.present) {
        "healthy"
    } else {
        tracing::warn!("Data directory {} is missing log files", data_dir.display());
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        data_dir: data_dir.display().to_string(),
        datasets,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
