//! Threat detection handlers
//!
//! Every request reloads the CSV logs from disk and runs a fresh pass.

use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use insider_threat_core::logic::{dataset, threat::{self, Finding}};

use crate::{views, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct ThreatsResponse {
    pub threats: Vec<Finding>,
}

/// Rendered findings page
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let findings = run_detection(&state).await?;
    Ok(Html(views::threats_page(&findings)))
}

/// Findings as JSON
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ThreatsResponse>> {
    let threats = run_detection(&state).await?;
    Ok(Json(ThreatsResponse { threats }))
}

/// Load + detect on a blocking thread (file I/O)
async fn run_detection(state: &AppState) -> AppResult<Vec<Finding>> {
    let data_dir = state.config.data_dir.clone();

    let findings = tokio::task::spawn_blocking(move || {
        let bundle = dataset::load_bundle(&data_dir);
        threat::detect(&bundle)
    })
    .await?;

    tracing::debug!("Detection returned {} finding(s)", findings.len());
    Ok(findings)
}
