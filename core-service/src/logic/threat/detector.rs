//! Threat Detector
//!
//! CHỈ chứa logic detect - không có types, không có constants.
//! Input: 4 datasets (logon, device, file, email)
//! Output: danh sách findings theo thứ tự rule

use std::collections::{BTreeMap, BTreeSet};

use super::rules::{
    is_sensitive_file, is_suspicious_subject, DEVICE_COUNT_THRESHOLD, LOAD_ERROR_FINDING,
    LOGON_COUNT_THRESHOLD, NO_THREATS_FINDING, UNKNOWN_DEVICE, UNKNOWN_SENDER, UNKNOWN_USER,
};
use super::types::{Finding, Rule, RuleOutcome};
use crate::logic::dataset::{
    Dataset, DatasetBundle, DeviceRecord, EmailRecord, FileAccessRecord, LogonRecord,
};

// ============================================================================
// MAIN DETECTION FUNCTION
// ============================================================================

/// Run every rule against a loaded bundle
pub fn detect(bundle: &DatasetBundle) -> Vec<Finding> {
    detect_datasets(
        bundle.logon.as_ref(),
        bundle.device.as_ref(),
        bundle.file.as_ref(),
        bundle.email.as_ref(),
    )
}

/// Run every rule. `None` means the dataset could not be loaded.
///
/// Any unavailable dataset aborts the pass with a single load-error finding.
/// Otherwise the rules run independently in fixed order; a missing column
/// only stops its own rule.
pub fn detect_datasets(
    logon: Option<&Dataset<LogonRecord>>,
    device: Option<&Dataset<DeviceRecord>>,
    file: Option<&Dataset<FileAccessRecord>>,
    email: Option<&Dataset<EmailRecord>>,
) -> Vec<Finding> {
    let (Some(logon), Some(device), Some(file), Some(email)) = (logon, device, file, email) else {
        log::warn!("Detection skipped: dataset unavailable");
        return vec![Finding::new(LOAD_ERROR_FINDING)];
    };

    let outcomes = [
        (Rule::LogonFrequency, logon_frequency(logon)),
        (Rule::SensitiveFileAccess, sensitive_file_access(file)),
        (Rule::DeviceDiversity, device_diversity(device)),
        (Rule::SuspiciousEmail, suspicious_email(email)),
    ];

    let mut findings = Vec::new();
    for (rule, outcome) in outcomes {
        match outcome {
            Ok(hits) => {
                log::debug!("Rule {}: {} finding(s)", rule, hits.len());
                findings.extend(hits);
            }
            Err(missing) => {
                log::warn!("Rule {} skipped: {}", rule, missing);
                findings.push(Finding::from(missing));
            }
        }
    }

    if findings.is_empty() {
        findings.push(Finding::new(NO_THREATS_FINDING));
    }

    log::info!("Detection complete: {} finding(s)", findings.len());
    findings
}

// ============================================================================
// RULES
// ============================================================================

/// Users with more than `LOGON_COUNT_THRESHOLD` logons, in username order
pub fn logon_frequency(logon: &Dataset<LogonRecord>) -> RuleOutcome {
    logon.require()?;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in logon.records() {
        let username = record.username.as_deref().unwrap_or(UNKNOWN_USER);
        *counts.entry(username).or_default() += 1;
    }

    Ok(counts
        .into_iter()
        .filter(|(_, count)| *count > LOGON_COUNT_THRESHOLD)
        .map(|(username, _)| {
            Finding::new(format!("User '{}' has an unusually high number of logons.", username))
        })
        .collect())
}

/// Every row touching a sensitive file, in row order
pub fn sensitive_file_access(file: &Dataset<FileAccessRecord>) -> RuleOutcome {
    file.require()?;

    Ok(file
        .records()
        .iter()
        .filter_map(|record| {
            let filename = record.filename.as_deref().unwrap_or("");
            if !is_sensitive_file(filename) {
                return None;
            }
            let username = record.username.as_deref().unwrap_or(UNKNOWN_USER);
            Some(Finding::new(format!(
                "File '{}' accessed by user '{}'.",
                filename, username
            )))
        })
        .collect())
}

/// One finding when more than `DEVICE_COUNT_THRESHOLD` distinct devices appear
pub fn device_diversity(device: &Dataset<DeviceRecord>) -> RuleOutcome {
    device.require()?;

    let devices_used = device
        .records()
        .iter()
        .map(|record| record.device_id.as_deref().unwrap_or(UNKNOWN_DEVICE))
        .collect::<BTreeSet<_>>()
        .len();

    if devices_used > DEVICE_COUNT_THRESHOLD {
        Ok(vec![Finding::new(format!(
            "Unusually high number of devices used: {}.",
            devices_used
        ))])
    } else {
        Ok(Vec::new())
    }
}

/// Every email whose subject mentions the keyword, in row order
pub fn suspicious_email(email: &Dataset<EmailRecord>) -> RuleOutcome {
    email.require()?;

    Ok(email
        .records()
        .iter()
        .filter_map(|record| {
            let subject = record.subject.as_deref().unwrap_or("");
            if !is_suspicious_subject(subject) {
                return None;
            }
            let sender = record.sender.as_deref().unwrap_or(UNKNOWN_SENDER);
            Some(Finding::new(format!(
                "Suspicious email activity detected: '{}' from '{}'.",
                subject, sender
            )))
        })
        .collect())
}

// ============================================================================
// TESTS
// ============================================================================
