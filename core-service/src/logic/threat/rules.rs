//! Detection Rules - Thresholds & Constants
//!
//! Định nghĩa các threshold và danh sách cố định cho detection.
//! KHÔNG chứa logic detect - chỉ constants.

// ============================================================================
// THRESHOLDS (Constants - không đổi lúc runtime)
// ============================================================================

/// A user with MORE logons than this is flagged
pub const LOGON_COUNT_THRESHOLD: usize = 10;

/// MORE distinct devices than this across the dataset is flagged
pub const DEVICE_COUNT_THRESHOLD: usize = 5;

// ============================================================================
// WATCH LISTS
// ============================================================================

/// Files whose every access is reported
pub const SENSITIVE_FILES: &[&str] = &["confidential.txt", "secret_data.csv"];

/// Case-insensitive keyword searched in email subjects
pub const SUSPICIOUS_SUBJECT_KEYWORD: &str = "urgent";

// ============================================================================
// FILL VALUES (missing cells)
// ============================================================================

pub const UNKNOWN_USER: &str = "unknown_user";
pub const UNKNOWN_DEVICE: &str = "unknown_device";
pub const UNKNOWN_SENDER: &str = "unknown_sender";

// ============================================================================
// SENTINEL FINDINGS
// ============================================================================

/// Whole pass aborted: a dataset was unavailable
pub const LOAD_ERROR_FINDING: &str = "Error loading data.";

/// Nothing matched
pub const NO_THREATS_FINDING: &str = "No threats detected.";

pub fn is_sensitive_file(filename: &str) -> bool {
    SENSITIVE_FILES.contains(&filename)
}

pub fn is_suspicious_subject(subject: &str) -> bool {
    subject.to_lowercase().contains(SUSPICIOUS_SUBJECT_KEYWORD)
}
