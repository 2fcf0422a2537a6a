//! Dataset Records
//!
//! Typed rows cho 4 log sources và schema (required columns) của từng dataset.
//! KHÔNG chứa logic detect - chỉ data structures.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::logic::threat::MissingColumn;

// ============================================================================
// MISSING VALUE MARKERS
// ============================================================================

/// Cell values read as "missing" (same set pandas treats as NaN by default)
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan",
    "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a",
    "nan", "null",
];

pub fn is_na(value: &str) -> bool {
    NA_VALUES.contains(&value)
}

/// Deserialize a CSV cell, mapping NA markers to `None`
fn cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !is_na(v)))
}

// ============================================================================
// DATASET KIND
// ============================================================================

/// The four log sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Logon,
    Device,
    File,
    Email,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Logon,
        DatasetKind::Device,
        DatasetKind::File,
        DatasetKind::Email,
    ];

    /// File name on disk, also used in diagnostics
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::Logon => "logon.csv",
            DatasetKind::Device => "device.csv",
            DatasetKind::File => "file.csv",
            DatasetKind::Email => "email.csv",
        }
    }

    /// Columns the detection rules need, in check order
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::Logon => &["username"],
            DatasetKind::Device => &["device_id"],
            DatasetKind::File => &["filename", "username"],
            DatasetKind::Email => &["subject", "sender"],
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// Row type of a dataset
pub trait Record: DeserializeOwned {
    const KIND: DatasetKind;
}

/// Authentication event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogonRecord {
    #[serde(default, deserialize_with = "cell")]
    pub username: Option<String>,
}

impl Record for LogonRecord {
    const KIND: DatasetKind = DatasetKind::Logon;
}

/// Device usage event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeviceRecord {
    #[serde(default, deserialize_with = "cell")]
    pub device_id: Option<String>,
}

impl Record for DeviceRecord {
    const KIND: DatasetKind = DatasetKind::Device;
}

/// File access event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileAccessRecord {
    #[serde(default, deserialize_with = "cell")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "cell")]
    pub username: Option<String>,
}

impl Record for FileAccessRecord {
    const KIND: DatasetKind = DatasetKind::File;
}

/// Email activity event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmailRecord {
    #[serde(default, deserialize_with = "cell")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "cell")]
    pub sender: Option<String>,
}

impl Record for EmailRecord {
    const KIND: DatasetKind = DatasetKind::Email;
}

// ============================================================================
// DATASET
// ============================================================================

/// A loaded table: header columns as read + typed rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset<R> {
    columns: Vec<String>,
    records: Vec<R>,
}

impl<R: Record> Dataset<R> {
    pub fn new<C, S>(columns: C, records: Vec<R>) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            records,
        }
    }

    /// Dataset with the full schema of its kind
    pub fn with_schema(records: Vec<R>) -> Self {
        Self::new(R::KIND.required_columns().iter().copied(), records)
    }

    pub fn kind(&self) -> DatasetKind {
        R::KIND
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Check the schema of this dataset's kind, reporting the first absent column
    pub fn require(&self) -> Result<(), MissingColumn> {
        match R::KIND
            .required_columns()
            .iter()
            .find(|column| !self.has_column(column))
        {
            Some(column) => Err(MissingColumn::new(R::KIND, *column)),
            None => Ok(()),
        }
    }
}
