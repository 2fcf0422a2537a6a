use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::record::{
    Dataset, DatasetKind, DeviceRecord, EmailRecord, FileAccessRecord, LogonRecord, Record,
};

/// Why a dataset could not be supplied
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("no columns to parse from file")]
    Empty,

    #[error("expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// The four datasets for one detection pass.
/// `None` = dataset unavailable (distinct from present-but-empty).
#[derive(Debug, Clone, Default)]
pub struct DatasetBundle {
    pub logon: Option<Dataset<LogonRecord>>,
    pub device: Option<Dataset<DeviceRecord>>,
    pub file: Option<Dataset<FileAccessRecord>>,
    pub email: Option<Dataset<EmailRecord>>,
}

impl DatasetBundle {
    /// True when any of the four datasets is unavailable
    pub fn has_unavailable(&self) -> bool {
        self.logon.is_none() || self.device.is_none() || self.file.is_none() || self.email.is_none()
    }

    /// Kinds that failed to load
    pub fn unavailable(&self) -> Vec<DatasetKind> {
        let present = [
            self.logon.is_some(),
            self.device.is_some(),
            self.file.is_some(),
            self.email.is_some(),
        ];
        DatasetKind::ALL
            .into_iter()
            .zip(present)
            .filter(|(_, ok)| !ok)
            .map(|(kind, _)| kind)
            .collect()
    }
}

/// Load the four CSV files from `dir`.
///
/// Always reads from disk; nothing is cached between calls.
pub fn load_bundle(dir: &Path) -> DatasetBundle {
    let bundle = DatasetBundle {
        logon: load_or_log(dir),
        device: load_or_log(dir),
        file: load_or_log(dir),
        email: load_or_log(dir),
    };

    if bundle.has_unavailable() {
        log::error!("Error loading data from {}: {:?} unavailable", dir.display(), bundle.unavailable());
    } else {
        log::info!("Data loaded successfully from {}", dir.display());
    }

    bundle
}

fn load_or_log<R: Record>(dir: &Path) -> Option<Dataset<R>> {
    let path = dir.join(R::KIND.file_name());
    match load_dataset::<R>(&path) {
        Ok(dataset) => {
            log::debug!("{} columns: {:?} ({} rows)", R::KIND, dataset.columns(), dataset.len());
            Some(dataset)
        }
        Err(e) => {
            log::error!("Error loading {}: {}", R::KIND, e);
            None
        }
    }
}

/// Load one dataset from a header-row CSV file
pub fn load_dataset<R: Record>(path: &Path) -> Result<Dataset<R>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset(file)
}

/// Parse a dataset from any reader.
///
/// Repeated header names keep the first occurrence; later copies become
/// `<name>.1`, `<name>.2`, ... Short rows are padded with missing values; rows longer than the header are rejected.
pub fn read_dataset<R: Record, T: Read>(input: T) -> Result<Dataset<R>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = dedupe_headers(reader.headers()?);
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let mut row = row?;
        if row.len() > headers.len() {
            return Err(LoadError::TooManyFields {
                line: row.position().map(|p| p.line()).unwrap_or_default(),
                expected: headers.len(),
                found: row.len(),
            });
        }
        while row.len() < headers.len() {
            row.push_field("");
        }
        records.push(row.deserialize::<R>(Some(&headers))?);
    }

    Ok(Dataset::new(headers.iter(), records))
}

/// Rename repeated header names so each column name is unique
fn dedupe_headers(headers: &csv::StringRecord) -> csv::StringRecord {
    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut out = csv::StringRecord::with_capacity(headers.as_slice().len(), headers.len());

    for name in headers.iter() {
        let mut unique = name.to_string();
        let mut suffix = 1;
        while seen.contains(&unique) {
            unique = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        out.push_field(&unique);
        seen.insert(unique);
    }

    out
}
