//! Dataset Module - Data Acquisition
//!
//! Đọc 4 log sources (logon, device, file, email) từ CSV có header row.
//! Mỗi lần detect đều load lại từ disk, không cache giữa các lần gọi.
//!
//! ## Structure
//! - `record`: Typed rows, dataset kinds và schema
//! - `loader`: CSV loading, `DatasetBundle`

pub mod record;
pub mod loader;

#[cfg(test)]
mod tests;

pub use record::{
    Dataset, DatasetKind, DeviceRecord, EmailRecord, FileAccessRecord, LogonRecord, Record,
};
pub use loader::{load_bundle, load_dataset, read_dataset, DatasetBundle, LoadError};
