use super::loader::{load_bundle, load_dataset, read_dataset, LoadError};
use super::record::{DatasetKind, DeviceRecord, EmailRecord, FileAccessRecord, LogonRecord};
use tempfile::tempdir;
use std::fs;

fn write_all_csv(dir: &std::path::Path) {
    fs::write(dir.join("logon.csv"), "id,date,username,activity\n1,2024-01-02,alice,Logon\n").unwrap();
    fs::write(dir.join("device.csv"), "id,device_id\n1,USB-1\n").unwrap();
    fs::write(dir.join("file.csv"), "filename,username\nreport.txt,bob\n").unwrap();
    fs::write(dir.join("email.csv"), "subject,sender,to\nhello,carol,dave\n").unwrap();
}

#[test]
fn test_read_dataset_with_extra_columns() {
    let csv = "id,date,username,pc\n1,2024-01-02,alice,PC-1\n2,2024-01-03,bob,PC-2\n";
    let ds = read_dataset::<LogonRecord, _>(csv.as_bytes()).unwrap();

    assert_eq!(ds.columns(), &["id", "date", "username", "pc"]);
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[0].username.as_deref(), Some("alice"));
    assert_eq!(ds.records()[1].username.as_deref(), Some("bob"));
}

#[test]
fn test_empty_and_na_cells_are_missing() {
    let csv = "subject,sender\n,mallory\nURGENT,NaN\nhi,N/A\n";
    let ds = read_dataset::<EmailRecord, _>(csv.as_bytes()).unwrap();

    let rows = ds.records();
    assert_eq!(rows[0].subject, None);
    assert_eq!(rows[0].sender.as_deref(), Some("mallory"));
    assert_eq!(rows[1].subject.as_deref(), Some("URGENT"));
    assert_eq!(rows[1].sender, None);
    assert_eq!(rows[2].sender, None);
}

#[test]
fn test_missing_column_loads_as_none() {
    let csv = "user,pc\nalice,PC-1\n";
    let ds = read_dataset::<LogonRecord, _>(csv.as_bytes()).unwrap();

    assert!(!ds.has_column("username"));
    assert_eq!(ds.records()[0].username, None);
    let err = ds.require().unwrap_err();
    assert_eq!(err.to_string(), "Column missing in logon.csv: 'username'");
}

#[test]
fn test_short_rows_are_padded() {
    let csv = "id,filename,username\n1,confidential.txt\n2\n";
    let ds = read_dataset::<FileAccessRecord, _>(csv.as_bytes()).unwrap();

    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[0].filename.as_deref(), Some("confidential.txt"));
    assert_eq!(ds.records()[0].username, None);
    assert_eq!(ds.records()[1].filename, None);
}

#[test]
fn test_long_rows_are_rejected() {
    let csv = "device_id\nA,B\n";
    let err = read_dataset::<DeviceRecord, _>(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::TooManyFields { expected: 1, found: 2, .. }));
}

#[test]
fn test_empty_file_is_an_error() {
    let err = read_dataset::<DeviceRecord, _>("".as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Empty));
}

#[test]
fn test_header_only_is_empty_dataset() {
    let ds = read_dataset::<DeviceRecord, _>("device_id\n".as_bytes()).unwrap();
    assert!(ds.is_empty());
    assert!(ds.require().is_ok());
}

#[test]
fn test_load_dataset_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_dataset::<LogonRecord>(&dir.path().join("logon.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("logon.csv"));
}

#[test]
fn test_load_bundle_all_present() {
    let dir = tempdir().unwrap();
    write_all_csv(dir.path());

    let bundle = load_bundle(dir.path());
    assert!(!bundle.has_unavailable());
    assert!(bundle.unavailable().is_empty());
    assert_eq!(bundle.email.unwrap().records()[0].sender.as_deref(), Some("carol"));
}

#[test]
fn test_load_bundle_reports_unavailable() {
    let dir = tempdir().unwrap();
    write_all_csv(dir.path());
    fs::remove_file(dir.path().join("device.csv")).unwrap();

    let bundle = load_bundle(dir.path());
    assert!(bundle.has_unavailable());
    assert_eq!(bundle.unavailable(), vec![DatasetKind::Device]);
    assert!(bundle.logon.is_some());
}

#[test]
fn test_load_bundle_reads_fresh_each_call() {
    let dir = tempdir().unwrap();
    write_all_csv(dir.path());
    let first = load_bundle(dir.path());

    fs::write(dir.path().join("device.csv"), "device_id\nA\nB\nC\n").unwrap();
    let second = load_bundle(dir.path());

    assert_eq!(first.device.unwrap().len(), 1);
    assert_eq!(second.device.unwrap().len(), 3);
}

#[test]
fn test_duplicate_required_header_keeps_first() {
    let csv = "username,username\nalice,bob\n";
    let ds = read_dataset::<LogonRecord, _>(csv.as_bytes()).unwrap();

    assert_eq!(ds.columns(), &["username", "username.1"]);
    assert_eq!(ds.records()[0].username.as_deref(), Some("alice"));
    assert!(ds.require().is_ok());
}

#[test]
fn test_duplicate_header_suffix_skips_taken_names() {
    let csv = "filename,filename.1,filename,username\na.txt,b.txt,confidential.txt,eve\n";
    let ds = read_dataset::<FileAccessRecord, _>(csv.as_bytes()).unwrap();

    assert_eq!(ds.columns(), &["filename", "filename.1", "filename.2", "username"]);
    assert_eq!(ds.records()[0].filename.as_deref(), Some("a.txt"));
    assert_eq!(ds.records()[0].username.as_deref(), Some("eve"));
}
