use chrono::NaiveDate;
use netmon_core::logbook::{LogBook, LogRecord};
use tempfile::tempdir;

#[test]
fn active_devices_log_lands_under_a_timestamped_name() {
    let dir = tempdir().unwrap();
    let book = LogBook::open(dir.path().join("NetworkMonitorLogs")).unwrap();
    let generated = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_micro_opt(7, 5, 3, 120_000)
        .unwrap();
    let record = LogRecord::at(
        "Active Devices",
        generated,
        vec!["192.168.1.1".into(), "192.168.1.5".into()],
    );

    let path = book.save(&record).unwrap();

    assert_eq!(path.file_name().unwrap(), "Active_Devices_20240309_070503.txt");
    assert!(path.starts_with(book.dir()));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Active Devices\nGenerated: 2024-03-09 07:05:03"));
    assert!(text.ends_with("\n\n192.168.1.1\n192.168.1.5\n"));
}

#[test]
fn empty_result_still_writes_header() {
    let dir = tempdir().unwrap();
    let book = LogBook::open(dir.path()).unwrap();

    let path = book.save(&LogRecord::new("Open Ports on 10.0.0.5", Vec::new())).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Open_Ports_on_10.0.0.5_"));
    assert!(name.ends_with(".txt"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Open Ports on 10.0.0.5\nGenerated: "));
    assert!(text.ends_with("\n\n"));
}

#[test]
fn missing_log_directory_is_created() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");

    let book = LogBook::open(&nested).unwrap();

    assert!(nested.is_dir());
    assert_eq!(book.dir(), nested.as_path());
}
