use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;
use tempfile::tempdir;
use tipcalclib::{
    compute, error::TipError, CalculationInput, ExportOutcome, HistoryRecord, HistoryStore,
};

fn record(bill: Decimal, tip: Decimal, total: Decimal) -> HistoryRecord {
    HistoryRecord::new(bill, tip, total)
}

#[test]
fn missing_file_is_empty_history() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("history.json"));
    assert!(store.load().expect("load").is_empty());
    assert!(store.is_empty().expect("is_empty"));
    assert!(!store.path().exists());
}

#[test]
fn append_keeps_order() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("history.json"));

    let first = record(dec!(100), dec!(10), dec!(110));
    let second = record(dec!(50), dec!(7.5), dec!(57.5));
    store.append(first.clone()).expect("append first");
    assert_eq!(store.load().expect("load"), vec![first.clone()]);

    store.append(second.clone()).expect("append second");
    assert_eq!(store.load().expect("load"), vec![first, second]);
    assert!(!store.is_empty().expect("is_empty"));
}

#[test]
fn file_keeps_cyrillic_keys() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("history.json"));
    store.append(record(dec!(100), dec!(10), dec!(110))).expect("append");

    let text = fs::read_to_string(store.path()).expect("read history");
    assert!(text.contains("\"Счет\""));
    assert!(text.contains("\"Чаевые\""));
    assert!(text.contains("\"Общая сумма\""));
    assert!(!text.contains("\\u"));
    assert!(text.contains("\n    {"), "4-space indent: {text}");
}

#[test]
fn corrupt_file_is_empty_and_recovers() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("history.json");
    let store = HistoryStore::new(&path);

    for junk in ["not json at all", "[{\"Счет\": ", "[{", ""] {
        fs::write(&path, junk).expect("write junk");
        assert!(store.load().expect("load").is_empty(), "content {junk:?}");
    }

    fs::write(&path, b"\xff\xfe\x00").expect("write bytes");
    assert!(store.load().expect("load").is_empty());

    let rec = record(dec!(20), dec!(2), dec!(22));
    store.append(rec.clone()).expect("append");
    assert_eq!(store.load().expect("load"), vec![rec]);
}

#[test]
fn reads_numeric_values() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("history.json");
    fs::write(
        &path,
        r#"[
    {
        "Счет": 100.0,
        "Чаевые": 10.0,
        "Общая сумма": 110.0
    },
    {
        "Счет": "50",
        "Чаевые": "7.5",
        "Общая сумма": "57.5"
    }
]"#,
    )
    .expect("write history");

    let records = HistoryStore::new(&path).load().expect("load");
    assert_eq!(
        records,
        vec![
            record(dec!(100), dec!(10), dec!(110)),
            record(dec!(50), dec!(7.5), dec!(57.5)),
        ]
    );
}

#[test]
fn append_creates_parent_dirs() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("nested/deeper/history.json"));
    store.append(record(dec!(1), dec!(0.1), dec!(1.1))).expect("append");
    assert_eq!(store.load().expect("load").len(), 1);
}

#[test]
fn export_of_empty_history_writes_nothing() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("history.json"));
    let csv_path = dir.path().join("history.csv");

    let outcome = store.export_csv(&csv_path).expect("export");
    assert_eq!(outcome, ExportOutcome::Empty);
    assert!(!csv_path.exists());
}

#[test]
fn save_then_export() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("history.json"));
    let csv_path = dir.path().join("history.csv");

    let result = compute(&CalculationInput::new("100").with_tip("10")).expect("valid input");
    store.append(result.to_record()).expect("append");

    let outcome = store.export_csv(&csv_path).expect("export");
    assert_eq!(outcome, ExportOutcome::Written { rows: 1 });
    let csv = fs::read_to_string(&csv_path).expect("read csv");
    assert_eq!(csv, "Счет,Чаевые,Общая сумма\n100,10,110\n");
}

#[test]
fn export_keeps_store_order() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("history.json"));
    let csv_path = dir.path().join("history.csv");

    store.append(record(dec!(50), dec!(7.50), dec!(57.50))).expect("append");
    store.append(record(dec!(100), dec!(10), dec!(110))).expect("append");
    store.append(record(dec!(0.25), dec!(0.02), dec!(0.27))).expect("append");

    let outcome = store.export_csv(&csv_path).expect("export");
    assert_eq!(outcome, ExportOutcome::Written { rows: 3 });

    let csv = fs::read_to_string(&csv_path).expect("read csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Счет,Чаевые,Общая сумма",
            "50,7.5,57.5",
            "100,10,110",
            "0.25,0.02,0.27",
        ]
    );
}

#[test]
fn history_lines() {
    let rec = record(dec!(100), dec!(10.0), dec!(110.00));
    assert_eq!(
        rec.to_string(),
        "Счет: 100.0 руб., Чаевые: 10.0 руб., Общая сумма: 110.0 руб."
    );
}

#[test]
fn valid_json_with_bad_records_is_not_overwritten() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("history.json");
    let store = HistoryStore::new(&path);

    let contents = [
        r#"[{"Счет":"1","Чаевые":"0","Общая сумма":"1"},{"Счет":1e30,"Чаевые":0,"Общая сумма":0}]"#,
        r#"{"Счет": 1}"#,
        r#"[{"a": 1}]"#,
    ];
    for text in contents {
        fs::write(&path, text).expect("write history");

        let err = store.load().expect_err("load must fail");
        assert!(matches!(err, TipError::Json(_)), "{text}: {err:?}");

        let err = store.append(record(dec!(2), dec!(0), dec!(2))).expect_err("append must fail");
        assert!(matches!(err, TipError::Json(_)), "{text}: {err:?}");
        assert_eq!(fs::read_to_string(&path).expect("read history"), text);
    }
}

#[test]
fn append_to_directory_path_fails() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path());
    let err = store.append(record(dec!(1), dec!(0), dec!(1))).expect_err("append must fail");
    assert!(matches!(err, TipError::Io(_)), "{err:?}");
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("history.json"));
    store.append(record(dec!(100), dec!(10), dec!(110))).expect("append");

    let err = store
        .export_csv(dir.path().join("nope/history.csv"))
        .expect_err("export must fail");
    assert!(matches!(err, TipError::Io(_)), "{err:?}");
}

#[test]
fn append_leaves_no_temp_files() {
    let dir = tempdir().expect("tempdir");
    let store = HistoryStore::new(dir.path().join("history.json"));
    store.append(record(dec!(1), dec!(0), dec!(1))).expect("append");
    store.append(record(dec!(2), dec!(0), dec!(2))).expect("append");

    let names: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .map(|e| e.expect("entry").file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("history.json")]);
}
