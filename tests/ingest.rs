// tests/ingest.rs
use std::fs;

use minalytics::csv::read_rows;
use minalytics::errors::AppError;
use minalytics::ingest::{self, parse_production_csv};
use minalytics::report::ProductionChart;
use minalytics::store::Store;

const SAMPLE: &str = "\
date,ore_extracted,ore_processed,ore_transported
2024-01-01,100,90,80
2024-01-02,110,95,85
";

#[test]
fn upload_then_dashboard_end_to_end() {
    let store = Store::open_in_memory().unwrap();
    let before = store.production_count().unwrap();

    let upload = parse_production_csv(SAMPLE).unwrap();
    let n = ingest::ingest(&store, &upload).unwrap();
    assert_eq!(n, 2);
    assert_eq!(store.production_count().unwrap(), before + 2);

    let chart = ProductionChart::from_records(&store.all_production().unwrap());
    assert_eq!(chart.x, vec!["2024-01-01", "2024-01-02"]);
    assert_eq!(chart.series.len(), 3);
    assert_eq!(chart.series("ore_extracted").unwrap().values, vec![100.0, 110.0]);
    assert_eq!(chart.series("ore_processed").unwrap().values, vec![90.0, 95.0]);
    assert_eq!(chart.series("ore_transported").unwrap().values, vec![80.0, 85.0]);
}

#[test]
fn preview_is_the_file_verbatim() {
    let text = "\
ore_transported,date,site,ore_processed,ore_extracted
80,2024-01-01,\"North, pit 2\",90,100
85.5,2024-01-02,South,95,110
";
    let upload = parse_production_csv(text).unwrap();
    assert_eq!(upload.headers, vec!["ore_transported", "date", "site", "ore_processed", "ore_extracted"]);
    assert_eq!(upload.rows[0], vec!["80", "2024-01-01", "North, pit 2", "90", "100"]);
    assert_eq!(upload.rows[1], vec!["85.5", "2024-01-02", "South", "95", "110"]);

    // Columns are matched by name, not position.
    assert_eq!(upload.records[1].date, "2024-01-02");
    assert_eq!(upload.records[1].ore_extracted, 110.0);
    assert_eq!(upload.records[1].ore_transported, 85.5);
}

#[test]
fn missing_column_fails_whole_upload() {
    let err = parse_production_csv("date,ore_extracted,ore_processed\n2024-01-01,1,2\n").unwrap_err();
    match err {
        AppError::Csv(msg) => assert!(msg.contains("ore_transported")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_value_inserts_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("bad.csv");
    fs::write(
        &csv,
        "date,ore_extracted,ore_processed,ore_transported\n2024-01-01,1,2,3\n2024-01-02,lots,2,3\n",
    )
    .unwrap();

    let store = Store::open(&dir.path().join("mining_data.db")).unwrap();
    let err = ingest::ingest_file(&store, &csv).unwrap_err();
    assert!(matches!(err, AppError::Csv(ref m) if m.contains("line 3") && m.contains("ore_extracted")));
    assert_eq!(store.production_count().unwrap(), 0);
}

#[test]
fn empty_numeric_cell_is_rejected() {
    let res = parse_production_csv("date,ore_extracted,ore_processed,ore_transported\n2024-01-01,,2,3\n");
    assert!(matches!(res, Err(AppError::Csv(_))));
}

#[test]
fn ingest_file_from_disk_with_crlf() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("prod.csv");
    fs::write(&csv, SAMPLE.replace('\n', "\r\n")).unwrap();

    let store = Store::open(&dir.path().join("mining_data.db")).unwrap();
    let upload = ingest::ingest_file(&store, &csv).unwrap();
    assert_eq!(upload.len(), 2);
    assert_eq!(store.production_count().unwrap(), 2);

    // uploading the same file again appends, it does not dedupe
    ingest::ingest_file(&store, &csv).unwrap();
    assert_eq!(store.production_count().unwrap(), 4);
}

#[test]
fn missing_file_is_io_error() {
    let store = Store::open_in_memory().unwrap();
    let err = ingest::ingest_file(&store, std::path::Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn error_line_counts_blank_lines_and_quoted_newlines() {
    let text = "date,ore_extracted,ore_processed,ore_transported,note\n\
                \n\
                2024-01-01,1,2,3,\"two\nlines\"\n\
                \n\
                2024-01-02,1,x,3,ok\n";
    let err = parse_production_csv(text).unwrap_err();
    match err {
        AppError::Csv(msg) => assert!(msg.starts_with("line 6:"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rows_know_their_starting_line() {
    let rows = read_rows("\u{feff}a,b\r\n\r\n\"x\r\ny\",1\r\nz,2");
    let lines: Vec<usize> = rows.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![1, 3, 5]);
    assert_eq!(rows[1].cells, vec!["x\r\ny", "1"]);
    assert_eq!(rows[2].cell(1), "2");
    assert_eq!(rows[2].cell(7), "");
}

#[test]
fn nan_upload_leaves_dashboard_readable() {
    let store = Store::open_in_memory().unwrap();
    let upload = parse_production_csv(
        "date,ore_extracted,ore_processed,ore_transported\n2024-01-01,NaN,2,3\n2024-01-02,4,5,6\n",
    )
    .unwrap();
    ingest::ingest(&store, &upload).unwrap();

    let all = store.all_production().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].ore_extracted.is_nan());
    let chart = ProductionChart::from_records(&all);
    assert_eq!(chart.value_range(), Some((2.0, 6.0)));
}
