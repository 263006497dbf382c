// tests/cli.rs
use std::fs;
use std::path::PathBuf;

use minalytics::cli::{parse_args, run, Command};
use minalytics::config::options::AppOptions;
use minalytics::regulations;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parses_db_flag_anywhere() {
    let (opts, cmd) = parse_args(args(&["tasks", "--db", "/tmp/x.db", "jsmith"])).unwrap();
    assert_eq!(opts.db_path, PathBuf::from("/tmp/x.db"));
    assert_eq!(cmd, Command::Tasks("jsmith".into()));

    let (opts, cmd) = parse_args(args(&["production"])).unwrap();
    assert_eq!(opts, AppOptions::default());
    assert_eq!(cmd, Command::Production);
}

#[test]
fn rejects_bad_input() {
    assert!(parse_args(args(&[])).is_err());
    assert!(parse_args(args(&["frobnicate"])).is_err());
    assert!(parse_args(args(&["add-task", "only title"])).is_err());
    assert!(parse_args(args(&["--db"])).is_err());
    assert_eq!(parse_args(args(&["--help"])).unwrap().1, Command::Help);
}

#[test]
fn full_session_against_one_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("mining_data.db");
    let csv = dir.path().join("prod.csv");
    fs::write(&csv, "date,ore_extracted,ore_processed,ore_transported\n2024-01-01,100,90,80\n").unwrap();

    let mut opts = AppOptions::default();
    opts.db_path = db.clone();

    let out = run(&opts, Command::Upload(csv)).unwrap();
    assert!(out.contains("2024-01-01,100,90,80"));
    assert!(out.contains("Data uploaded successfully!"));

    let out = run(&opts, Command::Production).unwrap();
    assert_eq!(out, "id,date,ore_extracted,ore_processed,ore_transported\n1,2024-01-01,100.0,90.0,80.0\n");

    run(&opts, Command::AddUser("jsmith".into())).unwrap();
    run(&opts, Command::AddTask {
        title: "Inspect Shaft 3".into(),
        description: "Check ventilation, twice".into(),
        assigned_to: "jsmith".into(),
    }).unwrap();

    let out = run(&opts, Command::Tasks("jsmith".into())).unwrap();
    assert_eq!(
        out,
        "id,title,description,assigned_to,status\n1,Inspect Shaft 3,\"Check ventilation, twice\",jsmith,In Progress\n"
    );
    let out = run(&opts, Command::Tasks("JSmith".into())).unwrap();
    assert_eq!(out, "id,title,description,assigned_to,status\n");
}

#[test]
fn ask_is_a_fixed_answer() {
    let opts = AppOptions::default();
    let a = run(&opts, Command::Ask("What royalties apply to gold?".into())).unwrap();
    let b = run(&opts, Command::Ask("x".into())).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.trim_end(), regulations::lookup("x").unwrap());
    assert_eq!(run(&opts, Command::Ask(String::new())).unwrap(), "");
}
