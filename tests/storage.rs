// tests/storage.rs
//
// Store behavior against a real database file.
use minalytics::models::{NewProduction, NewTask};
use minalytics::report::ProductionChart;
use minalytics::store::Store;

fn rec(date: &str, a: f64, b: f64, c: f64) -> NewProduction {
    NewProduction { date: date.into(), ore_extracted: a, ore_processed: b, ore_transported: c }
}

#[test]
fn open_creates_file_and_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("mining_data.db");

    let store = Store::open(&path).unwrap();
    assert!(path.exists());
    assert_eq!(store.path(), Some(path.as_path()));
    assert_eq!(store.production_count().unwrap(), 0);
    assert!(store.list_users().unwrap().is_empty());
    assert!(store.tasks_assigned_to("anyone").unwrap().is_empty());
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mining_data.db");

    {
        let store = Store::open(&path).unwrap();
        store.insert_production(&rec("2024-01-01", 1.0, 2.0, 3.0)).unwrap();
    }
    // second open must not wipe existing tables
    let store = Store::open(&path).unwrap();
    let all = store.all_production().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].date, "2024-01-01");
    assert_eq!(all[0].ore_transported, 3.0);
}

#[test]
fn ids_are_unique_and_increasing() {
    let store = Store::open_in_memory().unwrap();
    let a = store.insert_production(&rec("2024-01-01", 1.0, 1.0, 1.0)).unwrap();
    let b = store.insert_production(&rec("2024-01-01", 2.0, 2.0, 2.0)).unwrap();
    let c = store.insert_production(&rec("2024-01-02", 3.0, 3.0, 3.0)).unwrap();
    assert!(a < b && b < c);

    let u1 = store.insert_user("ann", "Mining Engineer").unwrap();
    let u2 = store.insert_user("ann", "Mining Engineer").unwrap();
    assert!(u1.id < u2.id);
}

#[test]
fn duplicate_dates_are_kept() {
    let store = Store::open_in_memory().unwrap();
    store.insert_production(&rec("2024-01-01", 1.0, 1.0, 1.0)).unwrap();
    store.insert_production(&rec("2024-01-01", 5.0, 5.0, 5.0)).unwrap();

    let dates: Vec<String> = store.all_production().unwrap().into_iter().map(|r| r.date).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-01"]);
}

#[test]
fn tasks_filter_is_exact_and_case_sensitive() {
    let store = Store::open_in_memory().unwrap();
    let mk = |who: &str| NewTask { title: "t".into(), description: "d".into(), assigned_to: who.into() };
    store.insert_task(&mk("jsmith"), "In Progress").unwrap();
    store.insert_task(&mk("JSmith"), "In Progress").unwrap();
    store.insert_task(&mk("jsmith "), "In Progress").unwrap();
    store.insert_task(&mk("jsmith"), "In Progress").unwrap();

    let hits = store.tasks_assigned_to("jsmith").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|t| t.assigned_to == "jsmith"));

    assert_eq!(store.tasks_assigned_to("JSmith").unwrap().len(), 1);
    assert!(store.tasks_assigned_to("smith").unwrap().is_empty());
}

#[test]
fn missing_ore_values_read_back_as_nan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mining_data.db");

    let store = Store::open(&path).unwrap();
    store.insert_production(&rec("2024-01-01", 1.0, 2.0, 3.0)).unwrap();
    // "NaN" parses as a float; SQLite keeps it as NULL
    store.insert_production(&rec("2024-01-02", f64::NAN, 4.0, 5.0)).unwrap();
    drop(store);

    // an empty cell written by another tool is a plain NULL
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO production (date, ore_extracted, ore_processed, ore_transported)
             VALUES ('2024-01-03', 7.0, NULL, 9.0)",
            [],
        )
        .unwrap();
    }

    let store = Store::open(&path).unwrap();
    let all = store.all_production().unwrap();
    assert_eq!(all.len(), 3);
    assert!(all[1].ore_extracted.is_nan());
    assert_eq!(all[1].ore_processed, 4.0);
    assert!(all[2].ore_processed.is_nan());
    assert_eq!(all[2].ore_transported, 9.0);

    let chart = ProductionChart::from_records(&all);
    assert_eq!(chart.x, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    assert_eq!(chart.value_range(), Some((1.0, 9.0)));
    assert_eq!(chart.series("ore_extracted").unwrap().segments(), vec![0..1, 2..3]);
    assert_eq!(chart.series("ore_processed").unwrap().segments(), vec![0..2]);
    assert_eq!(chart.series("ore_transported").unwrap().segments(), vec![0..3]);
}
