// src/store.rs
//
// SQLite-backed storage for the three tables. A `Store` is opened for one
// operation and dropped right after; there is no long-lived connection.
// Every mutation is a single autocommitted statement.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, Row};

use crate::errors::AppResult;
use crate::models::{NewProduction, NewTask, ProductionRecord, Task, User};

const SCHEMA_SQL: &str = include_str!("schema.sql");

#[derive(Debug)]
pub struct Store {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl Store {
    /// Open (or create) the database file and make sure all tables exist.
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        logd!("Store: opened {}", path.display());

        Ok(Self { conn, db_path: Some(path.to_path_buf()) })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn, db_path: None })
    }

    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /* ---------- production ---------- */

    pub fn insert_production(&self, rec: &NewProduction) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO production (date, ore_extracted, ore_processed, ore_transported)
             VALUES (?1, ?2, ?3, ?4)",
            params![rec.date, rec.ore_extracted, rec.ore_processed, rec.ore_transported],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Every production row, in whatever order the engine scans them.
    pub fn all_production(&self) -> AppResult<Vec<ProductionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, ore_extracted, ore_processed, ore_transported FROM production",
        )?;
        let rows = stmt.query_map([], map_production)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn production_count(&self) -> AppResult<i64> {
        Ok(self.conn.query_row("SELECT COUNT(*) FROM production", [], |row| row.get(0))?)
    }

    /* ---------- users ---------- */

    pub fn insert_user(&self, username: &str, role: &str) -> AppResult<User> {
        self.conn.execute(
            "INSERT INTO users (username, role) VALUES (?1, ?2)",
            params![username, role],
        )?;
        Ok(User {
            id: self.conn.last_insert_rowid(),
            username: s!(username),
            role: s!(role),
        })
    }

    pub fn list_users(&self) -> AppResult<Vec<User>> {
        let mut stmt = self.conn.prepare("SELECT id, username, role FROM users")?;
        let rows = stmt.query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                role: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /* ---------- tasks ---------- */

    pub fn insert_task(&self, task: &NewTask, status: &str) -> AppResult<Task> {
        self.conn.execute(
            "INSERT INTO tasks (title, description, assigned_to, status) VALUES (?1, ?2, ?3, ?4)",
            params![task.title, task.description, task.assigned_to, status],
        )?;
        Ok(Task {
            id: self.conn.last_insert_rowid(),
            title: task.title.clone(),
            description: task.description.clone(),
            assigned_to: task.assigned_to.clone(),
            status: s!(status),
        })
    }

    /// Exact, case-sensitive match on `assigned_to`.
    pub fn tasks_assigned_to(&self, username: &str) -> AppResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, assigned_to, status FROM tasks WHERE assigned_to = ?1",
        )?;
        let rows = stmt.query_map([username], map_task)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

/// SQLite stores NaN as NULL, and older files may hold NULLs for empty
/// cells. Both come back as NaN so one missing value can't break the read.
fn real_or_nan(row: &Row<'_>, ix: usize) -> rusqlite::Result<f64> {
    Ok(row.get::<_, Option<f64>>(ix)?.unwrap_or(f64::NAN))
}

fn map_production(row: &Row<'_>) -> rusqlite::Result<ProductionRecord> {
    Ok(ProductionRecord {
        id: row.get(0)?,
        date: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        ore_extracted: real_or_nan(row, 2)?,
        ore_processed: real_or_nan(row, 3)?,
        ore_transported: real_or_nan(row, 4)?,
    })
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        assigned_to: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        status: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}
