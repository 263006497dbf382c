// src/models.rs
//
// Row types for the three tables. Plain data; the store owns the SQL.

/// One stored production row.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductionRecord {
    pub id: i64,
    pub date: String,
    pub ore_extracted: f64,
    pub ore_processed: f64,
    pub ore_transported: f64,
}

/// A production row before it has an id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduction {
    pub date: String,
    pub ore_extracted: f64,
    pub ore_processed: f64,
    pub ore_transported: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
}

impl ProductionRecord {
    pub const HEADERS: [&'static str; 5] =
        ["id", "date", "ore_extracted", "ore_processed", "ore_transported"];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            fmt_num(self.ore_extracted),
            fmt_num(self.ore_processed),
            fmt_num(self.ore_transported),
        ]
    }
}

impl Task {
    pub const HEADERS: [&'static str; 5] =
        ["id", "title", "description", "assigned_to", "status"];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.assigned_to.clone(),
            self.status.clone(),
        ]
    }
}

/// Render a REAL the way a dataframe would: integral values keep one decimal.
pub fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}
