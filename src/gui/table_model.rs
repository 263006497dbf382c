// src/gui/table_model.rs
//! TableData: headers + rows as display strings, ready for `data_table`.
//!
//! Every table the dashboard shows (upload preview, production, tasks) is
//! converted into this one shape so the table component never needs to know
//! where the rows came from.

use crate::ingest::ProductionUpload;
use crate::models::{ProductionRecord, Task};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn with(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.iter().map(|r| r.len()).max())
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn into_parts(self) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        (self.headers, self.rows)
    }
}

fn owned_headers(hs: &[&str]) -> Option<Vec<String>> {
    Some(hs.iter().map(|h| s!(*h)).collect())
}

impl TableData {
    /// The uploaded file exactly as parsed: every column, every cell.
    pub fn from_upload(upload: &ProductionUpload) -> Self {
        Self::with(Some(upload.headers.clone()), upload.rows.clone())
    }

    pub fn from_production(records: &[ProductionRecord]) -> Self {
        Self::with(
            owned_headers(&ProductionRecord::HEADERS),
            records.iter().map(ProductionRecord::to_row).collect(),
        )
    }

    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self::with(
            owned_headers(&Task::HEADERS),
            tasks.iter().map(Task::to_row).collect(),
        )
    }
}
