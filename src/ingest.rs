// src/ingest.rs
//
// CSV upload → production table.
//
// Parsing is all-or-nothing: the whole file is read and every numeric cell
// coerced before the first insert, so a bad file leaves the table untouched.
// Inserting is row-by-row in file order, one autocommitted statement each.

use std::fs;
use std::path::Path;

use crate::config::consts::PRODUCTION_COLUMNS;
use crate::csv::read_rows;
use crate::errors::{AppError, AppResult};
use crate::models::NewProduction;
use crate::store::Store;

/// A parsed upload: the file as read (for the preview table) plus the
/// records that will be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductionUpload {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub records: Vec<NewProduction>,
}

impl ProductionUpload {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

pub fn parse_production_csv(text: &str) -> AppResult<ProductionUpload> {
    let mut parsed = read_rows(text).into_iter();
    let Some(header) = parsed.next() else {
        return Err(AppError::Csv(s!("file is empty")));
    };
    let headers = header.cells;

    // Name-based lookup; column order in the file is free.
    let mut ix = [0usize; 4];
    for (slot, name) in ix.iter_mut().zip(PRODUCTION_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| AppError::Csv(format!("missing column '{}'", name)))?;
    }
    let [date_ix, extracted_ix, processed_ix, transported_ix] = ix;

    let mut rows = Vec::new();
    let mut records = Vec::new();
    for row in parsed {
        let num = |ci: usize, column: &str| parse_num(row.cell(ci), row.line, column);
        records.push(NewProduction {
            date: s!(row.cell(date_ix)),
            ore_extracted: num(extracted_ix, PRODUCTION_COLUMNS[1])?,
            ore_processed: num(processed_ix, PRODUCTION_COLUMNS[2])?,
            ore_transported: num(transported_ix, PRODUCTION_COLUMNS[3])?,
        });
        rows.push(row.cells);
    }

    Ok(ProductionUpload { headers, rows, records })
}

fn parse_num(cell: &str, line: usize, column: &str) -> AppResult<f64> {
    cell.trim().parse::<f64>().map_err(|_| {
        AppError::Csv(format!("line {}: '{}' is not a number in column '{}'", line, cell, column))
    })
}

/// Insert every parsed row, in file order. Returns how many were written.
pub fn ingest(store: &Store, upload: &ProductionUpload) -> AppResult<usize> {
    for rec in &upload.records {
        store.insert_production(rec)?;
    }
    logf!("Ingest: inserted {} production row(s)", upload.len());
    Ok(upload.len())
}

/// Read `path`, parse it and insert it. The parsed upload is returned for
/// display.
pub fn ingest_file(store: &Store, path: &Path) -> AppResult<ProductionUpload> {
    let text = fs::read_to_string(path)?;
    let upload = parse_production_csv(&text)?;
    logf!("Ingest: parsed {} (rows={})", path.display(), upload.len());
    ingest(store, &upload)?;
    Ok(upload)
}
