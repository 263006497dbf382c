// src/csv.rs
//
// Comma-separated text in and out. Reading keeps track of where each row
// started in the file so upload errors can point at the right line, even
// when the file has blank lines or quoted cells spanning several lines.

use std::fmt::Write;

const SEP: char = ',';

/// One record of the file: its cells, and the 1-based line it starts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvRow {
    pub line: usize,
    pub cells: Vec<String>,
}

impl CsvRow {
    /// Cell at `ix`, or "" for a short row.
    pub fn cell(&self, ix: usize) -> &str {
        self.cells.get(ix).map(String::as_str).unwrap_or("")
    }

    fn is_blank(&self) -> bool {
        self.cells.len() == 1 && self.cells[0].is_empty()
    }
}

/* ---------------- Reading ---------------- */

/// Split `text` into records. Quotes and CRLF are honoured, a leading BOM is
/// dropped and blank lines are skipped (they still count for line numbers).
pub fn read_rows(text: &str) -> Vec<CsvRow> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut line = 1;
    let mut cur = CsvRow { line, cells: Vec::new() };
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            SEP if !in_quotes => cur.cells.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                let crlf = ch == '\r' && chars.peek() == Some(&'\n');
                if crlf { chars.next(); }
                line += 1;
                if in_quotes {
                    field.push(ch);
                    if crlf { field.push('\n'); }
                    continue;
                }
                cur.cells.push(std::mem::take(&mut field));
                let done = std::mem::replace(&mut cur, CsvRow { line, cells: Vec::new() });
                if !done.is_blank() {
                    rows.push(done);
                }
            }
            _ => field.push(ch),
        }
    }

    // last record without a trailing newline (or with an unterminated quote)
    cur.cells.push(field);
    if !cur.is_blank() {
        rows.push(cur);
    }
    rows
}

/* ---------------- Writing ---------------- */

fn push_cell(out: &mut String, cell: &str) {
    if cell.contains([SEP, '"', '\n', '\r']) {
        let _ = write!(out, "\"{}\"", cell.replace('"', "\"\""));
    } else {
        out.push_str(cell);
    }
}

fn push_row<S: AsRef<str>>(out: &mut String, row: &[S]) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { out.push(SEP); }
        push_cell(out, cell.as_ref());
    }
    out.push('\n');
}

/// Render a table as CSV text, header line first when there is one.
pub fn to_csv(headers: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let mut out = s!();
    if let Some(h) = headers {
        push_row(&mut out, h);
    }
    for r in rows {
        push_row(&mut out, r);
    }
    out
}
