// src/report.rs
//! Production trends: the chart model behind the dashboard.
//!
//! One x value per stored record (its `date`, as stored) and three series,
//! one per ore quantity. Records are taken in the order the store returns
//! them; nothing is sorted, grouped or filled in. Repeated dates simply
//! repeat on the x axis.

use std::ops::Range;

use crate::models::ProductionRecord;

/// RGB triple; the GUI turns it into an egui color.
pub type Rgb = (u8, u8, u8);

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: Rgb,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductionChart {
    pub title: &'static str,
    pub x: Vec<String>,
    pub series: Vec<Series>,
}

impl Series {
    /// Index ranges of consecutive finite values. A NaN (missing) value
    /// splits the line, so it is drawn as a gap.
    pub fn segments(&self) -> Vec<Range<usize>> {
        let mut runs = Vec::new();
        let mut start = None;
        for (i, v) in self.values.iter().enumerate() {
            match (v.is_finite(), start) {
                (true, None) => start = Some(i),
                (false, Some(st)) => {
                    runs.push(st..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(st) = start {
            runs.push(st..self.values.len());
        }
        runs
    }
}

pub const CHART_TITLE: &str = "Production Trends";

const SERIES_STYLE: [(&str, Rgb); 3] = [
    ("ore_extracted", (0x63, 0x6E, 0xFA)),
    ("ore_processed", (0xEF, 0x55, 0x3B)),
    ("ore_transported", (0x00, 0xCC, 0x96)),
];

impl ProductionChart {
    pub fn from_records(records: &[ProductionRecord]) -> Self {
        let x = records.iter().map(|r| r.date.clone()).collect();
        let pick: [fn(&ProductionRecord) -> f64; 3] = [
            |r| r.ore_extracted,
            |r| r.ore_processed,
            |r| r.ore_transported,
        ];

        let series = SERIES_STYLE
            .iter()
            .zip(pick)
            .map(|(&(name, color), get)| Series {
                name,
                color,
                values: records.iter().map(get).collect(),
            })
            .collect();

        Self { title: CHART_TITLE, x, series }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// (min, max) over every finite value, or None for an empty chart.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
