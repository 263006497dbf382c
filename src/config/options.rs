// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub db_path: PathBuf,
    pub updates_url: String,
    pub updates_limit: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_FILE),
            updates_url: s!(UPDATES_URL),
            updates_limit: UPDATES_LIMIT,
        }
    }
}

/// Sidebar destinations, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Upload,
    Dashboard,
    Regulations,
    Updates,
    Tasks,
    Oncoming,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::Upload,
        PageKind::Dashboard,
        PageKind::Regulations,
        PageKind::Updates,
        PageKind::Tasks,
        PageKind::Oncoming,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Upload      => "Upload Data",
            PageKind::Dashboard   => "Production Dashboard",
            PageKind::Regulations => "Mining Regulations",
            PageKind::Updates     => "Web Scraping Updates",
            PageKind::Tasks       => "Task Management",
            PageKind::Oncoming    => "Oncoming Feature",
        }
    }
}
