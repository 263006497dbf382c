// src/config/state.rs
use super::options::AppOptions;
use crate::{
    gui::table_model::TableData,
    models::{ProductionRecord, Task},
    tasks::Role,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Widget state for the page currently on screen. Replaced wholesale on
/// every page switch, so nothing carries across pages.
#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub notice: Option<Notice>,

    // Upload Data
    pub upload_path: String,
    pub upload_preview: Option<TableData>,

    // Production Dashboard
    pub production: Option<Vec<ProductionRecord>>,

    // Mining Regulations
    pub query: String,

    // Web Scraping Updates
    pub updates: Option<Vec<String>>,

    // Task Management
    pub role: Role,
    pub username: String,
    pub task_title: String,
    pub task_desc: String,
    pub assigned_to: String,
    pub my_tasks: Option<Vec<Task>>,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active sidebar entry, index into router::PAGES
    pub current_page_index: usize,

    pub page: PageState,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            page: PageState::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
