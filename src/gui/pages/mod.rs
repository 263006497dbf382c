// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use super::app::App;

pub mod dashboard;
pub mod oncoming;
pub mod regulations;
pub mod tasks;
pub mod updates;
pub mod upload;

/// One sidebar destination. Pages are stateless unit structs; whatever they
/// need between frames lives in `App::page()` and is wiped on page switch.
pub trait Page: Send + Sync + 'static {
    /// Heading shown above the page body.
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Called once when the page becomes active (e.g. load rows, fetch).
    fn on_enter(&self, _app: &mut App) {}

    /// Draw the page body. Runs every frame.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
