// src/gui/pages/oncoming.rs
use eframe::egui;

use crate::config::{consts::ONCOMING_TEXT, options::PageKind};
use crate::gui::app::App;

pub struct OncomingPage;
pub static PAGE: OncomingPage = OncomingPage;

impl super::Page for OncomingPage {
    fn title(&self) -> &'static str { "Future AI & Computer Vision Capabilities" }
    fn kind(&self) -> PageKind { PageKind::Oncoming }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.label(ONCOMING_TEXT);
    }
}
