// src/gui/pages/regulations.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::app::App;
use crate::regulations::{lookup, PROMPT};

pub struct RegulationsPage;
pub static PAGE: RegulationsPage = RegulationsPage;

impl super::Page for RegulationsPage {
    fn title(&self) -> &'static str { "Mining Knowledge Interface" }
    fn kind(&self) -> PageKind { PageKind::Regulations }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let st = app.page();
        ui.label(PROMPT);
        ui.add(egui::TextEdit::singleline(&mut st.query).desired_width(480.0));

        if let Some(answer) = lookup(&st.query) {
            ui.add_space(6.0);
            ui.label(answer);
        }
    }
}
