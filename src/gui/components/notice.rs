// src/gui/components/notice.rs
use eframe::egui::{self, Color32, RichText};
use crate::config::state::Notice;

const OK_GREEN: Color32 = Color32::from_rgb(0x21, 0xC3, 0x54);
const ERR_RED: Color32 = Color32::from_rgb(0xFF, 0x4B, 0x4B);

pub fn draw(ui: &mut egui::Ui, notice: Option<&Notice>) {
    let Some(notice) = notice else { return };
    ui.add_space(8.0);
    match notice {
        Notice::Success(msg) => { ui.label(RichText::new(msg).color(OK_GREEN)); }
        Notice::Error(msg) => { ui.label(RichText::new(join!("Error: ", msg)).color(ERR_RED).strong()); }
    }
}
