// src/gui/components/sidebar.rs
//
// App title + the "Go to" radio list. Switching is done here; the App drops
// the old page's state and lets the new page load what it needs.

use eframe::egui;
use crate::config::consts::APP_TITLE;
use crate::gui::{app::App, pages::Page, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.add(egui::Label::new(egui::RichText::new(APP_TITLE).strong().size(18.0)).wrap());
    ui.add_space(10.0);
    ui.label("Go to");

    let cur = app.current_index();
    let mut picked = cur;
    for (idx, page) in router::all_pages().iter().enumerate() {
        ui.radio_value(&mut picked, idx, page.kind().label());
    }

    if picked != cur {
        app.switch_to(picked);
    }
}
