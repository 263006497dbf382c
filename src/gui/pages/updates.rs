// src/gui/pages/updates.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::app::App;
use crate::updates::fetch_updates;

pub struct UpdatesPage;
pub static PAGE: UpdatesPage = UpdatesPage;

/// Blocking GET on the UI thread; the window stalls until it returns.
fn fetch(app: &mut App) {
    let url = app.state.options.updates_url.clone();
    let limit = app.state.options.updates_limit;
    app.page().notice = None;

    match fetch_updates(&url, limit) {
        Ok(paragraphs) => app.page().updates = Some(paragraphs),
        Err(e) => {
            app.page().updates = None;
            app.notice_err(e);
        }
    }
}

impl super::Page for UpdatesPage {
    fn title(&self) -> &'static str { "Regulatory Updates" }
    fn kind(&self) -> PageKind { PageKind::Updates }

    fn on_enter(&self, app: &mut App) {
        fetch(app);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if ui.button("Refresh").clicked() {
            fetch(app);
        }
        ui.add_space(6.0);

        if let Some(paragraphs) = &app.state.gui.page.updates {
            for p in paragraphs {
                ui.label(p);
                ui.add_space(4.0);
            }
        }
    }
}
