// src/gui/pages/dashboard.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::{app::App, components::{chart, data_table}, table_model::TableData};
use crate::report::ProductionChart;

pub struct DashboardPage;
pub static PAGE: DashboardPage = DashboardPage;

fn load(app: &mut App) {
    app.page().notice = None;
    if let Some(records) = app.with_store(|store| store.all_production()) {
        logd!("Dashboard: loaded {} production row(s)", records.len());
        app.page().production = Some(records);
    }
}

impl super::Page for DashboardPage {
    fn title(&self) -> &'static str { "Production Tracking & Analytics" }
    fn kind(&self) -> PageKind { PageKind::Dashboard }

    fn on_enter(&self, app: &mut App) {
        load(app);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if ui.button("Refresh").clicked() {
            load(app);
        }
        ui.add_space(6.0);

        let Some(records) = &app.state.gui.page.production else { return };

        data_table::draw(ui, "production", &TableData::from_production(records), 220.0);
        ui.add_space(12.0);
        chart::draw(ui, &ProductionChart::from_records(records));
    }
}
