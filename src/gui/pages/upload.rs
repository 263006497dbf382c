// src/gui/pages/upload.rs
//
// CSV upload: type a path and press Upload, or drop a .csv onto the window.
// Order of events per upload: parse → show the file → insert rows → report.

use std::{fs, path::PathBuf};

use eframe::egui;

use crate::{
    config::options::PageKind,
    errors::{AppError, AppResult},
    gui::{app::App, components::data_table, table_model::TableData},
    ingest,
};

pub struct UploadPage;
pub static PAGE: UploadPage = UploadPage;

/// Parse `text`, show it, then insert it. A file that fails to parse leaves
/// no preview and writes nothing.
pub fn upload_text(app: &mut App, source: &str, text: AppResult<String>) {
    app.page().notice = None;
    app.page().upload_preview = None;

    let parsed = text.and_then(|t| ingest::parse_production_csv(&t));
    let upload = match parsed {
        Ok(u) => u,
        Err(e) => {
            app.notice_err(e);
            return;
        }
    };
    logf!("Upload: {} parsed (rows={})", source, upload.len());

    app.page().upload_preview = Some(TableData::from_upload(&upload));
    if app.with_store(|store| ingest::ingest(store, &upload)).is_some() {
        app.notice_ok("Data uploaded successfully!");
    }
}

pub fn upload_file(app: &mut App, path: PathBuf) {
    let source = path.display().to_string();
    let text = fs::read_to_string(&path).map_err(AppError::from);
    upload_text(app, &source, text);
}

fn is_csv(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".csv")
}

impl super::Page for UploadPage {
    fn title(&self) -> &'static str { "Upload Mining Data" }
    fn kind(&self) -> PageKind { PageKind::Upload }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Upload CSV File");

        let mut submit = false;
        ui.horizontal(|ui| {
            let st = app.page();
            let field = ui.add(
                egui::TextEdit::singleline(&mut st.upload_path)
                    .hint_text("path/to/production.csv")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(420.0),
            );
            if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            let ready = !st.upload_path.trim().is_empty();
            if ui.add_enabled(ready, egui::Button::new("Upload")).clicked() {
                submit = true;
            }
        });
        ui.weak("…or drop a .csv file onto this window.");

        if submit {
            let path = PathBuf::from(app.page().upload_path.trim());
            upload_file(app, path);
        }

        // Drag-and-drop: desktop gives a path, web builds give bytes.
        let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                if !path.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv")) {
                    app.notice_err(AppError::Csv(format!("not a .csv file: {}", path.display())));
                    continue;
                }
                app.page().upload_path = path.display().to_string();
                upload_file(app, path);
            } else if let Some(bytes) = file.bytes {
                if !is_csv(&file.name) {
                    app.notice_err(AppError::Csv(format!("not a .csv file: {}", file.name)));
                    continue;
                }
                let text = String::from_utf8(bytes.to_vec())
                    .map_err(|e| AppError::Csv(e.to_string()));
                upload_text(app, &file.name, text);
            }
        }

        if let Some(preview) = &app.state.gui.page.upload_preview {
            ui.add_space(8.0);
            data_table::draw(ui, "upload_preview", preview, 320.0);
        }
    }
}
