// src/gui/components/data_table.rs
//
// Read-only table for a TableData. Numeric cells are centered, text is
// left-aligned. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::table_model::TableData;

const ROW_H: f32 = 20.0;

fn looks_numeric(cell: &str) -> bool {
    !cell.is_empty() && cell.trim().parse::<f64>().is_ok()
}

pub fn draw(ui: &mut egui::Ui, id_salt: &str, table: &TableData, max_height: f32) {
    let cols = table.ncols();
    if cols == 0 {
        ui.weak("(no rows)");
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt((id_salt, "hscroll"))
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt((id_salt, "table"))
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(max_height);
            for _ in 0..cols {
                builder = builder.column(Column::auto().at_least(60.0).resizable(true).clip(true));
            }

            builder
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        let label = table.headers.as_ref()
                            .and_then(|hs| hs.get(ci).cloned())
                            .unwrap_or_else(|| format!("Col {}", ci + 1));
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(label).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, table.nrows(), |mut row| {
                        let Some(data) = table.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if looks_numeric(cell) {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
