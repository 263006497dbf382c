// src/gui/components/chart.rs
//
// Multi-series line chart painted straight onto the egui painter.
// x is categorical (one slot per record, in the order given); y is linear.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Vec2};
use crate::report::{ProductionChart, Rgb};

const HEIGHT: f32 = 340.0;
const MARGIN_L: f32 = 64.0;
const MARGIN_R: f32 = 16.0;
const MARGIN_T: f32 = 28.0;
const MARGIN_B: f32 = 44.0;
const Y_TICKS: usize = 5;
const MAX_X_LABELS: usize = 8;
const MARKERS_UP_TO: usize = 60;

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Evenly spread x slots; a single point sits in the middle.
fn x_at(plot: Rect, i: usize, n: usize) -> f32 {
    if n <= 1 {
        plot.center().x
    } else {
        plot.left() + plot.width() * i as f32 / (n - 1) as f32
    }
}

fn padded_range(chart: &ProductionChart) -> (f64, f64) {
    let (lo, hi) = chart.value_range().unwrap_or((0.0, 1.0));
    if lo == hi {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

pub fn draw(ui: &mut egui::Ui, chart: &ProductionChart) {
    let width = ui.available_width().max(200.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, HEIGHT), Sense::hover());
    let full = resp.rect;
    let visuals = ui.visuals().clone();
    let text_color = visuals.text_color();
    let grid = Stroke::new(1.0, visuals.weak_text_color().linear_multiply(0.3));

    painter.text(
        Pos2::new(full.left() + MARGIN_L, full.top() + 4.0),
        Align2::LEFT_TOP,
        chart.title,
        FontId::proportional(16.0),
        text_color,
    );

    let plot = Rect::from_min_max(
        Pos2::new(full.left() + MARGIN_L, full.top() + MARGIN_T),
        Pos2::new(full.right() - MARGIN_R, full.bottom() - MARGIN_B),
    );
    painter.rect_stroke(plot, 0.0, grid, StrokeKind::Inside);

    if chart.is_empty() {
        painter.text(plot.center(), Align2::CENTER_CENTER, "No production data", FontId::proportional(14.0), visuals.weak_text_color());
        legend(ui, chart);
        return;
    }

    let (lo, hi) = padded_range(chart);
    let y_at = |v: f64| -> f32 {
        let t = ((v - lo) / (hi - lo)) as f32;
        plot.bottom() - t * plot.height()
    };

    // y grid + labels
    for k in 0..=Y_TICKS {
        let v = lo + (hi - lo) * k as f64 / Y_TICKS as f64;
        let y = y_at(v);
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], grid);
        painter.text(
            Pos2::new(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("{:.1}", v),
            FontId::proportional(11.0),
            text_color,
        );
    }

    // x labels, thinned so they don't overlap
    let n = chart.x.len();
    let step = n.div_ceil(MAX_X_LABELS).max(1);
    for (i, label) in chart.x.iter().enumerate().step_by(step) {
        let x = x_at(plot, i, n);
        painter.line_segment([Pos2::new(x, plot.bottom()), Pos2::new(x, plot.bottom() + 4.0)], grid);
        painter.text(
            Pos2::new(x, plot.bottom() + 6.0),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(11.0),
            text_color,
        );
    }
    painter.text(
        Pos2::new(plot.center().x, full.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        "date",
        FontId::proportional(12.0),
        text_color,
    );

    // series; a missing (NaN) value leaves a gap in the line
    for s in &chart.series {
        let c = color(s.color);
        for run in s.segments() {
            let pts: Vec<Pos2> = run
                .map(|i| Pos2::new(x_at(plot, i, n), y_at(s.values[i])))
                .collect();
            if pts.len() > 1 {
                painter.add(Shape::line(pts.clone(), Stroke::new(2.0, c)));
            }
            if n <= MARKERS_UP_TO || pts.len() == 1 {
                for p in pts {
                    painter.circle_filled(p, 3.0, c);
                }
            }
        }
    }

    // hover: nearest x slot, with every series' value
    if let Some(pos) = resp.hover_pos().filter(|p| plot.contains(*p)) {
        let slot = ((pos.x - plot.left()) / plot.width()) * n.saturating_sub(1) as f32;
        let i = (slot.round() as usize).min(n - 1);
        let x = x_at(plot, i, n);
        painter.line_segment([Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())], Stroke::new(1.0, text_color));

        let mut lines = vec![chart.x[i].clone()];
        for s in &chart.series {
            lines.push(format!("{}: {}", s.name, s.values[i]));
        }
        let anchor = if x > plot.center().x { Align2::RIGHT_TOP } else { Align2::LEFT_TOP };
        let offset = if x > plot.center().x { -8.0 } else { 8.0 };
        painter.text(
            Pos2::new(x + offset, plot.top() + 4.0),
            anchor,
            lines.join("\n"),
            FontId::monospace(11.0),
            text_color,
        );
    }

    legend(ui, chart);
}

fn legend(ui: &mut egui::Ui, chart: &ProductionChart) {
    ui.horizontal(|ui| {
        ui.label("variable:");
        for s in &chart.series {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(14.0, 4.0), Sense::hover());
            ui.painter().rect_filled(rect, 1.0, color(s.color));
            ui.label(s.name);
        }
    });
}
