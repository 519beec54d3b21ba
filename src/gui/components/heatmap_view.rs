// src/gui/components/heatmap_view.rs
//
// Paints a CountMatrix as coloured cells with values, like the PNG export.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Vec2, epaint::TextShape};
use crate::{analysis::CountMatrix, core::palette};

const LABEL_W: f32 = 160.0;
const HEADER_H: f32 = 120.0;
const CELL: Vec2 = Vec2::new(52.0, 24.0);

fn color([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

pub fn draw(ui: &mut egui::Ui, matrix: &CountMatrix) {
    let rows = matrix.row_labels.len();
    let cols = matrix.col_labels.len();
    let size = Vec2::new(
        LABEL_W + CELL.x * cols as f32,
        HEADER_H + CELL.y * rows as f32,
    );
    let max = matrix.max();
    let ink = ui.visuals().text_color();
    let font = FontId::proportional(12.0);

    egui::ScrollArea::both().id_salt("heatmap_view").show(ui, |ui| {
        let (resp, painter) = ui.allocate_painter(size, Sense::hover());
        let origin = resp.rect.min;

        // Column labels, rotated to read bottom-up
        for (c, label) in matrix.col_labels.iter().enumerate() {
            let galley = painter.layout_no_wrap(label.clone(), font.clone(), ink);
            let x = origin.x + LABEL_W + CELL.x * (c as f32 + 0.5) - galley.size().y / 2.0;
            let pos = Pos2::new(x, origin.y + HEADER_H - 6.0);
            painter.add(TextShape::new(pos, galley, ink).with_angle(-std::f32::consts::FRAC_PI_2));
        }

        for (r, label) in matrix.row_labels.iter().enumerate() {
            let y = origin.y + HEADER_H + CELL.y * r as f32;
            painter.text(
                Pos2::new(origin.x + LABEL_W - 8.0, y + CELL.y / 2.0),
                Align2::RIGHT_CENTER,
                label,
                font.clone(),
                ink,
            );

            for c in 0..cols {
                let n = matrix.get(r, c);
                let bg = palette::heat(n, max);
                let rect = Rect::from_min_size(
                    Pos2::new(origin.x + LABEL_W + CELL.x * c as f32, y),
                    CELL,
                );
                painter.rect_filled(rect.shrink(0.5), 0.0, color(bg));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    n.to_string(),
                    FontId::monospace(11.0),
                    color(palette::text_on(bg)),
                );
            }
        }

        if let Some(pos) = resp.hover_pos() {
            let gx = pos.x - origin.x - LABEL_W;
            let gy = pos.y - origin.y - HEADER_H;
            if gx >= 0.0 && gy >= 0.0 {
                let (c, r) = ((gx / CELL.x) as usize, (gy / CELL.y) as usize);
                if r < rows && c < cols {
                    let tip = format!(
                        "{} · {}: {}",
                        matrix.row_labels[r],
                        matrix.col_labels[c],
                        matrix.get(r, c)
                    );
                    resp.on_hover_text(tip);
                }
            }
        }
    });
}
