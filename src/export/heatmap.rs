// src/export/heatmap.rs

//! PNG heatmaps of count matrices, drawn with plotters into an RGB buffer.
//!
//! Text goes through plotters' `ab_glyph` backend, which needs a TTF registered
//! at runtime (see [`register_font`]). Without one the grid and its colours are
//! still drawn and the labels are left out.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage, Rgba, RgbaImage};
use once_cell::sync::OnceCell;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::analysis::CountMatrix;
use crate::config::consts::{CHART_FONT_FAMILY, FONT_CANDIDATES};
use crate::core::palette;
use crate::core::sanitize::ellipsize;
use crate::error::{Result, SkillmapError};

const MAX_LABEL_CHARS: usize = 24;
const TITLE_PX: u32 = 18;
const LABEL_PX: u32 = 14;
const VALUE_PX: u32 = 13;
const INK: RGBColor = RGBColor(40, 40, 40);

static FONT: OnceCell<Option<PathBuf>> = OnceCell::new();

/// Register the chart font once per process. `preferred` is tried first, then
/// the usual system locations. Returns the file in use, if any.
pub fn register_font(preferred: Option<&Path>) -> Option<&'static Path> {
    FONT.get_or_init(|| {
        let candidates = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(FONT_CANDIDATES.iter().map(PathBuf::from));

        for path in candidates {
            let Ok(bytes) = fs::read(&path) else { continue };
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if plotters::style::register_font(CHART_FONT_FAMILY, FontStyle::Normal, bytes).is_ok() {
                tracing::debug!(font = %path.display(), "chart font registered");
                return Some(path);
            }
            tracing::debug!(font = %path.display(), "not a usable font");
        }
        tracing::warn!("no chart font found; heatmap labels are left out");
        None
    })
    .as_deref()
}

fn has_font() -> bool {
    matches!(FONT.get(), Some(Some(_)))
}

/// Pixel sizes for one chart.
#[derive(Clone, Copy, Debug)]
pub struct HeatmapStyle {
    pub cell_w: u32,
    pub cell_h: u32,
    pub pad: u32,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self { cell_w: 56, cell_h: 26, pad: 12 }
    }
}

/// Advance width estimate for proportional text; counts chars, not bytes.
fn text_w(text: &str, px: u32) -> u32 {
    (text.chars().count() as f32 * px as f32 * 0.6).ceil() as u32
}

/// Everything needed to place text and cells.
struct Layout {
    cell_w: u32,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

impl Layout {
    fn new(matrix: &CountMatrix, title: &str, style: HeatmapStyle) -> Self {
        let label_w = matrix.row_labels.iter().map(|l| text_w(&label(l), LABEL_PX)).max().unwrap_or(0);
        let col_label_h = matrix.col_labels.iter().map(|l| text_w(&label(l), LABEL_PX)).max().unwrap_or(0);
        let value_w = text_w(&matrix.max().to_string(), VALUE_PX) + style.pad;
        let cell_w = style.cell_w.max(value_w);

        let left = style.pad + label_w + style.pad;
        let top = style.pad + TITLE_PX + style.pad + col_label_h + style.pad;
        let grid_w = cell_w * matrix.col_labels.len() as u32;
        let grid_h = style.cell_h * matrix.row_labels.len() as u32;
        let width = (left + grid_w + style.pad).max(text_w(title, TITLE_PX) + 2 * style.pad);

        Self { cell_w, left, top, width, height: top + grid_h + style.pad }
    }
}

fn label(text: &str) -> String {
    ellipsize(text, MAX_LABEL_CHARS)
}

fn rgb([r, g, b]: [u8; 3]) -> RGBColor {
    RGBColor(r, g, b)
}

fn chart_err<E: std::fmt::Display>(e: E) -> SkillmapError {
    SkillmapError::Chart(e.to_string())
}

/// Render `matrix` with a title line, row labels on the left, column labels
/// rotated above the grid and the count drawn in every cell.
pub fn render(matrix: &CountMatrix, title: &str, style: HeatmapStyle) -> Result<RgbImage> {
    let layout = Layout::new(matrix, title, style);
    let (w, h) = (layout.width, layout.height);
    let mut buf = vec![0u8; (w * h * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let max = matrix.max();
        let cell_h = style.cell_h as i32;
        let cell_w = layout.cell_w as i32;
        let (left, top) = (layout.left as i32, layout.top as i32);

        for r in 0..matrix.row_labels.len() {
            let y0 = top + r as i32 * cell_h;
            for c in 0..matrix.col_labels.len() {
                let x0 = left + c as i32 * cell_w;
                let bg = palette::heat(matrix.get(r, c), max);
                root.draw(&Rectangle::new([(x0, y0), (x0 + cell_w, y0 + cell_h)], rgb(bg).filled()))
                    .map_err(chart_err)?;
            }
        }

        if has_font() {
            let pad = style.pad as i32;
            let font = |px: u32| (CHART_FONT_FAMILY, f64::from(px)).into_font();

            root.draw(&Text::new(
                s!(title),
                (pad, pad),
                font(TITLE_PX).color(&INK).pos(Pos::new(HPos::Left, VPos::Top)),
            ))
            .map_err(chart_err)?;

            let up = font(LABEL_PX)
                .transform(FontTransform::Rotate270)
                .color(&INK)
                .pos(Pos::new(HPos::Left, VPos::Center));
            for (c, name) in matrix.col_labels.iter().enumerate() {
                let x = left + c as i32 * cell_w + cell_w / 2;
                root.draw(&Text::new(label(name), (x, top - pad / 2), up.clone()))
                    .map_err(chart_err)?;
            }

            let side = font(LABEL_PX).color(&INK).pos(Pos::new(HPos::Right, VPos::Center));
            for (r, name) in matrix.row_labels.iter().enumerate() {
                let y = top + r as i32 * cell_h + cell_h / 2;
                root.draw(&Text::new(label(name), (left - pad, y), side.clone()))
                    .map_err(chart_err)?;

                for c in 0..matrix.col_labels.len() {
                    let n = matrix.get(r, c);
                    let ink = rgb(palette::text_on(palette::heat(n, max)));
                    let x = left + c as i32 * cell_w + cell_w / 2;
                    let value = font(VALUE_PX).color(&ink).pos(Pos::new(HPos::Center, VPos::Center));
                    root.draw(&Text::new(n.to_string(), (x, y), value)).map_err(chart_err)?;
                }
            }
        }

        root.present().map_err(chart_err)?;
    }

    RgbImage::from_raw(w, h, buf).ok_or_else(|| chart_err("bitmap size mismatch"))
}

pub fn save(matrix: &CountMatrix, title: &str, path: &Path) -> Result<()> {
    let img = render(matrix, title, HeatmapStyle::default())?;
    img.save_with_format(path, ImageFormat::Png)?;
    tracing::debug!(path = %path.display(), w = img.width(), h = img.height(), labels = has_font(), "heatmap written");
    Ok(())
}

/// A small 3×3 heat grid, used as the window icon.
pub fn icon(size: u32) -> RgbaImage {
    const LEVELS: [[f32; 3]; 3] = [[0.1, 0.5, 1.0], [0.3, 0.8, 0.5], [0.0, 0.3, 0.7]];
    let cell = (size / 3).max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        let (c, r) = ((x / cell).min(2) as usize, (y / cell).min(2) as usize);
        let [red, green, blue] = palette::viridis(LEVELS[r][c]);
        Rgba([red, green, blue, 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CountMatrix {
        CountMatrix {
            row_labels: vec![s!("Austin"), s!("Boston")],
            col_labels: vec![s!("SQL"), s!("Python")],
            cells: vec![vec![3, 0], vec![1, 2]],
        }
    }

    #[test]
    fn size_grows_with_grid() {
        let style = HeatmapStyle::default();
        let small = render(&matrix(), "t", style).unwrap();
        let mut wide = matrix();
        wide.col_labels.push(s!("AWS"));
        for row in &mut wide.cells {
            row.push(0);
        }
        let bigger = render(&wide, "t", style).unwrap();
        assert!(bigger.width() > small.width());
        assert_eq!(bigger.height(), small.height());
    }

    #[test]
    fn hottest_cell_uses_top_of_ramp() {
        let style = HeatmapStyle::default();
        let m = matrix();
        let layout = Layout::new(&m, "t", style);
        let img = render(&m, "t", style).unwrap();
        // corner pixel of cell (0, 0), away from the value text
        let px = img.get_pixel(layout.left + 1, layout.top + 1);
        assert_eq!(px.0, palette::viridis(1.0));
    }

    #[test]
    fn label_width_counts_chars() {
        assert_eq!(text_w("Zürich", LABEL_PX), text_w("Zurich", LABEL_PX));
        assert_eq!(text_w("São Paulo", LABEL_PX), text_w("Sao Paulo", LABEL_PX));
    }

    #[test]
    fn non_ascii_labels_get_ink() {
        let font = register_font(None);
        let m = CountMatrix {
            row_labels: vec![s!("São Paulo"), s!("Zürich")],
            col_labels: vec![s!("Go")],
            cells: vec![vec![1], vec![2]],
        };
        let style = HeatmapStyle::default();
        let layout = Layout::new(&m, "", style);
        let img = render(&m, "", style).unwrap();

        // row-label strip left of the grid
        let inked = (0..layout.left)
            .flat_map(|x| (layout.top..layout.height).map(move |y| (x, y)))
            .any(|(x, y)| img.get_pixel(x, y).0 != [255, 255, 255]);
        assert_eq!(inked, font.is_some());
    }

    #[test]
    fn icon_is_square_and_opaque() {
        let img = icon(32);
        assert_eq!(img.dimensions(), (32, 32));
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }
}
