use super::{Anchor, Rgb, SvgDocument, format_tick};
use crate::core::composition::table::CategoryTable;
use std::fmt;

const CELL_WIDTH: f64 = 80.0;
const CELL_HEIGHT: f64 = 24.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const COLORBAR_GAP: f64 = 30.0;
const COLORBAR_WIDTH: f64 = 18.0;
const COLORBAR_STEPS: usize = 32;
const MARGIN_RIGHT: f64 = 110.0;

const COOL: Rgb = Rgb(59, 76, 192);
const NEUTRAL: Rgb = Rgb(221, 221, 221);
const WARM: Rgb = Rgb(180, 4, 38);
const INK: Rgb = Rgb(0, 0, 0);

/// Diverging colour scale symmetric around `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergingScale {
    pub center: f64,
    pub span: f64,
}

impl DivergingScale {
    /// Smallest symmetric scale around `center` that covers [`min`, `max`].
    pub fn covering(center: f64, min: f64, max: f64) -> Self {
        let span = (max - center).abs().max((center - min).abs());
        let span = if span > 0.0 && span.is_finite() {
            span
        } else {
            1.0
        };
        Self { center, span }
    }

    pub fn color(&self, value: f64) -> Rgb {
        let t = ((value - self.center) / self.span).clamp(-1.0, 1.0);
        if t < 0.0 {
            NEUTRAL.lerp(COOL, -t)
        } else {
            NEUTRAL.lerp(WARM, t)
        }
    }
}

/// Renders `table` as an annotated heatmap, symbols as rows and categories as columns.
pub fn render_heatmap(
    table: &CategoryTable,
    title: &str,
    center: f64,
) -> Result<String, fmt::Error> {
    let rows = table.symbols().len();
    let cols = table.categories().len();
    let grid_width = cols as f64 * CELL_WIDTH;
    let grid_height = rows.max(1) as f64 * CELL_HEIGHT;
    let width = MARGIN_LEFT + grid_width + MARGIN_RIGHT;
    let height = MARGIN_TOP + grid_height + MARGIN_BOTTOM;

    let mut doc = SvgDocument::new(width, height);
    doc.text(width / 2.0, 30.0, title, 16.0, Anchor::Middle, INK)?;

    let Some((min, max)) = table.min_max() else {
        doc.text(
            MARGIN_LEFT + grid_width / 2.0,
            MARGIN_TOP + grid_height / 2.0,
            "No data",
            12.0,
            Anchor::Middle,
            INK,
        )?;
        return Ok(doc.finish());
    };
    let scale = DivergingScale::covering(center, min, max);

    for (row, (symbol, values)) in table.rows().enumerate() {
        let y = MARGIN_TOP + row as f64 * CELL_HEIGHT;
        doc.text(
            MARGIN_LEFT - 10.0,
            y + CELL_HEIGHT * 0.65,
            &symbol.to_string(),
            12.0,
            Anchor::End,
            INK,
        )?;
        for (col, value) in values.iter().enumerate() {
            let x = MARGIN_LEFT + col as f64 * CELL_WIDTH;
            let fill = scale.color(*value);
            doc.rect(x, y, CELL_WIDTH, CELL_HEIGHT, fill, Some(Rgb(255, 255, 255)))?;
            let ink = if fill.luminance() < 0.5 {
                Rgb(255, 255, 255)
            } else {
                INK
            };
            doc.text(
                x + CELL_WIDTH / 2.0,
                y + CELL_HEIGHT * 0.65,
                &format!("{value:.2}"),
                11.0,
                Anchor::Middle,
                ink,
            )?;
        }
    }

    let axis_y = MARGIN_TOP + grid_height;
    for (col, category) in table.categories().iter().enumerate() {
        doc.text(
            MARGIN_LEFT + (col as f64 + 0.5) * CELL_WIDTH,
            axis_y + 20.0,
            category.as_str(),
            12.0,
            Anchor::Middle,
            INK,
        )?;
    }
    doc.text(
        MARGIN_LEFT + grid_width / 2.0,
        axis_y + 50.0,
        "Category",
        13.0,
        Anchor::Middle,
        INK,
    )?;
    doc.vertical_text(20.0, MARGIN_TOP + grid_height / 2.0, "Amino Acid", 13.0)?;

    draw_colorbar(&mut doc, &scale, MARGIN_LEFT + grid_width + COLORBAR_GAP, grid_height)?;
    Ok(doc.finish())
}

fn draw_colorbar(
    doc: &mut SvgDocument,
    scale: &DivergingScale,
    x: f64,
    height: f64,
) -> fmt::Result {
    let step_height = height / COLORBAR_STEPS as f64;
    let top = scale.center + scale.span;
    for i in 0..COLORBAR_STEPS {
        let value = top - (i as f64 + 0.5) / COLORBAR_STEPS as f64 * 2.0 * scale.span;
        doc.rect(
            x,
            MARGIN_TOP + i as f64 * step_height,
            COLORBAR_WIDTH,
            step_height,
            scale.color(value),
            None,
        )?;
    }
    let labels = [
        (MARGIN_TOP, top),
        (MARGIN_TOP + height / 2.0, scale.center),
        (MARGIN_TOP + height, scale.center - scale.span),
    ];
    for (y, value) in labels {
        doc.line(x + COLORBAR_WIDTH, y, x + COLORBAR_WIDTH + 4.0, y, INK, 1.0)?;
        doc.text(
            x + COLORBAR_WIDTH + 7.0,
            y + 4.0,
            &format_tick((value * 100.0).round() / 100.0),
            10.0,
            Anchor::Start,
            INK,
        )?;
    }
    Ok(())
}
