use super::{Anchor, Rgb, SvgDocument, format_tick, nice_ticks};
use std::fmt;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 520.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 150.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const POINT_RADIUS: f64 = 4.0;
const TICK_COUNT: usize = 6;
const AXIS: Rgb = Rgb(60, 60, 60);
const GRID: Rgb = Rgb(230, 230, 230);
const INK: Rgb = Rgb(0, 0, 0);

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    pub color: Rgb,
    pub points: Vec<(f64, f64)>,
    /// Per-point annotations; empty for unannotated series.
    pub annotations: Vec<String>,
}

impl ScatterSeries {
    pub fn new(label: impl Into<String>, color: Rgb, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            color,
            points,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotations(mut self, annotations: Vec<String>) -> Self {
        self.annotations = annotations;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
    pub show_legend: bool,
}

/// Linear mapping of a data interval onto a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisScale {
    min: f64,
    max: f64,
    from: f64,
    to: f64,
}

impl AxisScale {
    fn new(min: f64, max: f64, from: f64, to: f64) -> Self {
        let (min, max) = padded_range(min, max);
        Self { min, max, from, to }
    }

    fn map(&self, value: f64) -> f64 {
        self.from + (value - self.min) / (self.max - self.min) * (self.to - self.from)
    }
}

/// Widens [`min`, `max`] by 5% on each side; a degenerate range becomes one unit wide.
fn padded_range(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return (min - 0.5, max + 0.5);
    }
    (min - span * 0.05, max + span * 0.05)
}

impl ScatterPlot {
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut doc = SvgDocument::new(WIDTH, HEIGHT);
        doc.text(WIDTH / 2.0, 30.0, &self.title, 16.0, Anchor::Middle, INK)?;

        let plot_left = MARGIN_LEFT;
        let plot_right = WIDTH - MARGIN_RIGHT;
        let plot_top = MARGIN_TOP;
        let plot_bottom = HEIGHT - MARGIN_BOTTOM;

        let all_points = self.series.iter().flat_map(|s| s.points.iter());
        let (x_min, x_max, y_min, y_max) = all_points.fold(
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
            |(x0, x1, y0, y1), &(x, y)| (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
        );
        let x_scale = AxisScale::new(x_min, x_max, plot_left, plot_right);
        let y_scale = AxisScale::new(y_min, y_max, plot_bottom, plot_top);

        for tick in nice_ticks(x_scale.min, x_scale.max, TICK_COUNT) {
            let x = x_scale.map(tick);
            doc.line(x, plot_top, x, plot_bottom, GRID, 1.0)?;
            doc.line(x, plot_bottom, x, plot_bottom + 5.0, AXIS, 1.0)?;
            doc.text(x, plot_bottom + 18.0, &format_tick(tick), 11.0, Anchor::Middle, INK)?;
        }
        for tick in nice_ticks(y_scale.min, y_scale.max, TICK_COUNT) {
            let y = y_scale.map(tick);
            doc.line(plot_left, y, plot_right, y, GRID, 1.0)?;
            doc.line(plot_left - 5.0, y, plot_left, y, AXIS, 1.0)?;
            doc.text(plot_left - 8.0, y + 4.0, &format_tick(tick), 11.0, Anchor::End, INK)?;
        }
        doc.line(plot_left, plot_bottom, plot_right, plot_bottom, AXIS, 1.5)?;
        doc.line(plot_left, plot_top, plot_left, plot_bottom, AXIS, 1.5)?;

        for series in &self.series {
            for (i, &(x, y)) in series.points.iter().enumerate() {
                let (px, py) = (x_scale.map(x), y_scale.map(y));
                doc.circle(px, py, POINT_RADIUS, series.color)?;
                if let Some(note) = series.annotations.get(i) {
                    doc.text(px + 7.0, py - 6.0, note, 11.0, Anchor::Start, INK)?;
                }
            }
        }

        doc.text(
            (plot_left + plot_right) / 2.0,
            HEIGHT - 15.0,
            &self.x_label,
            13.0,
            Anchor::Middle,
            INK,
        )?;
        doc.vertical_text(25.0, (plot_top + plot_bottom) / 2.0, &self.y_label, 13.0)?;

        if self.show_legend {
            let x = plot_right + 20.0;
            for (i, series) in self.series.iter().enumerate() {
                let y = plot_top + 10.0 + i as f64 * 20.0;
                doc.circle(x, y, POINT_RADIUS + 1.0, series.color)?;
                doc.text(x + 12.0, y + 4.0, &series.label, 12.0, Anchor::Start, INK)?;
            }
        }

        Ok(doc.finish())
    }
}
