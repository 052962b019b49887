//! Minimal SVG figure rendering.
//!
//! Figures are assembled from primitive shapes on an [`SvgDocument`]. [`heatmap`]
//! draws annotated symbol-by-category grids on a diverging colour scale and
//! [`scatter`] draws labelled point series with linear axes. [`figures`] builds the
//! three report figures from analysis results.

pub mod figures;
pub mod heatmap;
pub mod scatter;

use std::fmt::{self, Write};

pub const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Colours for categories in declaration order.
pub const CATEGORY_PALETTE: [Rgb; 4] = [
    Rgb(31, 119, 180),
    Rgb(255, 127, 14),
    Rgb(44, 160, 44),
    Rgb(214, 39, 40),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Linear interpolation towards `other`, `t` clamped to [0, 1].
    pub fn lerp(&self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    /// Relative luminance in [0, 1], used to pick a readable text colour.
    pub fn luminance(&self) -> f64 {
        (0.2126 * self.0 as f64 + 0.7152 * self.1 as f64 + 0.0722 * self.2 as f64) / 255.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// An SVG document under construction.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    body: String,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        let body = format!(
            "<rect x=\"0\" y=\"0\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"#ffffff\" stroke=\"none\"/>\n"
        );
        Self {
            width,
            height,
            body,
        }
    }

    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: Rgb,
        stroke: Option<Rgb>,
    ) -> fmt::Result {
        let stroke = stroke.map_or_else(|| "none".to_string(), |s| s.hex());
        writeln!(
            self.body,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{}" stroke="{stroke}"/>"#,
            fill.hex()
        )
    }

    pub fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgb,
        width: f64,
    ) -> fmt::Result {
        writeln!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="{width}"/>"#,
            stroke.hex()
        )
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: Rgb) -> fmt::Result {
        writeln!(
            self.body,
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r}" fill="{}" fill-opacity="0.8"/>"#,
            fill.hex()
        )
    }

    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        anchor: Anchor,
        fill: Rgb,
    ) -> fmt::Result {
        writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="{FONT_FAMILY}" font-size="{size}" text-anchor="{}" fill="{}">{}</text>"#,
            anchor.as_str(),
            fill.hex(),
            escape(content)
        )
    }

    /// Text rotated 90° counter-clockwise about its anchor point.
    pub fn vertical_text(&mut self, x: f64, y: f64, content: &str, size: f64) -> fmt::Result {
        writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="{FONT_FAMILY}" font-size="{size}" text-anchor="middle" transform="rotate(-90 {x:.2} {y:.2})">{}</text>"#,
            escape(content)
        )
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Roughly `count` evenly spaced tick values covering [`min`, `max`] at 1-2-5 steps.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || count == 0 {
        return Vec::new();
    }
    if (max - min).abs() < f64::EPSILON {
        return vec![min];
    }
    let raw_step = (max - min) / count as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Compact tick label: integers without decimals, otherwise up to three significant places.
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract().abs() < 1e-9 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let formatted = format!("{value:.3}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_is_wrapped_in_svg_root() {
        let mut doc = SvgDocument::new(100.0, 50.0);
        doc.circle(10.0, 10.0, 2.0, Rgb(0, 0, 0)).unwrap();
        let out = doc.finish();
        assert!(out.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(out.contains("viewBox=\"0 0 100 50\""));
        assert!(out.contains("<circle"));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        doc.text(0.0, 0.0, "a<b & \"c\"", 10.0, Anchor::Start, Rgb(0, 0, 0)).unwrap();
        let out = doc.finish();
        assert!(out.contains("a&lt;b &amp; &quot;c&quot;"));
    }

    #[test]
    fn colour_interpolation_hits_endpoints() {
        let a = Rgb(0, 0, 0);
        let b = Rgb(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb(100, 50, 25));
        assert_eq!(a.lerp(b, 3.0), b);
        assert_eq!(Rgb(255, 0, 16).hex(), "#ff0010");
    }

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
        let ticks = nice_ticks(4.2, 11.7, 5);
        assert_eq!(ticks.first(), Some(&6.0));
        assert_eq!(ticks.last(), Some(&10.0));
        assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn tick_labels_are_compact() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(12000.0), "12000");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(-1.5), "-1.5");
    }
}
