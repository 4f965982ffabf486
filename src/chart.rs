//! Two-line chart of a single report: elapsed seconds and throughput, both
//! drawn from a shared origin on a fixed 300x200 canvas.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::schema::BenchmarkReport;

pub const CANVAS_WIDTH: f64 = 300.0;
pub const CANVAS_HEIGHT: f64 = 200.0;

const ORIGIN: Point = Point { x: 50.0, y: 150.0 };
const LINE_END_X: f64 = 250.0;
const TIME_SCALE: f64 = 10.0;
const THROUGHPUT_SCALE: f64 = 0.00001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    fn to_css(self) -> String {
        let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgb({},{},{})", c(self.0), c(self.1), c(self.2))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Rgb,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub at: Point,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub background: Rgb,
    pub axes: [Segment; 2],
    pub labels: Vec<Label>,
    pub time_line: Segment,
    pub throughput_line: Segment,
}

impl ChartGeometry {
    pub fn from_report(report: &BenchmarkReport) -> Self {
        let black = Rgb(0.0, 0.0, 0.0);
        let axis = |from: Point, to: Point| Segment {
            from,
            to,
            color: black,
            width: 1.0,
        };

        let at = |x, y| Point { x, y };

        Self {
            background: Rgb(0.9, 0.9, 0.9),
            axes: [
                axis(ORIGIN, at(280.0, 150.0)),
                axis(at(50.0, 50.0), at(50.0, 200.0)),
            ],
            labels: vec![
                Label { at: at(35.0, 155.0), text: "0" },
                Label { at: at(35.0, 100.0), text: "Time (s)" },
                Label { at: at(35.0, 80.0), text: "(seconds)" },
                Label { at: at(270.0, 160.0), text: "Performance (OPS)" },
            ],
            time_line: Segment {
                from: ORIGIN,
                to: at(LINE_END_X, ORIGIN.y - report.elapsed_secs * TIME_SCALE),
                color: Rgb(0.2, 0.4, 0.8),
                width: 3.0,
            },
            throughput_line: Segment {
                from: ORIGIN,
                to: at(LINE_END_X, ORIGIN.y - report.ops_per_second * THROUGHPUT_SCALE),
                color: Rgb(0.8, 0.2, 0.2),
                width: 3.0,
            },
        }
    }

    /// Renders the chart as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

/// SVG rendering.
///
/// Non-finite coordinates (from a degenerate throughput) are pinned to the
/// canvas edge so the document stays well-formed.
impl fmt::Display for ChartGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT
        )?;
        writeln!(
            f,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.background.to_css()
        )?;
        for seg in self.axes.iter().chain([&self.time_line, &self.throughput_line]) {
            writeln!(
                f,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                svg_coord(seg.from.x),
                svg_coord(seg.from.y),
                svg_coord(seg.to.x),
                svg_coord(seg.to.y),
                seg.color.to_css(),
                seg.width
            )?;
        }
        for label in &self.labels {
            writeln!(
                f,
                r#"  <text x="{}" y="{}" font-size="10">{}</text>"#,
                label.at.x, label.at.y, label.text
            )?;
        }
        writeln!(f, "</svg>")
    }
}

fn svg_coord(v: f64) -> f64 {
    if v.is_nan() {
        ORIGIN.y
    } else if v == f64::INFINITY {
        CANVAS_HEIGHT
    } else if v == f64::NEG_INFINITY {
        0.0
    } else {
        v
    }
}

/// Writes the chart for `report` to `path`.
pub fn write_svg(path: &Path, report: &BenchmarkReport) -> io::Result<()> {
    fs::write(path, ChartGeometry::from_report(report).to_svg())
}
