//! Chart feature - chart description and view state.
//!
//! This module turns a collected [`Session`] into a [`ChartSpec`], a
//! plotting-library-agnostic description of the line chart (title, points,
//! axis bounds and ticks, per-point annotations). Rendering lives in
//! [`ui`]; nothing here knows about terminal cells.

pub mod ui;

use crate::session::Session;

/// Title of the x axis.
pub const X_AXIS_TITLE: &str = "Quantidade de Vértices";

/// Title of the y axis.
pub const Y_AXIS_TITLE: &str = "Tempo de Execução (ms)";

/// Maximum number of intervals produced by the y tick locator.
pub const Y_TICK_BINS: usize = 10;

/// Relative margin added on each side of the x data range.
const X_MARGIN: f64 = 0.05;

/// Relative margin added on each side of the y data range.
const Y_MARGIN: f64 = 0.15;

/// One axis of the chart: title, view bounds and tick values.
#[derive(Debug, Clone)]
pub struct AxisSpec {
    /// Axis title.
    pub title: String,
    /// View interval, `[min, max]`.
    pub bounds: [f64; 2],
    /// Tick values, in the order they should be drawn.
    pub ticks: Vec<f64>,
}

/// Text attached to a data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// X data coordinate of the annotated point.
    pub x: f64,
    /// Y data coordinate of the annotated point.
    pub y: f64,
    /// Annotation text.
    pub text: String,
}

/// Complete description of the chart, built once after collection.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Chart title, carrying the session parameter.
    pub title: String,
    /// Sample points in entry order.
    pub points: Vec<(f64, f64)>,
    /// X axis. Its ticks are exactly the entered vertex counts, entry
    /// order, duplicates kept.
    pub x_axis: AxisSpec,
    /// Y axis. Its ticks come from [`max_n_ticks`].
    pub y_axis: AxisSpec,
    /// One annotation per sample: the execution time truncated to an
    /// integer.
    pub annotations: Vec<Annotation>,
}

impl ChartSpec {
    /// Build the chart description for a session.
    pub fn from_session(session: &Session) -> Self {
        let points: Vec<(f64, f64)> = session
            .samples
            .iter()
            .map(|s| (s.vertices as f64, s.time_ms))
            .collect();

        let x_ticks: Vec<f64> = points.iter().map(|&(x, _)| x).collect();
        let annotations: Vec<Annotation> = points
            .iter()
            .map(|&(x, y)| Annotation {
                x,
                y,
                text: format_int(y),
            })
            .collect();

        let x_bounds = padded_bounds(points.iter().map(|&(x, _)| x), X_MARGIN);
        let y_bounds = padded_bounds(points.iter().map(|&(_, y)| y), Y_MARGIN);
        let y_ticks = max_n_ticks(y_bounds[0], y_bounds[1], Y_TICK_BINS);

        Self {
            title: format!(
                "Tempo de Execução do Problema do Carteiro Chinês (Vértices Ímpares: {})",
                session.odd_vertices
            ),
            points,
            x_axis: AxisSpec {
                title: X_AXIS_TITLE.to_string(),
                bounds: x_bounds,
                ticks: x_ticks,
            },
            y_axis: AxisSpec {
                title: Y_AXIS_TITLE.to_string(),
                bounds: y_bounds,
                ticks: y_ticks,
            },
            annotations,
        }
    }
}

/// Format a tick or annotation value as an integer, truncating toward zero.
pub fn format_int(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

/// View interval covering the values with a relative margin on each side.
///
/// No values gives `[0, 1]`; a single distinct value is padded by 1.0 so
/// the view never degenerates to a point.
fn padded_bounds(values: impl Iterator<Item = f64>, margin: f64) -> [f64; 2] {
    let (min_val, max_val) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min_val.is_finite() || !max_val.is_finite() {
        return [0.0, 1.0];
    }

    let span = (max_val - min_val).abs();
    let padding = if span < f64::EPSILON {
        1.0
    } else {
        span * margin
    };
    [min_val - padding, max_val + padding]
}

/// Automatic tick locator with integer steps.
///
/// Picks a step from the 1/2/5 ladder, never below 1, so that at most
/// `nbins` intervals cover `[lo, hi]`, and returns the step multiples
/// inside the interval. Sub-integer value ranges therefore collapse onto
/// whole-number ticks, matching the integer tick formatter.
pub fn max_n_ticks(lo: f64, hi: f64, nbins: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || nbins == 0 || hi <= lo {
        return Vec::new();
    }

    let raw_step = (hi - lo) / nbins as f64;
    let step = nice_step(raw_step).max(1.0);

    let mut ticks = Vec::new();
    let mut tick = (lo / step).ceil() * step;
    while tick <= hi {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

/// Smallest 1/2/5-ladder value not below `raw`.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    for multiple in [1.0, 2.0, 5.0, 10.0] {
        let step = multiple * magnitude;
        if step >= raw {
            return step;
        }
    }
    10.0 * magnitude
}

/// Interactive state of the chart view: the probe cursor over samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartViewState {
    /// Index of the probed sample, in entry order.
    pub cursor: usize,
}

impl ChartViewState {
    /// Create a new view state with the cursor on the first sample.
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Move the probe cursor one sample left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the probe cursor one sample right.
    pub fn cursor_right(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1).min(len - 1);
    }

    /// Jump to the first sample.
    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last sample.
    pub fn cursor_last(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }
}
