//! Chart view - pure rendering layer.
//!
//! Consumes a [`ChartSpec`] and paints it into terminal cells: a Braille
//! line for the series, grid lines at the tick positions, a cell marker at
//! every sample and its annotation, tick labels in the margins. Text is
//! painted directly into the frame buffer so labels line up with the
//! canvas dots.

use super::{format_int, ChartSpec, ChartViewState};
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Marker drawn at each sample point.
const MARKER: char = '●';

/// Draw the chart into `area`.
pub fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    spec: &ChartSpec,
    view: &ChartViewState,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(spec.title.clone())
        .title_style(Style::default().fg(colors.yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0).fg(colors.fg0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Margins: one row on top for the y axis title, one for x tick labels
    // and one for the x axis title at the bottom, a left column block for
    // the y tick labels.
    let y_label_width = spec
        .y_axis
        .ticks
        .iter()
        .map(|&t| format_int(t).width())
        .max()
        .unwrap_or(1) as u16;
    let left_margin = y_label_width + 1;

    if inner.width < left_margin + 4 || inner.height < 6 {
        return;
    }

    let plot = Rect {
        x: inner.x + left_margin,
        y: inner.y + 1,
        width: inner.width - left_margin,
        height: inner.height - 3,
    };

    draw_series(f, plot, spec, colors);
    draw_markers(f, plot, spec, view, colors);
    draw_annotations(f, plot, spec, colors);
    draw_x_labels(f, inner, plot, spec, colors);
    draw_y_labels(f, inner, plot, spec, colors);
    draw_axis_titles(f, inner, spec, colors);
}

/// Grid lines and the sample line, on the Braille canvas.
fn draw_series(f: &mut Frame<'_>, plot: Rect, spec: &ChartSpec, colors: &ThemeColors) {
    let [x_min, x_max] = spec.x_axis.bounds;
    let [y_min, y_max] = spec.y_axis.bounds;
    let grid = colors.bg2;
    let series = colors.orange;

    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds(spec.x_axis.bounds)
        .y_bounds(spec.y_axis.bounds)
        .paint(|ctx| {
            for &x in &spec.x_axis.ticks {
                ctx.draw(&CanvasLine {
                    x1: x,
                    y1: y_min,
                    x2: x,
                    y2: y_max,
                    color: grid,
                });
            }
            for &y in &spec.y_axis.ticks {
                ctx.draw(&CanvasLine {
                    x1: x_min,
                    y1: y,
                    x2: x_max,
                    y2: y,
                    color: grid,
                });
            }

            // Series over the grid, on its own layer.
            ctx.layer();
            for pair in spec.points.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].0,
                    y1: pair[0].1,
                    x2: pair[1].0,
                    y2: pair[1].1,
                    color: series,
                });
            }
        });

    f.render_widget(canvas, plot);
}

/// A visible marker at every sample; the probed sample is highlighted.
fn draw_markers(
    f: &mut Frame<'_>,
    plot: Rect,
    spec: &ChartSpec,
    view: &ChartViewState,
    colors: &ThemeColors,
) {
    for (i, &(x, y)) in spec.points.iter().enumerate() {
        let Some((col, row)) = data_cell(plot, spec, x, y) else {
            continue;
        };
        let color = if i == view.cursor {
            colors.yellow
        } else {
            colors.orange
        };
        if let Some(cell) = f.buffer_mut().cell_mut((col, row)) {
            cell.set_char(MARKER).set_fg(color);
        }
    }
}

/// Annotation text ends one cell left of the marker, one row above it.
fn draw_annotations(f: &mut Frame<'_>, plot: Rect, spec: &ChartSpec, colors: &ThemeColors) {
    for annotation in &spec.annotations {
        let Some((col, row)) = data_cell(plot, spec, annotation.x, annotation.y) else {
            continue;
        };
        let row = if row > plot.y { row - 1 } else { row };
        let width = annotation.text.width() as u16;
        let end = col.saturating_sub(1);
        let start = end.saturating_sub(width).max(plot.x);
        paint_text(f, start, row, &annotation.text, colors.aqua, plot.right());
    }
}

/// X tick labels, centred under the column of each entered value.
fn draw_x_labels(
    f: &mut Frame<'_>,
    inner: Rect,
    plot: Rect,
    spec: &ChartSpec,
    colors: &ThemeColors,
) {
    let row = inner.y + inner.height - 2;
    for &tick in &spec.x_axis.ticks {
        let Some(col) = data_col(plot, spec, tick) else {
            continue;
        };
        let label = format_int(tick);
        let start = col
            .saturating_sub(label.width() as u16 / 2)
            .max(inner.x);
        paint_text(f, start, row, &label, colors.green, inner.right());
    }
}

/// Y tick labels, right-aligned in the left margin.
fn draw_y_labels(
    f: &mut Frame<'_>,
    inner: Rect,
    plot: Rect,
    spec: &ChartSpec,
    colors: &ThemeColors,
) {
    for &tick in &spec.y_axis.ticks {
        let Some(row) = data_row(plot, spec, tick) else {
            continue;
        };
        let label = format_int(tick);
        let start = plot
            .x
            .saturating_sub(label.width() as u16 + 1)
            .max(inner.x);
        paint_text(f, start, row, &label, colors.green, plot.x);
    }
}

/// Y axis title at the top left, x axis title centred at the bottom.
fn draw_axis_titles(f: &mut Frame<'_>, inner: Rect, spec: &ChartSpec, colors: &ThemeColors) {
    paint_text(
        f,
        inner.x,
        inner.y,
        &spec.y_axis.title,
        colors.fg0,
        inner.right(),
    );

    let row = inner.y + inner.height - 1;
    let width = spec.x_axis.title.width() as u16;
    let start = (inner.x + inner.width.saturating_sub(width) / 2).max(inner.x);
    paint_text(f, start, row, &spec.x_axis.title, colors.fg0, inner.right());
}

/// Paint a string into the frame buffer, clipped at `limit`.
fn paint_text(f: &mut Frame<'_>, x: u16, y: u16, text: &str, color: Color, limit: u16) {
    let mut col = x;
    for ch in text.chars() {
        if col >= limit {
            break;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((col, y)) {
            cell.set_char(ch).set_fg(color);
        }
        col += ch.to_string().width() as u16;
    }
}

/// Map a data point to the terminal cell its Braille dot lands in.
///
/// Mirrors the canvas painter's dot mapping (`(v - min) * (res - 1) /
/// span` over a `2w x 4h` dot grid) so painted text lines up with the
/// drawn series.
fn data_cell(plot: Rect, spec: &ChartSpec, x: f64, y: f64) -> Option<(u16, u16)> {
    Some((data_col(plot, spec, x)?, data_row(plot, spec, y)?))
}

fn data_col(plot: Rect, spec: &ChartSpec, x: f64) -> Option<u16> {
    let [min, max] = spec.x_axis.bounds;
    if max <= min || x < min || x > max || plot.width == 0 {
        return None;
    }
    let resolution = f64::from(plot.width) * 2.0;
    let dot = ((x - min) * (resolution - 1.0) / (max - min)) as u16;
    Some(plot.x + dot / 2)
}

fn data_row(plot: Rect, spec: &ChartSpec, y: f64) -> Option<u16> {
    let [min, max] = spec.y_axis.bounds;
    if max <= min || y < min || y > max || plot.height == 0 {
        return None;
    }
    let resolution = f64::from(plot.height) * 4.0;
    let dot = ((max - y) * (resolution - 1.0) / (max - min)) as u16;
    Some(plot.y + dot / 4)
}
