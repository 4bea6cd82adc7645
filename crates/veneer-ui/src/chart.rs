//! Plot (polyline with markers) and histogram widgets.
//!
//! Both rescan their sample slice every call — values may change every
//! frame, so nothing is cached.

use crate::style::{HistoStyle, PlotStyle};
use veneer_core::{Canvas, Input, Rect, Vec2};

const MARKER: f32 = 6.0;

fn marker_rect(x: f32, y: f32) -> Rect {
    Rect::new(x - MARKER / 2.0, y - MARKER / 2.0, MARKER, MARKER)
}

/// Polyline through `values` scaled into the rect. Returns the index of a
/// marker clicked this frame.
pub fn plot(
    canvas: &mut dyn Canvas,
    rect: Rect,
    values: &[f32],
    style: &PlotStyle,
    input: Option<&Input>,
) -> Option<usize> {
    let plot = Rect::new(
        rect.x,
        rect.y,
        rect.w.max(2.0 * style.padding.x),
        rect.h.max(2.0 * style.padding.y),
    );
    canvas.draw_rect(plot, style.background);
    if values.is_empty() {
        return None;
    }

    let mut min = values[0];
    let mut max = values[0];
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    let range = max - min;
    let ratio_of = |v: f32| if range > 0.0 { (v - min) / range } else { 0.0 };

    let inner = Rect::new(
        plot.x + style.padding.x,
        plot.y + style.padding.y,
        (plot.w - 2.0 * style.padding.x).max(1.0 + 2.0 * style.padding.x),
        (plot.h - 2.0 * style.padding.y).max(1.0 + 2.0 * style.padding.y),
    );
    let step = (inner.w as usize / values.len()) as f32;

    let mut selected = None;
    let clicked = |input: &Input| input.mouse_down && input.mouse_clicked > 0;

    let mut last = Vec2::new(inner.x, inner.y + inner.h - ratio_of(values[0]) * inner.h);
    let mut color = style.foreground;
    if let Some(input) = input {
        if input.mouse_in(marker_rect(last.x, last.y)) {
            selected = clicked(input).then_some(0);
            color = style.highlight;
        }
    }
    canvas.draw_rect(marker_rect(last.x, last.y), color);

    for (i, &value) in values.iter().enumerate().skip(1) {
        let cur = Vec2::new(
            inner.x + step * i as f32,
            inner.y + inner.h - ratio_of(value) * inner.h,
        );
        canvas.draw_line(last, cur, style.foreground);

        let mut color = style.foreground;
        if let Some(input) = input {
            if input.mouse_in(marker_rect(cur.x, cur.y)) {
                if clicked(input) {
                    selected = Some(i);
                }
                color = style.highlight;
            }
        }
        canvas.draw_rect(marker_rect(cur.x, cur.y), color);
        last = cur;
    }
    selected
}

/// One bar per sample, scaled by `|v| / max(|values|)`. Negative samples use
/// the `negative` color. Returns the index of a bar clicked this frame.
pub fn histogram(
    canvas: &mut dyn Canvas,
    rect: Rect,
    values: &[f32],
    style: &HistoStyle,
    input: Option<&Input>,
) -> Option<usize> {
    let histo = Rect::new(
        rect.x,
        rect.y,
        rect.w.max(2.0 * style.padding.x),
        rect.h.max(2.0 * style.padding.y),
    );
    canvas.draw_rect(histo, style.background);
    if values.is_empty() {
        return None;
    }

    let mut peak = 0.0f32;
    for &v in values {
        peak = peak.max(v.abs());
    }

    let inner = Rect::new(
        histo.x + style.padding.x,
        histo.y + style.padding.y,
        histo.w - 2.0 * style.padding.x,
        histo.h - 2.0 * style.padding.y,
    );
    let gaps = (values.len() - 1) as f32 * style.padding.x;
    let item_w = (inner.w - gaps) / values.len() as f32;

    let mut selected = None;
    for (i, &value) in values.iter().enumerate() {
        let ratio = if peak > 0.0 { value.abs() / peak } else { 0.0 };
        let item_h = inner.h * ratio;
        let item = Rect::new(
            inner.x + i as f32 * (item_w + style.padding.x),
            inner.y + inner.h - item_h,
            item_w,
            item_h,
        );
        let mut color = if value < 0.0 { style.negative } else { style.foreground };
        if let Some(input) = input {
            if input.mouse_in(item) {
                if input.mouse_down && input.mouse_clicked > 0 {
                    selected = Some(i);
                }
                color = style.highlight;
            }
        }
        canvas.draw_rect(item, color);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::{Color, Input, Record};

    fn plot_style() -> PlotStyle {
        PlotStyle {
            padding: Vec2::new(4.0, 4.0),
            background: Color::rgb(100, 100, 100),
            foreground: Color::rgb(45, 45, 45),
            highlight: Color::rgb(255, 0, 0),
        }
    }

    fn histo_style() -> HistoStyle {
        HistoStyle {
            padding: Vec2::new(4.0, 4.0),
            background: Color::rgb(100, 100, 100),
            foreground: Color::rgb(45, 45, 45),
            negative: Color::WHITE,
            highlight: Color::rgb(255, 0, 0),
        }
    }

    fn press_at(x: i32, y: i32) -> Input {
        let mut input = Input::default();
        input.begin();
        input.motion(x, y);
        input.button(x, y, true);
        input.end();
        input
    }

    #[test]
    fn test_plot_no_input_selects_nothing() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(0.0, 0.0, 208.0, 108.0);
        let values = [0.0, 5.0, 10.0, 5.0];
        assert_eq!(plot(&mut canvas, rect, &values, &plot_style(), None), None);
        // Background + 4 markers + 3 lines.
        assert_eq!(canvas.calls.len(), 8);
    }

    #[test]
    fn test_plot_click_first_marker_is_index_zero() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(0.0, 0.0, 208.0, 108.0);
        let values = [0.0, 5.0, 10.0, 5.0];
        // First marker sits at the inner bottom-left corner (4, 104).
        let input = press_at(4, 104);
        assert_eq!(
            plot(&mut canvas, rect, &values, &plot_style(), Some(&input)),
            Some(0)
        );
    }

    #[test]
    fn test_plot_click_later_marker() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(0.0, 0.0, 208.0, 108.0);
        let values = [0.0, 5.0, 10.0, 5.0];
        // step = 200 / 4 = 50; marker 2 at x = 4 + 100, y = 4 (peak).
        let input = press_at(104, 4);
        assert_eq!(
            plot(&mut canvas, rect, &values, &plot_style(), Some(&input)),
            Some(2)
        );
    }

    #[test]
    fn test_plot_flat_values() {
        // All-equal samples must not divide by zero.
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(0.0, 0.0, 208.0, 108.0);
        let values = [3.0, 3.0, 3.0];
        assert_eq!(plot(&mut canvas, rect, &values, &plot_style(), None), None);
    }

    #[test]
    fn test_histogram_click_selects_bar() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(0.0, 0.0, 208.0, 108.0);
        let values = [1.0, 4.0, 2.0, 4.0];
        // inner 200x100 at (4,4); item_w = (200 - 12) / 4 = 47.
        // Bar 1 spans x in [4 + 51, 4 + 98], full height.
        let input = press_at(60, 90);
        assert_eq!(
            histogram(&mut canvas, rect, &values, &histo_style(), Some(&input)),
            Some(1)
        );
    }

    #[test]
    fn test_histogram_negative_color() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(0.0, 0.0, 208.0, 108.0);
        let values = [2.0, -4.0];
        histogram(&mut canvas, rect, &values, &histo_style(), None);
        let colors: Vec<Color> = canvas
            .calls
            .iter()
            .skip(1)
            .filter_map(|c| match c {
                veneer_core::DrawCall::Rect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![Color::rgb(45, 45, 45), Color::WHITE]);
    }

    #[test]
    fn test_histogram_empty() {
        let mut canvas = Record::new(400.0, 300.0);
        let rect = Rect::new(0.0, 0.0, 208.0, 108.0);
        assert_eq!(histogram(&mut canvas, rect, &[], &histo_style(), None), None);
        assert_eq!(canvas.calls.len(), 1);
    }
}
