//! End-to-end frames driven through the public API against the draw-call
//! recorder backend.

use veneer_core::{Config, DrawCall, Input, MonoFont, Record, Rect};
use veneer_ui::{Align, ButtonBehavior, Filter, Heading, Panel, PanelFlags};

// MonoFont(8, 14): 14 + 3 * item_padding.y + panel_padding.y
const HEADER: f32 = 14.0 + 3.0 * 4.0 + 10.0;

fn fixture() -> (Config, MonoFont, Record) {
    (
        Config::default(),
        MonoFont::new(8.0, 14.0),
        Record::new(800.0, 600.0),
    )
}

/// Outer rectangles of every `button_color` widget, in draw order.
fn button_rects(record: &Record) -> Vec<Rect> {
    // button_color draws the frame rect, then the one-pixel-inset fill;
    // collect the frames by pairing
    let mut rects = Vec::new();
    let mut calls = record.calls.iter().peekable();
    while let Some(call) = calls.next() {
        if let DrawCall::Rect { rect: outer, .. } = call
            && let Some(DrawCall::Rect { rect: inner, .. }) = calls.peek()
            && inner.x == outer.x + 1.0
            && inner.y == outer.y + 1.0
        {
            rects.push(*outer);
            calls.next();
        }
    }
    rects
}

#[test]
fn test_two_row_layout_places_widgets_per_column_math() {
    let (config, font, mut canvas) = fixture();
    let mut panel = Panel::new(0.0, 0.0, 200.0, 200.0, PanelFlags::empty());
    let color = config.color(veneer_core::ColorRole::Button);

    let mut ui = panel
        .begin(None, &config, &mut canvas, &font, None)
        .unwrap();
    ui.row(30.0, 2);
    ui.button_color(color, ButtonBehavior::Default);
    ui.button_color(color, ButtonBehavior::Default);
    ui.row(30.0, 1);
    ui.button_color(color, ButtonBehavior::Default);
    ui.end();

    let rects = button_rects(&canvas);
    assert_eq!(rects.len(), 3);

    // content width loses the scrollbar column: 200 - 16 = 184
    let content = 200.0 - config.scrollbar_width;
    let two_col = (content - 2.0 * config.panel_padding.x - config.item_spacing.x) / 2.0;
    assert_eq!(rects[0], Rect::new(15.0, HEADER, two_col, 30.0));
    assert_eq!(
        rects[1],
        Rect::new(15.0 + two_col + config.item_spacing.x, HEADER, two_col, 30.0)
    );

    // the full-width row starts back at the content-left edge, one row down
    let full = content - 2.0 * config.panel_padding.x;
    assert_eq!(
        rects[2],
        Rect::new(
            15.0,
            HEADER + 30.0 + config.item_spacing.y,
            full,
            30.0
        )
    );
}

#[test]
fn test_panel_scroll_offset_clamps_to_content() {
    let (config, font, mut canvas) = fixture();
    let mut panel = Panel::new(0.0, 0.0, 200.0, 136.0, PanelFlags::empty());
    panel.offset = 10_000.0;

    let mut ui = panel
        .begin(None, &config, &mut canvas, &font, None)
        .unwrap();
    for _ in 0..10 {
        ui.row(30.0, 1);
        ui.text("line", Align::Left);
    }
    ui.end();

    // content: 10 rows of 38px below the header -> target 380;
    // bar height 100, steppers 16 each -> track 68; max offset 312
    assert_eq!(panel.offset, 312.0);
}

#[test]
fn test_abandoned_frame_restores_full_canvas_scissor() {
    let (config, font, mut canvas) = fixture();
    let mut panel = Panel::new(20.0, 20.0, 200.0, 200.0, PanelFlags::empty());
    {
        let mut ui = panel
            .begin(Some("left open"), &config, &mut canvas, &font, None)
            .unwrap();
        ui.row(30.0, 1);
    }
    assert_eq!(
        canvas.current_scissor(),
        Some(Rect::new(0.0, 0.0, 800.0, 600.0))
    );
}

#[test]
fn test_widgets_return_identity_without_interaction() {
    let (config, font, mut canvas) = fixture();
    let mut panel = Panel::new(0.0, 0.0, 300.0, 500.0, PanelFlags::BORDER);

    let mut input = Input::default();
    input.begin();
    input.end();

    let mut ui = panel
        .begin(Some("gallery"), &config, &mut canvas, &font, Some(&input))
        .unwrap();
    ui.row(30.0, 2);
    assert!(!ui.button_text("fire", ButtonBehavior::Default));
    assert!(!ui.button_triangle(Heading::Right, ButtonBehavior::Repeater));
    ui.row(30.0, 2);
    assert!(ui.check("on", true));
    assert!(!ui.radio("off", false));
    ui.row(30.0, 1);
    assert_eq!(ui.slider(0.0, 5.0, 10.0, 1.0), 5.0);
    ui.row(30.0, 1);
    assert_eq!(ui.progress(60, 100, true), 60);
    ui.row(30.0, 2);
    ui.separator(1);
    assert!(!ui.button_toggle("latch", false));
    ui.row(30.0, 1);
    let mut value = 42;
    assert!(!ui.spinner(0, &mut value, 100, 1, false));
    assert_eq!(value, 42);
    ui.row(30.0, 1);
    assert_eq!(ui.selector(&["a", "b", "c"], 2), 2);
    ui.row(60.0, 1);
    assert_eq!(ui.plot(&[1.0, 3.0, 2.0]), None);
    ui.row(60.0, 1);
    assert_eq!(ui.histogram(&[1.0, -2.0, 3.0]), None);
    let height = ui.end();
    assert!(height > 0.0);
}

#[test]
fn test_typed_text_reaches_an_active_edit_field() {
    let (config, font, mut canvas) = fixture();
    let mut panel = Panel::new(0.0, 0.0, 300.0, 200.0, PanelFlags::empty());

    let mut input = Input::default();
    input.begin();
    input.character("é".as_bytes());
    input.end();

    let mut buffer = [0u8; 32];
    let mut active = true;
    let mut ui = panel
        .begin(None, &config, &mut canvas, &font, Some(&input))
        .unwrap();
    ui.row(30.0, 1);
    let len = ui.edit(&mut buffer, 0, &mut active, Filter::Default);
    ui.end();

    assert!(active);
    assert_eq!(&buffer[..len], "é".as_bytes());
}

#[test]
fn test_minimized_panel_keeps_geometry_and_offset() {
    let (config, font, mut canvas) = fixture();
    let mut panel = Panel::new(10.0, 10.0, 200.0, 300.0, PanelFlags::MINIMIZABLE);
    panel.minimized = true;
    panel.offset = 40.0;

    let mut ui = panel
        .begin(Some("closed"), &config, &mut canvas, &font, None)
        .unwrap();
    ui.row(30.0, 1);
    ui.text("invisible", Align::Centered);
    ui.end();

    assert_eq!((panel.x, panel.y, panel.w, panel.h), (10.0, 10.0, 200.0, 300.0));
    assert_eq!(panel.offset, 40.0);
    assert!(panel.minimized);
}
