//! Renders one frame of every widget into the draw-call recorder and prints
//! a summary, standing in for a real renderer backend.

use veneer_core::{Color, Config, DrawCall, Input, MonoFont, Record};
use veneer_ui::{
    Align, ButtonBehavior, Filter, GroupState, Heading, Panel, PanelFlags, TabState,
};

struct Gallery {
    panel: Panel,
    tab: TabState,
    group: GroupState,
    checked: bool,
    option: usize,
    volume: f32,
    progress: usize,
    spinner: i32,
    name: [u8; 32],
    name_len: usize,
    name_active: bool,
}

impl Gallery {
    fn new() -> Self {
        Gallery {
            panel: Panel::new(
                50.0,
                50.0,
                400.0,
                500.0,
                PanelFlags::BORDER
                    | PanelFlags::MOVEABLE
                    | PanelFlags::SCALEABLE
                    | PanelFlags::CLOSEABLE
                    | PanelFlags::MINIMIZABLE,
            ),
            tab: TabState::default(),
            group: GroupState::default(),
            checked: true,
            option: 0,
            volume: 5.0,
            progress: 60,
            spinner: 25,
            name: [0; 32],
            name_len: 0,
            name_active: false,
        }
    }

    fn frame(&mut self, config: &Config, canvas: &mut Record, font: &MonoFont, input: &Input) {
        let Some(mut ui) = self
            .panel
            .begin(Some("gallery"), config, canvas, font, Some(input))
        else {
            return;
        };

        ui.row(30.0, 1);
        ui.text("widget gallery", Align::Centered);

        ui.tab(&mut self.tab, "basics", |tab| {
            tab.row(30.0, 2);
            if tab.button_text("fire", ButtonBehavior::Default) {
                log::info!("button fired");
            }
            tab.button_triangle(Heading::Right, ButtonBehavior::Repeater);
        });
        ui.row(30.0, 2);
        self.checked = ui.check("enabled", self.checked);
        if ui.radio("first", self.option == 0) {
            self.option = 0;
        }

        ui.row(30.0, 1);
        self.volume = ui.slider(0.0, self.volume, 10.0, 1.0);
        ui.row(30.0, 1);
        self.progress = ui.progress(self.progress, 100, true);
        ui.row(30.0, 1);
        ui.spinner(0, &mut self.spinner, 100, 5, false);
        ui.row(30.0, 1);
        self.name_len = ui.edit(
            &mut self.name,
            self.name_len,
            &mut self.name_active,
            Filter::Default,
        );

        ui.group(&mut self.group, "charts", |group| {
            group.row(60.0, 1);
            group.plot(&[2.0, 5.0, 3.0, 8.0, 1.0]);
            group.row(60.0, 1);
            group.histogram(&[4.0, -2.0, 6.0, 3.0]);
        });

        ui.row(30.0, 2);
        ui.button_color(Color::rgb(180, 40, 40), ButtonBehavior::Default);
        ui.selector(&["low", "medium", "high"], 1);

        let content = ui.end();
        log::debug!("frame content height {content}");
    }
}

fn main() {
    env_logger::init();

    let config = Config::default();
    let font = MonoFont::new(8.0, 14.0);
    let mut canvas = Record::new(800.0, 600.0);
    let mut input = Input::default();
    let mut gallery = Gallery::new();

    // a scripted frame: the pointer drags the title bar a little
    input.begin();
    input.motion(200, 60);
    input.button(200, 60, true);
    input.end();
    input.begin();
    input.motion(230, 80);
    input.end();

    gallery.frame(&config, &mut canvas, &font, &input);

    let mut rects = 0usize;
    let mut texts = 0usize;
    let mut lines = 0usize;
    let mut other = 0usize;
    for call in &canvas.calls {
        match call {
            DrawCall::Rect { .. } => rects += 1,
            DrawCall::Text { .. } => texts += 1,
            DrawCall::Line { .. } => lines += 1,
            _ => other += 1,
        }
    }
    println!(
        "recorded {} draw calls ({rects} rects, {texts} texts, {lines} lines, {other} other)",
        canvas.calls.len()
    );
    println!(
        "panel moved to ({}, {})",
        gallery.panel.x, gallery.panel.y
    );
}
