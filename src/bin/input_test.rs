//! Live input readout.
//!
//! Shows which virtual key codes and mouse buttons are held, and flashes the
//! frame-local pressed/released edges. Useful for checking whether a terminal
//! reports key releases. Esc quits.

use std::collections::VecDeque;
use std::fmt::Write as _;

use anyhow::Result;

use cge::core::{Canvas, Pen};
use cge::engine::{init_logging, Context, EngineConfig, EngineLoop, LoggingConfig};
use cge::term::TerminalPlatform;
use cge::types::{glyph, keys, Colour};

const HISTORY: usize = 20;

#[derive(Default)]
struct Readout {
    events: VecDeque<String>,
}

impl Readout {
    fn push(&mut self, line: String) {
        if self.events.len() == HISTORY {
            self.events.pop_front();
        }
        self.events.push_back(line);
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        log_file: Some("input-test.log".into()),
        ..LoggingConfig::default()
    })?;

    let config = EngineConfig::new(80, 30, 8, 16).with_app_name("input test");
    let mut engine = EngineLoop::new(
        config,
        Readout::default(),
        TerminalPlatform::new(),
        |_, _| true,
        update,
    )?;
    let stop = engine.stop_handle();
    engine.platform_mut().stop_on_interrupt(stop);
    engine.run()?;
    Ok(())
}

fn update(readout: &mut Readout, ctx: &mut Context, _dt: f32) -> bool {
    if ctx.key(keys::ESCAPE).pressed {
        return false;
    }

    let frame = ctx.frame_index();
    for code in ctx.keys().any_pressed() {
        readout.push(format!("{frame:>6}  key   0x{code:02X} pressed"));
    }
    for code in ctx.keys().any_released() {
        readout.push(format!("{frame:>6}  key   0x{code:02X} released"));
    }
    for button in ctx.mouse().any_pressed() {
        readout.push(format!("{frame:>6}  mouse {button} pressed"));
    }
    for button in ctx.mouse().any_released() {
        readout.push(format!("{frame:>6}  mouse {button} released"));
    }

    let mut held = String::from("held:");
    for code in ctx.keys().any_held() {
        let _ = write!(held, " 0x{code:02X}");
    }
    let buttons: Vec<String> = ctx.mouse().any_held().map(|b| b.to_string()).collect();
    let pointer = format!(
        "mouse {:3},{:3}  buttons [{}]  focus {}",
        ctx.mouse_x(),
        ctx.mouse_y(),
        buttons.join(" "),
        if ctx.is_focused() { "yes" } else { "no" }
    );
    let typed = match ctx.keys().held_char() {
        Some(ch) => format!("printable held: {ch:?}"),
        None => "printable held: -".to_string(),
    };

    ctx.clear(Pen::new(glyph::SPACE, Colour::BG_BLACK));
    let w = ctx.screen_width();
    ctx.draw_rectangle(0, 0, w - 1, 4, Pen::solid(Colour::FG_DARK_GREY));
    ctx.draw_string(2, 1, &held, Colour::FG_WHITE);
    ctx.draw_string(2, 2, &pointer, Colour::FG_CYAN);
    ctx.draw_string(2, 3, &typed, Colour::FG_YELLOW);

    for (i, line) in readout.events.iter().enumerate() {
        let colour = if line.ends_with("pressed") {
            Colour::FG_GREEN
        } else {
            Colour::FG_RED
        };
        ctx.draw_string(2, 6 + i as i32, line, colour);
    }

    let (mx, my) = ctx.mouse_pos();
    ctx.draw(mx, my, Pen::new('+', Colour::FG_WHITE));
    true
}
