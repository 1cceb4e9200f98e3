//! Engine showcase (default binary).
//!
//! Draws every primitive the rasterizer has, flies a wireframe ship with the arrow
//! keys and follows the mouse. Esc quits, Space toggles filled shapes.
//!
//! Usage: `cge-demo [config.json] [sprite.spr]`

use std::f32::consts::{PI, TAU};

use anyhow::{Context as _, Result};
use log::info;

use cge::core::{Canvas, Pen, Pose, Sprite};
use cge::engine::{init_logging, Context, EngineConfig, EngineLoop, LoggingConfig};
use cge::term::TerminalPlatform;
use cge::types::{glyph, keys, mouse, Colour};

const SHIP: [(f32, f32); 3] = [(0.0, -5.0), (-2.5, 2.5), (2.5, 2.5)];
const TURN_RATE: f32 = PI;
const THRUST: f32 = 20.0;

struct Demo {
    ship: Pose,
    velocity: (f32, f32),
    sprite: Sprite,
    filled: bool,
    clock: f32,
}

impl Demo {
    fn new(sprite: Sprite) -> Self {
        Self {
            ship: Pose::at(0.0, 0.0),
            velocity: (0.0, 0.0),
            sprite,
            filled: true,
            clock: 0.0,
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        log_file: Some("cge-demo.log".into()),
        ..LoggingConfig::default()
    })?;

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            EngineConfig::from_json_str(&json)?
        }
        None => EngineConfig::default().with_app_name("cge demo"),
    };
    let sprite = match args.next() {
        Some(path) => Sprite::load_or_blank(path),
        None => badge(),
    };

    let mut engine = EngineLoop::new(
        config,
        Demo::new(sprite),
        TerminalPlatform::new(),
        on_create,
        on_update,
    )?;
    let stop = engine.stop_handle();
    engine.platform_mut().stop_on_interrupt(stop);

    engine.run()?;
    info!("demo finished after {} frames", engine.frame_count());
    Ok(())
}

/// A small sprite drawn with the rasterizer itself.
fn badge() -> Sprite {
    let mut s = Sprite::default();
    s.fill_circle(3, 3, 3, Pen::new(glyph::HALF, Colour::FG_DARK_YELLOW));
    s.draw_circle(3, 3, 3, Pen::solid(Colour::FG_YELLOW));
    s.draw_string(2, 3, "OK", Colour::FG_BLACK | Colour::BG_YELLOW);
    s
}

fn on_create(demo: &mut Demo, ctx: &mut Context) -> bool {
    demo.ship = Pose::new(
        ctx.screen_width() as f32 / 2.0,
        ctx.screen_height() as f32 / 2.0,
        0.0,
        1.0,
    );
    true
}

fn on_update(demo: &mut Demo, ctx: &mut Context, dt: f32) -> bool {
    if ctx.key(keys::ESCAPE).pressed {
        return false;
    }
    if ctx.key(keys::SPACE).pressed {
        demo.filled = !demo.filled;
    }
    demo.clock += dt;

    steer(demo, ctx, dt);

    let w = ctx.screen_width();
    let h = ctx.screen_height();
    ctx.clear(Pen::new(glyph::SPACE, Colour::BG_BLACK));

    // Shapes along the left side.
    let shape = Pen::solid(Colour::FG_GREEN);
    let outline = Pen::solid(Colour::FG_WHITE);
    if demo.filled {
        ctx.fill_triangle(4, 4, 16, 8, 6, 14, shape);
        ctx.fill_circle(10, 22, 5, Pen::new(glyph::THREE_QUARTERS, Colour::FG_CYAN));
        ctx.fill_rectangle(4, 30, 10, 5, Pen::new(glyph::QUARTER, Colour::FG_MAGENTA));
    }
    ctx.draw_triangle(4, 4, 16, 8, 6, 14, outline);
    ctx.draw_circle(10, 22, 5, outline);
    ctx.draw_rectangle(4, 30, 10, 5, outline);

    // Spinning line and the sprite, whole and in part.
    let (sin, cos) = demo.clock.sin_cos();
    let (cx, cy) = (w - 20, 10);
    ctx.draw_line(
        cx - (cos * 8.0) as i32,
        cy - (sin * 4.0) as i32,
        cx + (cos * 8.0) as i32,
        cy + (sin * 4.0) as i32,
        Pen::solid(Colour::FG_RED),
    );
    let sprite = &demo.sprite;
    ctx.draw_sprite(w - 30, h - 12, sprite);
    ctx.draw_sprite_alpha(w - 20, h - 12, sprite);
    ctx.draw_partial_sprite_alpha(w - 10, h - 12, 0, 0, sprite.width() / 2, sprite.height(), sprite);

    // Ship.
    ctx.draw_wireframe_model(&SHIP, demo.ship, Pen::solid(Colour::FG_YELLOW));

    // Mouse crosshair.
    let (mx, my) = ctx.mouse_pos();
    let cursor = if ctx.mouse_button(mouse::LEFT).held {
        Pen::solid(Colour::FG_RED)
    } else {
        Pen::new('+', Colour::FG_WHITE)
    };
    ctx.draw_line(mx - 1, my, mx + 1, my, cursor);
    ctx.draw_line(mx, my - 1, mx, my + 1, cursor);

    let status = format!(
        "{} | {:6.1} fps | mouse {:3},{:3} | arrows fly, space fill, esc quit",
        ctx.app_name(),
        ctx.fps(),
        mx,
        my
    );
    ctx.draw_string(0, h - 1, &status, Colour::FG_BLACK | Colour::BG_GREY);
    if !ctx.is_focused() {
        ctx.draw_string_alpha(w / 2 - 4, 0, "(paused)", Colour::FG_DARK_GREY);
    }

    true
}

fn steer(demo: &mut Demo, ctx: &Context, dt: f32) {
    if ctx.key(keys::LEFT).held {
        demo.ship.rotation -= TURN_RATE * dt;
    }
    if ctx.key(keys::RIGHT).held {
        demo.ship.rotation += TURN_RATE * dt;
    }
    if ctx.key(keys::UP).held {
        // The model points up (-y), so thrust follows the rotated -y axis.
        let (sin, cos) = demo.ship.rotation.sin_cos();
        demo.velocity.0 += sin * THRUST * dt;
        demo.velocity.1 -= cos * THRUST * dt;
    }
    demo.ship.rotation = demo.ship.rotation.rem_euclid(TAU);

    let w = ctx.screen_width() as f32;
    let h = ctx.screen_height() as f32;
    demo.ship.x = (demo.ship.x + demo.velocity.0 * dt).rem_euclid(w);
    demo.ship.y = (demo.ship.y + demo.velocity.1 * dt).rem_euclid(h);
}
