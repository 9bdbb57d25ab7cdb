use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;
use slidedeck::constants::*;
use slidedeck::{DisplayConfig, Page, RangeInput, ScaleController, TextDisplay, Widget, layout};

mod texture_loader;
mod viewer;

use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use crate::viewer::engine::RaylibEngine;
use crate::viewer::slide::Slide;
use crate::viewer::ui::{self, SliderView};

const WINDOW_TITLE: &str = "Slide Deck";

/// Present a directory of slide images with a live scale control.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the slide images, shown in file name order
    slides_dir: PathBuf,

    /// Initial value of the scale control, in percent
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(0..=100))]
    scale: i32,

    /// Present the slides in random order
    #[arg(long)]
    shuffle: bool,

    /// Wrap around after the last slide
    #[arg(long = "loop")]
    loop_slides: bool,

    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    window_width: u32,

    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    window_height: u32,
}

fn load_slides(rl: &mut RaylibHandle, thread: &RaylibThread, slides_dir: &Path) -> Result<Vec<Slide>> {
    let paths = load_sorted_image_paths(slides_dir)?;

    let mut slides = Vec::with_capacity(paths.len());
    for path in paths {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("skipping slide: {}", e),
        }
    }
    info!("loaded {} slides from {:?}", slides.len(), slides_dir);
    Ok(slides)
}

/// The scale control and its readout, as the controller expects to find them.
fn build_page(default_scale: i32) -> Page {
    let mut page = Page::new();
    page.insert(SCALE_SLIDER_ID, Widget::Range(RangeInput::new(0, 100, 1, default_scale)));
    page.insert(SCALE_READOUT_ID, Widget::Text(TextDisplay::default()));
    page
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(args.window_width as i32, args.window_height as i32)
        .title(WINDOW_TITLE)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let slides = load_slides(&mut rl, &thread, &args.slides_dir)
        .with_context(|| format!("failed to load slides from {:?}", args.slides_dir))?;

    let mut page = build_page(args.scale);
    let startup_config = DisplayConfig {
        shuffle: args.shuffle,
        loop_slides: args.loop_slides,
        ..DisplayConfig::default()
    };
    let mut controller = ScaleController::start_with_config(
        RaylibEngine::new(slides, args.slides_dir.clone()),
        &mut page,
        SCALE_SLIDER_ID,
        SCALE_READOUT_ID,
        startup_config,
    )
    .context("failed to start the presentation")?;

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH, RENDER_HEIGHT)
        .map_err(|e| anyhow!("failed to create render texture: {}", e))?;

    let mut slider = SliderView::new(24.0, 24.0, 200.0);
    let mut window_title = String::new();

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if let Some(event) = slider.update(&rl, &mut page, SCALE_SLIDER_ID) {
            controller.handle_event(&mut page, &event);
        }

        let engine = controller.engine_mut();
        let Some(config) = engine.config().cloned() else {
            break;
        };

        if let Some(navigation) = ui::pressed_navigation(&rl, &config).or_else(|| ui::clicked_control(&rl, &config)) {
            engine.navigate(navigation);
        }
        engine.update(dt);

        if config.hash {
            let title = format!("{} {}", WINDOW_TITLE, engine.deck().hash_fragment());
            if title != window_title {
                rl.set_window_title(&thread, &title);
                window_title = title;
            }
        }

        // Canvas size can be changed through a live update
        if framebuffer.width() != config.width as i32 || framebuffer.height() != config.height as i32 {
            framebuffer = rl
                .load_render_texture(&thread, config.width, config.height)
                .map_err(|e| anyhow!("failed to resize render texture: {}", e))?;
        }

        engine.render_frame(&mut rl, &thread, &mut framebuffer);

        // --- Draw the canvas into the window at the fitted viewport ---
        let viewport = layout::fit(rl.get_screen_width() as f32, rl.get_screen_height() as f32, &config);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(viewport.x, viewport.y, viewport.width, viewport.height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );

        ui::draw_overlays(&mut d, &config, engine.deck());
        slider.draw(&mut d, &page, SCALE_SLIDER_ID, SCALE_READOUT_ID);
    }

    Ok(())
}
