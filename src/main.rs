//! Bonnie Sandbox: CPU software rendering playground
//!
//! Every pixel is produced on the CPU:
//! - Column-major vector/matrix library
//! - RGBA8 framebuffer with table-driven quantization
//! - Bresenham lines, filled disks, per-pixel Lambert sphere
//! - Yaw/pitch camera with near-plane culled wireframe projection
//!
//! The window only uploads the finished framebuffer as a texture.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
#[cfg(not(target_arch = "wasm32"))]
mod export;
mod input;
mod logging;
mod rasterizer;
mod scene;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use macroquad::prelude::*;
use tracing::{error, info};

use app::AppState;
use config::{load_config, save_config, AppConfig};
use input::{buttons, keys, FrameContext, InputState};
use logging::{LogBuffer, LogLevel};
use scene::SceneRegistry;

#[derive(Parser, Debug)]
#[command(name = "bonnie-sandbox", version)]
struct Cli {
    /// RON config file (missing file means defaults)
    #[arg(long, default_value = "sandbox.ron")]
    config: PathBuf,

    /// Scene to start in, overrides the config
    #[arg(long)]
    scene: Option<String>,

    /// Also log debug messages
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the registered scene names.
    List,
    /// Write the default config to the --config path.
    InitConfig,
    /// Render frames of one scene to PNG files without opening a window.
    #[cfg(not(target_arch = "wasm32"))]
    Export(ExportArgs),
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
struct ExportArgs {
    /// Scene name (case-insensitive).
    #[arg(long)]
    scene: String,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    #[arg(long, default_value_t = 320)]
    width: i32,

    #[arg(long, default_value_t = 240)]
    height: i32,

    /// Seconds simulated per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Output directory.
    #[arg(long, default_value = "frames")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log = LogBuffer::new();
    logging::init(&log, cli.verbose).context("failed to install logger")?;
    info!("Bonnie Sandbox v{}", VERSION);

    let registry = SceneRegistry::builtin();

    match cli.cmd {
        Some(Command::List) => {
            for name in registry.names() {
                println!("{}", name);
            }
            Ok(())
        }
        Some(Command::InitConfig) => {
            save_config(&AppConfig::default(), &cli.config)
                .with_context(|| format!("failed to write {}", cli.config.display()))?;
            info!("Wrote default config to {}", cli.config.display());
            Ok(())
        }
        #[cfg(not(target_arch = "wasm32"))]
        Some(Command::Export(args)) => run_export(&registry, &cli.config, args),
        None => {
            let mut config = match load_config(&cli.config) {
                Ok(config) => config,
                Err(e) => {
                    error!("Config {}: {}, using defaults", cli.config.display(), e);
                    AppConfig::default()
                }
            };
            if let Some(scene) = cli.scene {
                config.initial_scene = scene;
            }
            run_window(config, registry, log);
            Ok(())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_export(registry: &SceneRegistry, config_path: &std::path::Path, args: ExportArgs) -> anyhow::Result<()> {
    use config::apply_presets;
    use export::{export_frames, ExportSettings};

    let config = load_config(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let mut scene = registry
        .create(&args.scene)
        .with_context(|| format!("unknown scene '{}' (try `list`)", args.scene))?;
    let applied = apply_presets(&config.presets, scene.as_mut());
    info!("Applied {} preset value(s) to {}", applied, scene.name());

    let settings = ExportSettings {
        frames: args.frames,
        width: args.width,
        height: args.height,
        dt: args.dt,
        clear_color: config.clear_color,
        show_progress: true,
    };
    export_frames(scene.as_mut(), &settings, &args.out)
        .with_context(|| format!("export to {} failed", args.out.display()))?;
    Ok(())
}

fn window_conf(config: &AppConfig) -> Conf {
    Conf {
        window_title: format!("{} v{}", config.title, VERSION),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn run_window(config: AppConfig, registry: SceneRegistry, log: LogBuffer) {
    let conf = window_conf(&config);
    macroquad::Window::from_config(conf, window_loop(config, registry, log));
}

/// Macroquad keys mirrored into the input snapshot (fly camera only;
/// scene hotkeys are polled directly)
const KEY_MAP: [(KeyCode, i32); 8] = [
    (KeyCode::A, keys::A),
    (KeyCode::D, keys::D),
    (KeyCode::E, keys::E),
    (KeyCode::Q, keys::Q),
    (KeyCode::S, keys::S),
    (KeyCode::W, keys::W),
    (KeyCode::LeftShift, keys::LEFT_SHIFT),
    (KeyCode::RightShift, keys::RIGHT_SHIFT),
];

const SCENE_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

fn gather_input(input: &mut InputState, scale: f32) {
    for (code, key) in KEY_MAP {
        input.set_key(key, is_key_down(code));
    }
    input.set_mouse_button(buttons::LEFT, is_mouse_button_down(MouseButton::Left));
    input.set_mouse_button(buttons::RIGHT, is_mouse_button_down(MouseButton::Right));
    input.set_mouse_button(buttons::MIDDLE, is_mouse_button_down(MouseButton::Middle));
    let (mx, my) = mouse_position();
    input.set_mouse_position(mx / scale, my / scale);
}

async fn window_loop(config: AppConfig, registry: SceneRegistry, log: LogBuffer) {
    let mut app = AppState::from_config(&config, &registry, log);
    let scale = config.effective_pixel_scale() as f32;
    let mut input = InputState::new();

    info!("Window open, scene {}", app.active_scene_name().unwrap_or("-"));

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if let Some(i) = SCENE_KEYS.iter().position(|&k| is_key_pressed(k)) {
            app.select_scene(i);
        }
        if is_key_pressed(KeyCode::Tab) {
            app.scenes.select_next();
        }
        if is_key_pressed(KeyCode::R) {
            app.reset_scene();
        }

        let screen_w = screen_width();
        let screen_h = screen_height();
        let fb_w = (screen_w / scale) as i32;
        let fb_h = (screen_h / scale) as i32;

        gather_input(&mut input, scale);
        let (mx, my) = mouse_position();
        let hovered = mx >= 0.0 && my >= 0.0 && mx < screen_w && my < screen_h;
        let ctx = FrameContext::new(get_frame_time(), &input, hovered);
        app.frame(&ctx, fb_w, fb_h);

        clear_background(BLACK);
        let fb = &app.framebuffer;
        if !fb.is_empty() {
            let texture = Texture2D::from_rgba8(fb.width() as u16, fb.height() as u16, fb.pixels());
            texture.set_filter(FilterMode::Nearest);
            draw_texture_ex(
                &texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(fb.width() as f32 * scale, fb.height() as f32 * scale)),
                    ..Default::default()
                },
            );
        }

        draw_overlay(&app);
        next_frame().await;
    }

    info!("Window closed");
}

/// Scene name, its current controls and the last few log lines
fn draw_overlay(app: &AppState) {
    let name = app.active_scene_name().unwrap_or("-");
    let header = format!(
        "[{}/{}] {}  (1-9 / Tab: switch, R: reset, Esc: quit)",
        app.scenes.active_index() + 1,
        app.scenes.len(),
        name
    );
    draw_text(&header, 8.0, 20.0, 20.0, WHITE);

    if let Some(scene) = app.scenes.active() {
        for (i, control) in scene.describe_controls().iter().enumerate() {
            let y = 40.0 + 16.0 * i as f32;
            draw_text(&control.label(), 8.0, y, 16.0, Color::from_rgba(180, 220, 210, 255));
        }
    }

    let entries = app.log.entries();
    let start = entries.len().saturating_sub(5);
    let mut y = screen_height() - 8.0 - 16.0 * (entries.len() - start) as f32;
    for entry in &entries[start..] {
        let color = match entry.level {
            LogLevel::Info => Color::from_rgba(200, 200, 200, 255),
            LogLevel::Warn => Color::from_rgba(240, 200, 80, 255),
            LogLevel::Error => Color::from_rgba(240, 90, 80, 255),
        };
        y += 16.0;
        draw_text(&entry.text, 8.0, y, 16.0, color);
    }
}
