//! Headless frame export
//!
//! Runs one scene without a window for a fixed number of frames and writes
//! each frame as `frame_NNNN.png`.

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::input::{FrameContext, InputState};
use crate::rasterizer::{Color, ExportError, Framebuffer};
use crate::scene::Scene;

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub frames: u32,
    pub width: i32,
    pub height: i32,
    /// Simulated seconds per frame
    pub dt: f32,
    pub clear_color: Color,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            frames: 60,
            width: 320,
            height: 240,
            dt: 1.0 / 60.0,
            clear_color: Color::BLACK,
            show_progress: true,
        }
    }
}

pub fn frame_file_name(index: u32) -> String {
    format!("frame_{:04}.png", index)
}

/// Render `settings.frames` frames of `scene` into `out_dir` (created if
/// missing). Input is an empty snapshot every frame.
pub fn export_frames(
    scene: &mut dyn Scene,
    settings: &ExportSettings,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(out_dir)?;

    let mut fb = Framebuffer::new(settings.width, settings.height);
    if fb.is_empty() {
        return Err(ExportError::EmptyFramebuffer(fb.width(), fb.height()));
    }

    let input = InputState::new();
    let ctx = FrameContext::new(settings.dt, &input, false);

    let pb = if settings.show_progress {
        ProgressBar::new(settings.frames as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Exporting [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message(scene.name());

    scene.on_enter();
    let mut written = Vec::with_capacity(settings.frames as usize);
    for i in 0..settings.frames {
        fb.clear(settings.clear_color);
        scene.update(&ctx);
        scene.render(&mut fb);

        let path = out_dir.join(frame_file_name(i));
        fb.save_png(&path)?;
        written.push(path);
        pb.inc(1);
    }
    scene.on_exit();

    pb.finish_with_message(format!("{} frames", written.len()));
    info!("Exported {} frame(s) of {} to {}", written.len(), scene.name(), out_dir.display());
    Ok(written)
}
