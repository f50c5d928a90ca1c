//! Application state
//!
//! Owns the framebuffer and every scene instance. All scenes stay alive in
//! the background; switching only changes which one is updated and drawn.

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::input::FrameContext;
use crate::logging::LogBuffer;
use crate::rasterizer::{Color, Framebuffer};
use crate::scene::{SceneManager, SceneRegistry};

pub struct AppState {
    pub framebuffer: Framebuffer,
    pub scenes: SceneManager,
    pub clear_color: Color,
    /// Recent log lines for on-screen display
    pub log: LogBuffer,
}

impl AppState {
    /// Empty framebuffer, one instance of every registered scene
    pub fn new(registry: &SceneRegistry, log: LogBuffer) -> Self {
        Self {
            framebuffer: Framebuffer::new(0, 0),
            scenes: SceneManager::from_registry(registry),
            clear_color: AppConfig::default().clear_color,
            log,
        }
    }

    /// Build from a config: clear color, presets, then the initial scene
    pub fn from_config(config: &AppConfig, registry: &SceneRegistry, log: LogBuffer) -> Self {
        let mut app = Self::new(registry, log);
        app.clear_color = config.clear_color;
        for preset in &config.presets {
            let applied = preset.apply(&mut app.scenes);
            debug!("Preset '{}': {} value(s) applied", preset.scene, applied);
        }
        if !config.initial_scene.is_empty() && !app.scenes.set_active_by_name(&config.initial_scene) {
            info!("Unknown initial scene '{}', keeping default", config.initial_scene);
        }
        app
    }

    pub fn active_scene_name(&self) -> Option<&'static str> {
        self.scenes.active().map(|s| s.name())
    }

    /// Switch scenes by position in the registry order
    pub fn select_scene(&mut self, index: usize) {
        self.scenes.set_active_index(index);
    }

    /// Restart the active scene's animation
    pub fn reset_scene(&mut self) {
        if let Some(scene) = self.scenes.active_mut() {
            scene.reset();
        }
    }

    /// One frame: resize to the target, clear, update, render
    pub fn frame(&mut self, ctx: &FrameContext, width: i32, height: i32) {
        let (w, h) = (width.max(0) as usize, height.max(0) as usize);
        if (w, h) != (self.framebuffer.width(), self.framebuffer.height()) {
            info!("Framebuffer resized to {}x{}", w, h);
            self.framebuffer.resize(width, height);
        }
        self.framebuffer.clear(self.clear_color);

        if let Some(scene) = self.scenes.active_mut() {
            scene.update(ctx);
            scene.render(&mut self.framebuffer);
        }
    }
}
