//! OrreryApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use orrery_config::OrreryConfig;
use orrery_renderer::RenderState;

use super::frame::FrameContext;

/// Top-level application state.
pub struct OrreryApp {
    pub(super) config: OrreryConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Camera, clock, orbit, held keys
    pub(super) frame: FrameContext,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl OrreryApp {
    pub fn new(config: OrreryConfig) -> Self {
        let frame = FrameContext::new(&config, Instant::now());
        Self {
            config,
            window: None,
            render_state: None,
            frame,
            should_exit: false,
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
