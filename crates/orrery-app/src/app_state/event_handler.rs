//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use super::core::OrreryApp;

/// Pixels per scroll "line" when the platform reports pixel deltas.
const PIXELS_PER_LINE: f64 = 40.0;

impl ApplicationHandler for OrreryApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.frame.clock.tick(Instant::now());
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::Focused(false) => {
                self.frame.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
                };
                self.frame.camera.process_scroll(dy);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            // Screen y grows downward; the camera expects positive = look up.
            self.frame.camera.process_mouse(dx as f32, -dy as f32);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.request_redraw();
    }
}

impl OrreryApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            physical_key,
            state,
            repeat,
            ..
        } = event;
        let PhysicalKey::Code(code) = physical_key else {
            return;
        };
        let pressed = state == ElementState::Pressed;

        if code == KeyCode::Escape && pressed {
            tracing::info!("Escape pressed, exiting");
            self.should_exit = true;
            return;
        }

        if !repeat {
            self.frame.set_key(code, pressed);
        }
    }

    fn render_frame(&mut self) {
        self.frame.update(Instant::now());

        let Some(ref mut rs) = self.render_state else {
            return;
        };
        if let Err(e) = rs.render(&self.frame.scene()) {
            tracing::error!("Render error: {e}");
        }
    }
}
