//! Per-frame application context: camera, clock, light orbit, held keys.
//!
//! Owned by the app and passed explicitly to input handling and the
//! per-frame update.

use std::collections::HashSet;
use std::time::Instant;

use winit::keyboard::KeyCode;

use orrery_config::OrreryConfig;
use orrery_renderer::{Camera, CameraMovement, SceneFrame};

use super::orbit::LightOrbit;

/// Frame timing: seconds since the previous frame and since start.
#[derive(Debug, Clone)]
pub(crate) struct FrameClock {
    start: Instant,
    last: Instant,
    delta: f32,
    elapsed: f32,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
            delta: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.last).as_secs_f32();
        self.elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        self.last = now;
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

pub(crate) struct FrameContext {
    pub camera: Camera,
    pub clock: FrameClock,
    pub orbit: LightOrbit,
    held: HashSet<KeyCode>,
}

impl FrameContext {
    pub fn new(config: &OrreryConfig, now: Instant) -> Self {
        Self {
            camera: Camera::from_config(&config.camera),
            clock: FrameClock::new(now),
            orbit: LightOrbit::from_config(&config.light),
            held: HashSet::new(),
        }
    }

    /// Track a key press or release.
    pub fn set_key(&mut self, code: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(code);
        } else {
            self.held.remove(&code);
        }
    }

    /// Forget every held key. Releases that happen while the window is
    /// unfocused are never delivered.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Advance one frame: tick the clock, apply held keys, move the light.
    pub fn update(&mut self, now: Instant) {
        self.clock.tick(now);
        let dt = self.clock.delta();

        for &(code, movement) in &MOVEMENT_KEYS {
            if self.held.contains(&code) {
                self.camera.process_keyboard(movement, dt);
            }
        }

        let elapsed = self.clock.elapsed();
        if self.held.contains(&KeyCode::KeyH) {
            self.orbit.speed_up(elapsed);
        }
        if self.held.contains(&KeyCode::KeyJ) {
            self.orbit.slow_down(elapsed);
        }

        self.orbit.advance(dt);
    }

    /// Inputs for rendering the current frame.
    pub fn scene(&self) -> SceneFrame<'_> {
        SceneFrame {
            camera: &self.camera,
            light_position: self.orbit.position(),
        }
    }
}

const MOVEMENT_KEYS: [(KeyCode, CameraMovement); 4] = [
    (KeyCode::KeyW, CameraMovement::Forward),
    (KeyCode::KeyS, CameraMovement::Backward),
    (KeyCode::KeyA, CameraMovement::Left),
    (KeyCode::KeyD, CameraMovement::Right),
];
