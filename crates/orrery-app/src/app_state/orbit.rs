//! The light indicator's circular orbit in the XZ plane.

use orrery_config::schema::LightConfig;

/// Orbit state with an integrated phase, so speed changes never make the
/// light jump along its path.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LightOrbit {
    radius: f32,
    /// Radians per second, never negative.
    speed: f32,
    phase: f32,
    step: f32,
    debounce: f32,
    /// Elapsed time of the last accepted speed change.
    last_change: Option<f32>,
}

impl LightOrbit {
    pub fn from_config(config: &LightConfig) -> Self {
        Self {
            radius: config.orbit_radius as f32,
            speed: config.orbit_speed.max(0.0) as f32,
            phase: 0.0,
            step: config.speed_step as f32,
            debounce: config.debounce as f32,
            last_change: None,
        }
    }

    /// Advance the phase by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.phase = (self.phase + self.speed * dt) % std::f32::consts::TAU;
    }

    /// Current light position: `(r cos φ, 0, r sin φ)`.
    pub fn position(&self) -> [f32; 3] {
        [
            self.radius * self.phase.cos(),
            0.0,
            self.radius * self.phase.sin(),
        ]
    }

    #[cfg(test)]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Raise the speed by one step unless a change happened within the
    /// debounce window. Returns whether the speed changed.
    pub fn speed_up(&mut self, now: f32) -> bool {
        self.change_speed(now, self.step)
    }

    /// Lower the speed by one step, floored at zero.
    pub fn slow_down(&mut self, now: f32) -> bool {
        self.change_speed(now, -self.step)
    }

    fn change_speed(&mut self, now: f32, delta: f32) -> bool {
        if let Some(last) = self.last_change {
            if now - last < self.debounce {
                return false;
            }
        }
        self.last_change = Some(now);
        self.speed = (self.speed + delta).max(0.0);
        tracing::info!(speed = self.speed, "Light orbit speed changed");
        true
    }
}
