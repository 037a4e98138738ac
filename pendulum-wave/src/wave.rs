use glam::Vec2;
use tracing::debug;

use crate::{
    clock::{Control, SimClock},
    color::color_from_ratio,
    config::{ConfigError, WaveConfig},
    math::{angular_frequency, small_angle_length},
    pendulum::Pendulum,
};

/// A row of pendulums sharing one pivot, plus the clock driving them.
///
/// Pendulum `i` swings with period `total_period / (base_oscillations + i)`,
/// so angular frequency strictly increases along the row and every
/// pendulum is back at its starting position after `total_period`
/// simulated seconds.
#[derive(Debug, Clone)]
pub struct PendulumWave {
    pendulums: Vec<Pendulum>,
    clock: SimClock,
    pivot: Vec2,
    total_period: f32,
}

impl PendulumWave {
    pub fn new(config: &WaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let amplitude = config.amplitude_rad();
        let pivot = Vec2::new(config.width as f32 / 2.0, config.pivot_y);

        // The longest pendulum takes up `arm_fraction` of the window height,
        // every other arm is scaled by the same factor.
        let pixels_per_metre = config.pixels_per_metre();

        let last_index = config.pendulum_count.saturating_sub(1).max(1) as f32;

        let pendulums: Vec<Pendulum> = (0..config.pendulum_count)
            .map(|i| {
                let period = config.period(i);
                let length = small_angle_length(period, config.gravity) * pixels_per_metre;
                let color = color_from_ratio(i as f32 / last_index);

                Pendulum::new(angular_frequency(period), length, amplitude, pivot, color)
            })
            .collect();

        debug!(
            count = pendulums.len(),
            pixels_per_metre,
            longest_arm = pendulums.first().map(|p| p.length),
            shortest_arm = pendulums.last().map(|p| p.length),
            "built pendulum wave"
        );

        Ok(PendulumWave {
            pendulums,
            clock: SimClock::new(config.speed_step),
            pivot,
            total_period: config.total_period,
        })
    }

    pub fn pendulums(&self) -> &[Pendulum] {
        &self.pendulums
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    pub fn total_period(&self) -> f32 {
        self.total_period
    }

    /// Simulated seconds until every pendulum is back in phase.
    pub fn realignment_in(&self) -> f32 {
        self.total_period - self.clock.elapsed().rem_euclid(self.total_period)
    }

    /// Advances the clock by `dt` wall-clock seconds and moves every bob.
    pub fn step(&mut self, dt: f32) {
        self.clock.advance(dt);
        self.sync_positions();
    }

    pub fn apply(&mut self, control: Control) {
        self.clock.apply(control);
        self.sync_positions();
    }

    fn sync_positions(&mut self) {
        let t = self.clock.elapsed();
        for pendulum in &mut self.pendulums {
            pendulum.update(t);
        }
    }
}
