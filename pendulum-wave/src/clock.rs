//! Simulated time, decoupled from wall-clock time by a pause flag and a
//! speed multiplier.

use tracing::debug;

/// Default factor applied by [`Control::SpeedUp`] and [`Control::SlowDown`].
pub const DEFAULT_SPEED_STEP: f32 = 1.2;

/// Discrete user actions that act on the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    TogglePause,
    Reset,
    SpeedUp,
    SlowDown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimClock {
    elapsed: f32,
    scale: f32,
    paused: bool,
    speed_step: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        SimClock::new(DEFAULT_SPEED_STEP)
    }
}

impl SimClock {
    pub fn new(speed_step: f32) -> Self {
        SimClock {
            elapsed: 0.0,
            scale: 1.0,
            paused: false,
            speed_step,
        }
    }

    /// Simulated seconds since start or the last reset.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances by `dt` wall-clock seconds, scaled. Does nothing while paused.
    pub fn advance(&mut self, dt: f32) {
        if !self.paused {
            self.elapsed += dt * self.scale;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Rewinds to zero. Speed and pause state are left alone.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn speed_up(&mut self) {
        self.scale *= self.speed_step;
    }

    pub fn slow_down(&mut self) {
        self.scale /= self.speed_step;
    }

    pub fn apply(&mut self, control: Control) {
        match control {
            Control::TogglePause => self.toggle_pause(),
            Control::Reset => self.reset(),
            Control::SpeedUp => self.speed_up(),
            Control::SlowDown => self.slow_down(),
        }

        debug!(
            ?control,
            elapsed = self.elapsed,
            scale = self.scale,
            paused = self.paused,
            "applied control"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_scaled() {
        let mut clock = SimClock::default();
        clock.advance(0.5);
        assert_eq!(clock.elapsed(), 0.5);

        clock.apply(Control::SpeedUp);
        clock.advance(1.0);
        assert!((clock.elapsed() - 1.7).abs() < 1e-6);
    }

    #[test]
    fn test_pause_freezes() {
        let mut clock = SimClock::default();
        clock.advance(0.25);
        clock.apply(Control::TogglePause);
        assert!(clock.is_paused());

        let frozen = clock.elapsed();
        clock.advance(1.0);
        clock.advance(3.0);
        assert_eq!(clock.elapsed(), frozen);

        clock.apply(Control::TogglePause);
        clock.advance(1.0);
        assert_eq!(clock.elapsed(), frozen + 1.0);
    }

    #[test]
    fn test_reset_is_exact() {
        let mut clock = SimClock::default();
        for _ in 0..7 {
            clock.apply(Control::SpeedUp);
        }
        for _ in 0..100 {
            clock.advance(0.016_67);
        }
        assert!(clock.elapsed() > 0.0);

        clock.apply(Control::Reset);
        assert_eq!(clock.elapsed(), 0.0);
        // Speed survives a reset.
        assert!((clock.scale() - 1.2f32.powi(7)).abs() < 1e-4);
    }

    #[test]
    fn test_reset_while_paused() {
        let mut clock = SimClock::default();
        clock.advance(2.0);
        clock.apply(Control::TogglePause);
        clock.apply(Control::Reset);
        assert_eq!(clock.elapsed(), 0.0);
        assert!(clock.is_paused());
    }

    #[test]
    fn test_speed_steps_invert() {
        let mut clock = SimClock::default();
        clock.apply(Control::SpeedUp);
        assert!((clock.scale() - 1.2).abs() < 1e-6);
        clock.apply(Control::SlowDown);
        clock.apply(Control::SlowDown);
        assert!((clock.scale() - 1.0 / 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_custom_step() {
        let mut clock = SimClock::new(2.0);
        clock.apply(Control::SpeedUp);
        clock.apply(Control::SpeedUp);
        assert_eq!(clock.scale(), 4.0);
    }
}
