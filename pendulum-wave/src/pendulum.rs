use std::f32::consts::TAU;

use glam::Vec2;

use crate::color::Rgb8;

// Screen coordinates, y grows downwards:
//
//        pivot
//          |\
//          | \  angle
//          |  \
//          |   o bob
//          v
//         +Y

/// Angular displacement at time `t` of an undamped small-angle pendulum
/// released from its maximum displacement at `t = 0`.
pub fn swing_angle(angular_frequency: f32, amplitude: f32, t: f32) -> f32 {
    amplitude * (angular_frequency * t).cos()
}

/// Bob position at time `t` for a pendulum hanging from `pivot` on an arm
/// of `length` pixels. A zero angle points straight down.
pub fn swing_position(
    angular_frequency: f32,
    amplitude: f32,
    pivot: Vec2,
    length: f32,
    t: f32,
) -> Vec2 {
    let angle = swing_angle(angular_frequency, amplitude, t);
    pivot + Vec2::new(angle.sin(), angle.cos()) * length
}

#[derive(Debug, Clone)]
pub struct Pendulum {
    /// Radians per second.
    pub angular_frequency: f32,
    /// Visual arm length in pixels.
    pub length: f32,
    /// Radians.
    pub amplitude: f32,
    pub pivot: Vec2,
    pub color: Rgb8,

    /// Bob position as of the last [`Pendulum::update`].
    pub position: Vec2,
}

impl Pendulum {
    pub fn new(
        angular_frequency: f32,
        length: f32,
        amplitude: f32,
        pivot: Vec2,
        color: Rgb8,
    ) -> Self {
        let mut pendulum = Pendulum {
            angular_frequency,
            length,
            amplitude,
            pivot,
            color,
            position: pivot,
        };
        pendulum.update(0.0);
        pendulum
    }

    /// Seconds per full swing.
    pub fn period(&self) -> f32 {
        TAU / self.angular_frequency
    }

    pub fn angle_at(&self, t: f32) -> f32 {
        swing_angle(self.angular_frequency, self.amplitude, t)
    }

    pub fn position_at(&self, t: f32) -> Vec2 {
        swing_position(
            self.angular_frequency,
            self.amplitude,
            self.pivot,
            self.length,
            t,
        )
    }

    pub fn update(&mut self, t: f32) {
        self.position = self.position_at(t);
    }
}
