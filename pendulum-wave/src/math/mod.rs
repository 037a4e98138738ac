use std::f32::consts::TAU;

/// Angular frequency, in radians per second, of an oscillation with the given period
pub fn angular_frequency(period: f32) -> f32 {
    TAU / period
}

/// Length of a simple pendulum swinging with `period` under the small-angle approximation
pub fn small_angle_length(period: f32, gravity: f32) -> f32 {
    gravity * (period / TAU).powi(2)
}
