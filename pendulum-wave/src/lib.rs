pub mod clock;
pub mod color;
pub mod config;
mod math;
pub mod pendulum;
pub mod wave;

pub use clock::{Control, SimClock};
pub use color::{color_from_ratio, Rgb8};
pub use config::{ConfigError, WaveConfig};
pub use pendulum::{swing_angle, swing_position, Pendulum};
pub use wave::PendulumWave;
