//! Wave configuration.
//!
//! Every field has a compiled-in default, so an empty JSON object (or no file
//! at all) yields the classic 25-pendulum, 60-second wave. A file may override
//! any subset of fields:
//!
//! ```json
//! {
//!   "pendulum_count": 15,
//!   "total_period": 30.0,
//!   "amplitude_deg": 15.0
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{clock::DEFAULT_SPEED_STEP, math::small_angle_length};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("pendulum count must be at least 1")]
    NoPendulums,
    #[error("base oscillation count must be at least 1")]
    NoBaseOscillations,
    #[error("`{field}` must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("speed step must be finite and greater than 1, got {0}")]
    BadSpeedStep(f32),
    #[error("window size must be non-zero, got {width}x{height}")]
    EmptyWindow { width: u32, height: u32 },
    #[error("frame rate limit must be at least 1")]
    NoFrameRate,
    #[error("{base} base oscillations plus {count} pendulums is out of range")]
    TooManyOscillations { base: u32, count: u32 },
    #[error("arms cannot be scaled to the window: longest arm {longest_metres} m, {pixels_per_metre} px/m")]
    BadScale {
        longest_metres: f32,
        pixels_per_metre: f32,
    },
    #[error("could not parse wave configuration")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WaveConfig {
    pub width: u32,  // initial window width, pixels
    pub height: u32, // initial window height, pixels

    pub pendulum_count: u32,
    pub total_period: f32,     // seconds until every pendulum is back in phase
    pub base_oscillations: u32, // swings of the longest pendulum per `total_period`

    pub amplitude_deg: f32,
    pub gravity: f32,      // m/s^2
    pub arm_fraction: f32, // share of the window height taken by the longest arm
    pub pivot_y: f32,      // pixels from the top edge
    pub bob_radius: f32,   // pixels

    pub speed_step: f32,
    pub frame_rate_limit: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        WaveConfig {
            width: 1800,
            height: 1000,
            pendulum_count: 25,
            total_period: 60.0,
            base_oscillations: 50,
            amplitude_deg: 22.0,
            gravity: 9.81,
            arm_fraction: 0.8,
            pivot_y: 50.0,
            bob_radius: 12.0,
            speed_step: DEFAULT_SPEED_STEP,
            frame_rate_limit: 120,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

impl WaveConfig {
    /// Reads a JSON configuration and validates it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: WaveConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WaveConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.width,
                height: self.height,
            });
        }
        if self.pendulum_count == 0 {
            return Err(ConfigError::NoPendulums);
        }
        if self.base_oscillations == 0 {
            return Err(ConfigError::NoBaseOscillations);
        }
        if self
            .base_oscillations
            .checked_add(self.pendulum_count - 1)
            .is_none()
        {
            return Err(ConfigError::TooManyOscillations {
                base: self.base_oscillations,
                count: self.pendulum_count,
            });
        }

        positive("total_period", self.total_period)?;
        positive("gravity", self.gravity)?;
        positive("arm_fraction", self.arm_fraction)?;
        positive("bob_radius", self.bob_radius)?;

        finite("pivot_y", self.pivot_y)?;
        finite("amplitude_deg", self.amplitude_deg)?;

        if !(self.speed_step.is_finite() && self.speed_step > 1.0) {
            return Err(ConfigError::BadSpeedStep(self.speed_step));
        }
        if self.frame_rate_limit == 0 {
            return Err(ConfigError::NoFrameRate);
        }

        // Individually sane fields can still under- or overflow once combined.
        let longest_metres = self.longest_arm_metres();
        let pixels_per_metre = self.pixels_per_metre();
        let finite_positive = |v: f32| v.is_finite() && v > 0.0;
        if !(finite_positive(longest_metres) && finite_positive(pixels_per_metre)) {
            return Err(ConfigError::BadScale {
                longest_metres,
                pixels_per_metre,
            });
        }

        Ok(())
    }

    pub fn amplitude_rad(&self) -> f32 {
        self.amplitude_deg.to_radians()
    }

    /// Period, in seconds, of the pendulum at `index`.
    pub fn period(&self, index: u32) -> f32 {
        self.total_period / (self.base_oscillations as f32 + index as f32)
    }

    /// Physical length, in metres, of the slowest pendulum.
    pub fn longest_arm_metres(&self) -> f32 {
        small_angle_length(self.period(0), self.gravity)
    }

    /// Screen scale that makes the slowest pendulum span `arm_fraction` of the window height.
    pub fn pixels_per_metre(&self) -> f32 {
        self.height as f32 * self.arm_fraction / self.longest_arm_metres()
    }
}
