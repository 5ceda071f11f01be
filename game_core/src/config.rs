use std::fmt;

use crate::{GameMap, Params};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub fps: u32,
    pub color: String,
    pub font: String,
    pub score_x: f32,
    pub score_y: f32,
    pub ball_image: String,
    pub ball_speed: f32,
    pub ball_size: f32,
    pub paddle_sound: String,
    pub paddle_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: Params::FPS,
            color: Params::COLOR.to_string(),
            font: Params::FONT.to_string(),
            score_x: Params::SCORE_X,
            score_y: Params::SCORE_Y,
            ball_image: Params::BALL_IMAGE.to_string(),
            ball_speed: Params::BALL_SPEED,
            ball_size: Params::BALL_SIZE,
            paddle_sound: Params::PADDLE_SOUND.to_string(),
            paddle_speed: Params::PADDLE_SPEED,
            paddle_width: Params::PADDLE_SIZE,
            paddle_height: Params::PADDLE_SIZE * 6.0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds between ticks
    pub fn tick_interval_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }

    /// Check the configuration against the play area it will run in
    pub fn validate(&self, map: &GameMap) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > 1000 {
            return Err(ConfigError::FpsOutOfRange { fps: self.fps });
        }

        let positive = [
            ("ball_speed", self.ball_speed),
            ("ball_size", self.ball_size),
            ("paddle_speed", self.paddle_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let min_width = self.paddle_width * 3.0 + self.ball_size;
        let min_height = self.paddle_height.max(self.ball_size);
        if map.width <= min_width || map.height <= min_height {
            return Err(ConfigError::ArenaTooSmall {
                width: map.width,
                height: map.height,
                min_width,
                min_height,
            });
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    FpsOutOfRange {
        fps: u32,
    },
    NonPositive {
        field: &'static str,
        value: f32,
    },
    ArenaTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FpsOutOfRange { fps } => write!(f, "fps must be in 1..=1000, got {fps}"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::ArenaTooSmall {
                width,
                height,
                min_width,
                min_height,
            } => write!(
                f,
                "play area {width}x{height} is smaller than the required {min_width}x{min_height}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
