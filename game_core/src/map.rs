use glam::Vec2;

use crate::Config;

/// The play area, origin top-left, sized from the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Strict containment: points on the border are outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > 0.0 && point.x < self.width && point.y > 0.0 && point.y < self.height
    }

    /// Ball starts in the middle of the area
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle sits three paddle widths in from the right edge, vertically centred
    pub fn paddle_spawn(&self, config: &Config) -> Vec2 {
        Vec2::new(
            self.width - config.paddle_width * 3.0,
            (self.height - config.paddle_height) / 2.0,
        )
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(crate::Params::ARENA_WIDTH, crate::Params::ARENA_HEIGHT)
    }
}
