use glam::Vec2;

use crate::GameMap;

/// Rally score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub current: u32, // Returns since the last miss
    pub best: u32,    // Longest rally this session
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
        }
    }

    /// Start a new rally; the best score survives
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// Player input, written by event handlers and read by the update
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub pointer: Vec2, // Last known pointer position, relative to the play area
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Returns true if the key is bound.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" | "Up" | "w" | "W" => self.up = true,
            "ArrowDown" | "Down" | "s" | "S" => self.down = true,
            _ => return false,
        }
        true
    }

    /// Handle key up event. Returns true if the key is bound.
    pub fn key_up(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" | "Up" | "w" | "W" => self.up = false,
            "ArrowDown" | "Down" | "s" | "S" => self.down = false,
            _ => return false,
        }
        true
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn pointer_in_bounds(&self, map: &GameMap) -> bool {
        map.contains(self.pointer)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool, // Paddle sound trigger
    pub ball_missed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.ball_missed = false;
    }
}
