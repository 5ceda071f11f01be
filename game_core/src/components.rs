use glam::Vec2;

/// Shared motion record for everything that moves on the play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,   // Top-left corner
    pub vel: Vec2,   // Pixels per tick
    pub size: Vec2,  // Width, height
    pub start: Vec2, // Position restored by reset
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size,
            start: pos,
        }
    }

    /// Where this body will be after one more tick at its current velocity
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Put the body back where it was spawned. Velocity is left alone.
    pub fn reset(&mut self) {
        self.pos = self.start;
    }
}

/// Ball component - square, moves by its velocity every tick
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub size: f32,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

/// Paddle component - vertical motion is driven by input, x never changes
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub speed: f32,
}

impl Paddle {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
