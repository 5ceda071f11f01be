//! Frame description
//!
//! The core decides what a frame contains; a [`Canvas`] implementation
//! decides how to put it on screen. Drawing only reads game state.

use glam::Vec2;
use hecs::World;

use crate::{Ball, Body, Config, GameMap, Paddle, Params, Score};

/// Drawing surface the frame is described to
pub trait Canvas {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// Returns false when there is no decoded ball image to draw
    fn draw_ball_image(&mut self, pos: Vec2, size: f32) -> bool;
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

pub fn draw_frame(
    world: &World,
    map: &GameMap,
    config: &Config,
    score: &Score,
    canvas: &mut impl Canvas,
) {
    canvas.clear(map.width, map.height);

    for (_entity, (body, ball)) in world.query::<(&Body, &Ball)>().iter() {
        if !canvas.draw_ball_image(body.pos, ball.size) {
            // Fallback circle is centred on the ball's corner
            canvas.fill_circle(body.pos, ball.size / 2.0, &config.color);
        }
    }

    for (_entity, (body, _paddle)) in world.query::<(&Body, &Paddle)>().iter() {
        canvas.fill_rect(body.pos, body.size, &config.color);
    }

    let anchor = Vec2::new(config.score_x, config.score_y);
    canvas.fill_text(
        &format!("Score: {}", score.current),
        anchor,
        &config.font,
        &config.color,
    );
    canvas.fill_text(
        &format!("Hi Score: {}", score.best),
        anchor + Vec2::new(Params::BEST_SCORE_OFFSET, 0.0),
        &config.font,
        &config.color,
    );
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear(f32, f32),
        Rect(Vec2, Vec2, String),
        Circle(Vec2, f32, String),
        Image(Vec2, f32),
        Text(String, Vec2),
    }

    /// Records draw calls instead of drawing
    pub struct MockCanvas {
        pub has_image: bool,
        pub calls: Vec<DrawCall>,
    }

    impl MockCanvas {
        pub fn new(has_image: bool) -> Self {
            Self {
                has_image,
                calls: Vec::new(),
            }
        }
    }

    impl Canvas for MockCanvas {
        fn clear(&mut self, width: f32, height: f32) {
            self.calls.push(DrawCall::Clear(width, height));
        }

        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
            self.calls.push(DrawCall::Rect(pos, size, color.to_string()));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
            self.calls
                .push(DrawCall::Circle(center, radius, color.to_string()));
        }

        fn draw_ball_image(&mut self, pos: Vec2, size: f32) -> bool {
            if self.has_image {
                self.calls.push(DrawCall::Image(pos, size));
            }
            self.has_image
        }

        fn fill_text(&mut self, text: &str, pos: Vec2, _font: &str, _color: &str) {
            self.calls.push(DrawCall::Text(text.to_string(), pos));
        }
    }
}
