//! Canvas 2D renderer

use game_core::Canvas;
use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    ball_image: HtmlImageElement,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, ball_image: HtmlImageElement) -> Self {
        Self { ctx, ball_image }
    }

    /// A failed or unfinished load leaves the image with no pixels
    fn image_ready(&self) -> bool {
        self.ball_image.complete() && self.ball_image.natural_width() > 0
    }
}

impl Canvas for CanvasRenderer {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(color);
        if let Err(err) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            console_error!("Render error: {:?}", err);
        }
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_ball_image(&mut self, pos: Vec2, size: f32) -> bool {
        if !self.image_ready() {
            return false;
        }
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                &self.ball_image,
                pos.x as f64,
                pos.y as f64,
                size as f64,
                size as f64,
            )
            .is_ok()
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        if let Err(err) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            console_error!("Render error: {:?}", err);
        }
    }
}
