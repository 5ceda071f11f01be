/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (used when no canvas size is available)
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 320.0;

    // Loop
    pub const FPS: u32 = 50;

    // Drawing
    pub const COLOR: &'static str = "#0095DD";
    pub const FONT: &'static str = "16px Arial";
    pub const SCORE_X: f32 = 8.0;
    pub const SCORE_Y: f32 = 20.0;
    pub const BEST_SCORE_OFFSET: f32 = 90.0; // Hi score label sits right of the score label

    // Ball
    pub const BALL_IMAGE: &'static str = "images/ball.gif";
    pub const BALL_SPEED: f32 = 4.0; // Pixels per tick on each axis
    pub const BALL_SIZE: f32 = 15.0;

    // Paddle
    pub const PADDLE_SOUND: &'static str = "sounds/pong_beep.wav";
    pub const PADDLE_SPEED: f32 = 5.0;
    pub const PADDLE_SIZE: f32 = 10.0; // Width; height is six of these
}
