use glam::Vec2;
use hecs::World;

use crate::render::{draw_frame, Canvas};
use crate::{
    create_ball, create_paddle, step, AssetTracker, Ball, Body, Config, ConfigError, Events,
    GameMap, InputState, Paddle, Score,
};

/// Everything the game needs, owned in one place and handed to the tick and
/// to event handlers
pub struct Game {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub input: InputState,
    pub events: Events,
    pub assets: AssetTracker,
    ticks: u64,
}

impl Game {
    pub fn new(config: Config, map: GameMap) -> Result<Self, ConfigError> {
        config.validate(&map)?;

        let mut world = World::new();
        create_ball(
            &mut world,
            map.ball_spawn(),
            config.ball_size,
            Vec2::new(config.ball_speed, -config.ball_speed),
        );
        create_paddle(
            &mut world,
            map.paddle_spawn(&config),
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_speed,
        );

        Ok(Self {
            world,
            map,
            config,
            score: Score::new(),
            input: InputState::new(),
            events: Events::new(),
            assets: AssetTracker::new(),
            ticks: 0,
        })
    }

    /// Advance one tick. Does nothing while assets are still loading.
    pub fn tick(&mut self) -> bool {
        if !self.assets.is_complete() {
            return false;
        }

        step(
            &mut self.world,
            &self.map,
            &self.input,
            &mut self.score,
            &mut self.events,
        );
        self.ticks += 1;
        true
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        draw_frame(&self.world, &self.map, &self.config, &self.score, canvas);
    }

    /// Ticks actually simulated, not counting loading no-ops
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ball(&self) -> Option<Body> {
        let mut query = self.world.query::<(&Body, &Ball)>();
        query.iter().next().map(|(_e, (body, _))| *body)
    }

    pub fn paddle(&self) -> Option<Body> {
        let mut query = self.world.query::<(&Body, &Paddle)>();
        query.iter().next().map(|(_e, (body, _))| *body)
    }
}
