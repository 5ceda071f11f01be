pub mod assets;
pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use assets::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    map: &GameMap,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Move paddle from input
    move_paddles(world, input, map);

    // 3. Check collisions against the next position
    check_collisions(world, map, events);

    // 4. Apply returns and misses
    check_scoring(world, score, events);
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, size: f32, vel: Vec2) -> hecs::Entity {
    world.spawn((Body::new(pos, Vec2::splat(size), vel), Ball::new(size)))
}

/// Helper to create the paddle entity
pub fn create_paddle(world: &mut World, pos: Vec2, size: Vec2, speed: f32) -> hecs::Entity {
    world.spawn((Body::new(pos, size, Vec2::ZERO), Paddle::new(speed)))
}
