use crate::{Ball, Body, Events, GameMap, Paddle};
use glam::Vec2;
use hecs::World;

/// Resolve ball collisions against the next position, before it is committed.
///
/// The top/bottom bounce is checked on its own. Left wall, paddle return and
/// miss are exclusive: at most one of them fires per tick. A miss is only
/// flagged here; [`check_scoring`](crate::systems::check_scoring) applies it.
pub fn check_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddle = {
        let mut paddle_query = world.query::<(&Body, &Paddle)>();
        paddle_query.iter().next().map(|(_e, (body, _))| *body)
    };

    for (_entity, (body, ball)) in world.query_mut::<(&mut Body, &Ball)>() {
        let next = body.next_pos();

        if next.y > map.height - ball.size || next.y < 0.0 {
            body.vel.y = -body.vel.y;
            events.ball_hit_wall = true;
        }

        if next.x < 0.0 {
            body.vel.x = -body.vel.x;
            events.ball_hit_wall = true;
        } else if paddle.is_some_and(|paddle| returns_ball(&paddle, next, ball.size)) {
            body.vel.x = -body.vel.x;
            events.ball_hit_paddle = true;
        } else if next.x > map.width - ball.size {
            events.ball_missed = true;
        }
    }
}

/// The ball reaches the paddle's near edge with its next y inside the
/// paddle's span. Only the projected position is tested, so a fast ball can
/// pass through.
fn returns_ball(paddle: &Body, next: Vec2, ball_size: f32) -> bool {
    next.x > paddle.pos.x - ball_size && next.y > paddle.pos.y && next.y < paddle.bottom()
}
