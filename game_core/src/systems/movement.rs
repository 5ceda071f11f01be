use crate::{Ball, Body, GameMap, InputState, Paddle};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, (body, _ball)) in world.query_mut::<(&mut Body, &Ball)>() {
        body.pos += body.vel;
    }
}

/// Apply paddle movement from input. Keys win over the pointer; only one
/// rule applies per tick.
pub fn move_paddles(world: &mut World, input: &InputState, map: &GameMap) {
    for (_entity, (body, paddle)) in world.query_mut::<(&mut Body, &Paddle)>() {
        if input.down && body.pos.y < map.height - body.size.y {
            body.pos.y += paddle.speed;
        } else if input.up && body.pos.y > 0.0 {
            body.pos.y -= paddle.speed;
        } else if input.pointer_in_bounds(map) {
            // Centre on the pointer; not clamped, so the paddle can hang off an edge
            body.pos.y = input.pointer.y - body.size.y / 2.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn paddle_y(world: &World) -> f32 {
        world
            .query::<(&Body, &Paddle)>()
            .iter()
            .next()
            .map(|(_e, (body, _))| body.pos.y)
            .unwrap()
    }

    fn setup_paddle(y: f32) -> (World, GameMap) {
        let mut world = World::new();
        create_paddle(&mut world, Vec2::new(770.0, y), Vec2::new(10.0, 60.0), 5.0);
        (world, GameMap::new(800.0, 400.0))
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 200.0), 15.0, Vec2::new(4.0, -4.0));

        move_ball(&mut world);

        for (_e, (body, _)) in world.query::<(&Body, &Ball)>().iter() {
            assert_eq!(body.pos, Vec2::new(404.0, 196.0));
            assert_eq!(body.start, Vec2::new(400.0, 200.0), "Start is never moved");
        }
    }

    #[test]
    fn test_move_ball_leaves_paddle_alone() {
        let (mut world, _map) = setup_paddle(170.0);
        move_ball(&mut world);
        assert_eq!(paddle_y(&world), 170.0);
    }

    #[test]
    fn test_paddle_moves_down() {
        let (mut world, map) = setup_paddle(170.0);
        let input = InputState {
            down: true,
            ..InputState::new()
        };
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), 175.0);
    }

    #[test]
    fn test_paddle_moves_up() {
        let (mut world, map) = setup_paddle(170.0);
        let input = InputState {
            up: true,
            ..InputState::new()
        };
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), 165.0);
    }

    #[test]
    fn test_paddle_stops_at_bottom_bound() {
        // Exactly at the limit: down is suppressed
        let (mut world, map) = setup_paddle(340.0);
        let input = InputState {
            down: true,
            ..InputState::new()
        };
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), 340.0);
    }

    #[test]
    fn test_paddle_stops_at_top_bound() {
        let (mut world, map) = setup_paddle(0.0);
        let input = InputState {
            up: true,
            ..InputState::new()
        };
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), 0.0);
    }

    #[test]
    fn test_down_wins_over_up() {
        let (mut world, map) = setup_paddle(170.0);
        let input = InputState {
            up: true,
            down: true,
            ..InputState::new()
        };
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), 175.0);
    }

    #[test]
    fn test_blocked_down_falls_through_to_up() {
        let (mut world, map) = setup_paddle(340.0);
        let input = InputState {
            up: true,
            down: true,
            ..InputState::new()
        };
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), 335.0);
    }

    #[test]
    fn test_paddle_follows_pointer() {
        let (mut world, map) = setup_paddle(170.0);
        let mut input = InputState::new();
        input.pointer_moved(300.0, 100.0);
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), 70.0, "Paddle centre snaps to the pointer");
    }

    #[test]
    fn test_pointer_snap_is_not_clamped() {
        let (mut world, map) = setup_paddle(170.0);
        let mut input = InputState::new();
        input.pointer_moved(300.0, 10.0);
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), -20.0);
    }

    #[test]
    fn test_keys_override_pointer() {
        let (mut world, map) = setup_paddle(170.0);
        let mut input = InputState {
            up: true,
            ..InputState::new()
        };
        input.pointer_moved(300.0, 350.0);
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), 165.0);
    }

    #[test]
    fn test_pointer_outside_area_does_nothing() {
        let (mut world, map) = setup_paddle(170.0);
        let mut input = InputState::new();
        input.pointer_moved(900.0, 100.0);
        move_paddles(&mut world, &input, &map);
        assert_eq!(paddle_y(&world), 170.0);
    }
}
