use crate::{Body, Events, Score};
use hecs::World;

/// Apply this tick's paddle return or miss to the score.
///
/// A miss puts every body back at its start position and ends the rally.
pub fn check_scoring(world: &mut World, score: &mut Score, events: &Events) {
    if events.ball_hit_paddle {
        score.increment();
    }

    if events.ball_missed {
        reset_bodies(world);
        score.reset();
    }
}

/// Reset every ball and paddle to where it was spawned
pub fn reset_bodies(world: &mut World) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Score, Events) {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 200.0), 15.0, Vec2::new(4.0, -4.0));
        create_paddle(&mut world, Vec2::new(770.0, 170.0), Vec2::new(10.0, 60.0), 5.0);
        (world, Score::new(), Events::new())
    }

    fn scatter(world: &mut World) {
        for (_e, body) in world.query_mut::<&mut Body>() {
            body.pos += Vec2::new(-123.0, 45.0);
        }
    }

    #[test]
    fn test_paddle_hit_increments_score() {
        let (mut world, mut score, mut events) = setup_world();
        events.ball_hit_paddle = true;

        check_scoring(&mut world, &mut score, &events);

        assert_eq!(score, Score { current: 1, best: 1 });
    }

    #[test]
    fn test_miss_resets_everything_but_best() {
        let (mut world, mut score, mut events) = setup_world();
        score.increment();
        score.increment();
        scatter(&mut world);
        events.ball_missed = true;

        check_scoring(&mut world, &mut score, &events);

        assert_eq!(score, Score { current: 0, best: 2 });
        for (_e, (body, _)) in world.query::<(&Body, &Ball)>().iter() {
            assert_eq!(body.pos, Vec2::new(400.0, 200.0), "Ball back at start");
        }
        for (_e, (body, _)) in world.query::<(&Body, &Paddle)>().iter() {
            assert_eq!(body.pos, Vec2::new(770.0, 170.0), "Paddle back at start");
        }
    }

    #[test]
    fn test_quiet_tick_changes_nothing() {
        let (mut world, mut score, events) = setup_world();
        score.increment();
        scatter(&mut world);

        check_scoring(&mut world, &mut score, &events);

        assert_eq!(score.current, 1);
        for (_e, body) in world.query::<&Body>().iter() {
            assert_ne!(body.pos, body.start);
        }
    }

    #[test]
    fn test_reset_bodies_twice_same_as_once() {
        let (mut world, _score, _events) = setup_world();
        scatter(&mut world);
        reset_bodies(&mut world);
        let once: Vec<Body> = world.query::<&Body>().iter().map(|(_e, b)| *b).collect();

        reset_bodies(&mut world);
        let twice: Vec<Body> = world.query::<&Body>().iter().map(|(_e, b)| *b).collect();

        assert_eq!(once, twice);
    }
}
