//! End-to-end Pong scenarios through the public API

use arcade_envs::{
    env::pong::{Ball, PaddleMove, Pong, PongConfig},
    prelude::*,
};

#[test]
fn test_held_up_moves_paddle_to_top() {
    let mut env = Pong::with_seed(true, PongConfig::default(), 3).unwrap();
    let speed = env.config.paddle_speed_1;
    let top = 20.0;

    for frame in 1..=10 {
        env.step(&[PaddleMove::Up, PaddleMove::NoMove]).unwrap();
        let expected = (120.0 - speed * frame as f32).max(top);
        assert_eq!(env.paddle_1.y, expected, "frame {}", frame);
    }
    assert_eq!(env.paddle_1.y, top);
}

#[test]
fn test_left_exit_rewards_and_reserve() {
    let mut env = Pong::with_seed(true, PongConfig::default(), 17).unwrap();
    env.ball = Ball::new(6.0, 220.0, -8.0, 2.0);

    let result = env.step(&[PaddleMove::NoMove, PaddleMove::NoMove]).unwrap();

    assert_eq!(result.rewards, vec![-10.0, 10.0]);
    assert!(result.episode_over);

    // Served from one quarter line toward the far side
    let ball = &env.ball;
    assert!(
        (ball.x == 60.0 && ball.vx == 8.0) || (ball.x == 180.0 && ball.vx == -8.0),
        "unexpected serve {:?}",
        ball
    );
    assert_eq!(ball.y, 120.0);
}

#[test]
fn test_score_rollover_exactly_at_threshold() {
    let config = PongConfig::default().score_reset_threshold(30.0);
    let mut env = Pong::with_seed(true, config, 5).unwrap();

    let mut rolled = 0;
    for _ in 0..4 {
        env.ball = Ball::new(235.0, 60.0, 8.0, 1.0);
        let before = env.scores;
        let result = env.step(&[PaddleMove::NoMove, PaddleMove::NoMove]).unwrap();
        let raw = before[0] + 10.0;
        if raw >= 30.0 {
            assert_eq!(result.score, [0.0, 0.0]);
            rolled += 1;
        } else {
            assert_eq!(result.score, [raw, before[1]]);
        }
    }
    assert_eq!(rolled, 1);
    assert_eq!(env.scores, [10.0, 0.0]);
}

#[test]
fn test_single_player_long_run() {
    let mut env = Pong::with_seed(false, PongConfig::default(), 99).unwrap();
    let mut actions = RandomActions::with_seed(PaddleMove::COUNT, 1);

    for _ in 0..3000 {
        let batch = actions.next_actions(env.num_agents());
        let result = env.step_indices(&batch).unwrap();
        assert_ne!(env.ball.vy, 0.0);
        assert_eq!(result.observations.len(), 2);
        assert!(result.score[0] < 210.0 && result.score[1] < 210.0);
    }
}

#[test]
fn test_observation_space_matches_frames() {
    let mut env = Pong::new(true).unwrap();
    let frames = env.reset().unwrap();

    assert_eq!(frames.len(), 2);
    assert_eq!(env.observation_space().shape, frames[0].shape().to_vec());
    assert_eq!(env.scores, [0.0, 0.0]);
}
