//! Headless play loop for both environments
//!
//! Drives Hunter-Prey and single-player Pong with random actions, logs
//! episode results, and paces frames in real time when asked to.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example play --release -- [frames] [--realtime]
//! RUST_LOG=arcade_envs=debug cargo run --example play
//! ```

use anyhow::Result;
use arcade_envs::{
    env::{
        hunter_prey::{HunterPrey, Move},
        pong::{PaddleMove, Pong},
        Environment,
    },
    input::{ActionSource, RandomActions},
    utils::{preprocess, FrameClock},
};
use tracing_subscriber::EnvFilter;

const NUM_HUNTERS: usize = 2;
const NUM_PREYS: usize = 2;
const OBS_SIZE: usize = 80;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let frames: usize = match args.iter().find(|a| !a.starts_with("--")) {
        Some(n) => n.parse()?,
        None => 2000,
    };
    let realtime = args.iter().any(|a| a == "--realtime");

    run_hunter_prey(frames, realtime)?;
    run_pong(frames, realtime)?;
    Ok(())
}

fn run_hunter_prey(frames: usize, realtime: bool) -> Result<()> {
    let mut env = HunterPrey::new(NUM_HUNTERS, NUM_PREYS)?;
    let mut actions = RandomActions::new(Move::COUNT);
    let mut clock = FrameClock::new(if realtime { env.fps() } else { 0 });

    tracing::info!("Environment: HunterPrey");
    tracing::info!("  Hunters: {}", NUM_HUNTERS);
    tracing::info!("  Preys: {}", NUM_PREYS);
    tracing::info!("  Observation: {:?}", env.observation_space().shape);

    let mut returns = vec![0.0f32; NUM_PREYS];
    for _ in 0..frames {
        let batch = actions.next_actions(env.num_agents());
        let result = env.step_indices(&batch)?;
        for (total, r) in returns.iter_mut().zip(&result.rewards) {
            *total += r;
        }

        if result.episode_over {
            let obs = preprocess(&result.observations[0], OBS_SIZE, OBS_SIZE);
            tracing::info!(
                "episode {} over: total score {:.1}, returns {:?}, obs mean {:.3}",
                result.info.episode,
                result.score,
                returns,
                obs.iter().sum::<f32>() / obs.len() as f32
            );
            returns.iter_mut().for_each(|r| *r = 0.0);
        }
        clock.tick();
    }
    Ok(())
}

fn run_pong(frames: usize, realtime: bool) -> Result<()> {
    let mut env = Pong::new(false)?;
    let mut actions = RandomActions::new(PaddleMove::COUNT);
    let mut clock = FrameClock::new(if realtime { env.config.fps } else { 0 });

    tracing::info!("Environment: Pong (single player)");
    tracing::info!("  Observation: {:?}", env.observation_space().shape);

    for _ in 0..frames {
        let batch = actions.next_actions(env.num_agents());
        let result = env.step_indices(&batch)?;
        if result.episode_over {
            tracing::info!(
                "point {}: rewards {:?}, scores {:?}",
                result.info.episode,
                result.rewards,
                result.score
            );
        }
        clock.tick();
    }
    Ok(())
}
