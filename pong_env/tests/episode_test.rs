use pong_core::*;
use pong_env::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn heuristic_env(seed: u64) -> PongEnv<HeuristicPolicy, SilentReward> {
    let config = Config::new();
    let opponent = HeuristicPolicy::seeded(&config, seed);
    PongEnv::new(config, EnvConfig::new().with_seed(seed), opponent, SilentReward::new).unwrap()
}

#[test]
fn test_random_actions_finish_episodes() {
    let mut env = heuristic_env(1);
    let mut rng = StdRng::seed_from_u64(1);
    let bounds = env.action_bounds();
    let limit = env.env_config().max_steps + 1;

    for _ in 0..4 {
        let mut steps = 0;
        loop {
            let outcome = env.step(bounds.sample(&mut rng)).unwrap();
            steps += 1;
            assert!(!outcome.truncated);
            assert!(outcome.reward.is_finite());
            if outcome.terminated {
                break;
            }
            assert!(steps <= limit, "Episode overran the step limit");
        }
        env.reset().unwrap();
    }
}

#[test]
fn test_episode_ends_the_step_after_a_point() {
    let mut env = heuristic_env(2);
    assert_eq!(env.state().server, env.state().player);

    let mut outcome = env.step([1.0, 0.0]).unwrap();
    assert!(outcome.events.served);

    let mut decided_at = None;
    while !outcome.terminated {
        outcome = env.step([0.0, 0.0]).unwrap();
        if outcome.events.point_decided() {
            assert!(!outcome.terminated || env.step_count() > env.env_config().max_steps);
            decided_at = Some(env.step_count());
        }
    }

    match decided_at {
        Some(step) => {
            let limited = step > env.env_config().max_steps;
            assert!(limited || env.step_count() == step + 1);
            assert_eq!(env.state().phase(), PointPhase::Scored);
        }
        None => assert_eq!(env.step_count(), env.env_config().max_steps + 1),
    }
}

#[test]
fn test_model_opponent() {
    let config = Config::new();
    let opponent = ModelPolicy::new(
        |obs: &Observation| -> [f32; 2] {
            // Serve straight away, then drift toward the ball
            let button = if obs[6] == 1.0 { 1.0 } else { 0.0 };
            [button, obs[1] - obs[5]]
        },
        StandardObserver::new(&config),
    );
    let mut env = PongEnv::new(config, EnvConfig::new(), opponent, DiagnosticReward::new).unwrap();

    // Second starting state: opponent one receives, so serve with the tracked player
    let outcome = env.step([1.0, 0.0]).unwrap();
    assert!(outcome.events.served);

    for _ in 0..200 {
        if env.step([0.0, 0.5]).unwrap().terminated {
            break;
        }
    }
    assert!(env.step_count() > 1);
}

#[test]
fn test_observations_track_the_tracked_player() {
    let mut env = heuristic_env(3);

    for _ in 0..STARTING_STATES.len() {
        let obs = env.reset().unwrap();
        let setup = env.starting_state();
        let own_side = if obs[4] == 0.0 { Side::Left } else { Side::Right };

        assert_eq!(court_orientation(setup.player, setup.positions_reversed), own_side);
        assert_eq!(obs[7] == 1.0, setup.server == setup.player);
        assert_eq!(obs[6], 1.0, "Every episode opens with a held serve");
    }
}

#[test]
fn test_parallel_envs_run_independently() {
    let mut envs: Vec<_> = (0..6).map(heuristic_env).collect();
    let mut rng = StdRng::seed_from_u64(9);
    let bounds = ActionBounds::default();

    for _ in 0..300 {
        let actions: Vec<[f32; 2]> = envs.iter().map(|_| bounds.sample(&mut rng)).collect();
        let outcomes = step_batch(&mut envs, &actions).unwrap();
        assert_eq!(outcomes.len(), envs.len());

        for (env, outcome) in envs.iter_mut().zip(&outcomes) {
            if outcome.terminated {
                env.reset().unwrap();
            }
        }
    }
}
