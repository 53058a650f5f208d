use pong_core::{
    new_match, Config, ControllerPolicy, Events, GameRng, Intent, Intents, MatchSetup, MatchState,
    Observation, ObservationBounds, Observer, Params, PlayerId, RewardHook, SimError,
    StandardObserver,
};

use crate::{ActionBounds, EnvConfig, EnvError, STARTING_STATES};

/// Builds the reward hook for the tracked player of a new episode
pub type HookFactory<H> = fn(PlayerId) -> H;

/// Result of one environment step, from the tracked player's point of view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub observation: Observation,
    /// Reward earned during this step only
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub events: Events,
}

/// One training episode at a time: a model plays one side of a single
/// point against a scripted opponent.
///
/// Episodes end when the point is decided or the step limit runs out.
/// Starting states rotate through [`STARTING_STATES`] so the model sees
/// every combination of serving, ends and player seat.
#[derive(Debug, Clone)]
pub struct PongEnv<C, H, O = StandardObserver> {
    config: Config,
    env_config: EnvConfig,
    rng: GameRng,
    observer: O,
    opponent_policy: C,
    make_hook: HookFactory<H>,
    hook: H,
    state: MatchState,
    starting_state_index: usize,
    step_count: u32,
}

impl<C: ControllerPolicy, H: RewardHook> PongEnv<C, H, StandardObserver> {
    pub fn new(
        config: Config,
        env_config: EnvConfig,
        opponent_policy: C,
        make_hook: HookFactory<H>,
    ) -> Result<Self, EnvError> {
        let observer = StandardObserver::new(&config);
        Self::with_observer(config, env_config, observer, opponent_policy, make_hook)
    }
}

impl<C: ControllerPolicy, H: RewardHook, O: Observer> PongEnv<C, H, O> {
    /// Build an environment and run the first reset
    pub fn with_observer(
        config: Config,
        env_config: EnvConfig,
        observer: O,
        opponent_policy: C,
        make_hook: HookFactory<H>,
    ) -> Result<Self, EnvError> {
        let dt = env_config.delta_time;
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::InvalidDeltaTime(dt).into());
        }

        let mut rng = GameRng::new(env_config.seed);
        let setup = STARTING_STATES[0];
        let state = new_match(&config, setup, &mut rng)?;

        let mut env = Self {
            config,
            env_config,
            rng,
            observer,
            opponent_policy,
            make_hook,
            hook: make_hook(setup.player),
            state,
            starting_state_index: 0,
            step_count: 0,
        };
        env.reset()?;
        Ok(env)
    }

    /// Start a new episode from the next starting state
    pub fn reset(&mut self) -> Result<Observation, EnvError> {
        self.starting_state_index = (self.starting_state_index + 1) % STARTING_STATES.len();
        let setup = self.starting_state();

        self.opponent_policy.reset();
        self.state = new_match(&self.config, setup, &mut self.rng)?;
        self.hook = (self.make_hook)(setup.player);
        self.step_count = 0;

        log::debug!(
            "Reset to starting state {}: {} serving, {} tracked, reversed={}",
            self.starting_state_index,
            setup.server,
            setup.player,
            setup.positions_reversed
        );
        Ok(self.observation())
    }

    /// Reseed the match rng, then reset
    pub fn reset_with_seed(&mut self, seed: u64) -> Result<Observation, EnvError> {
        self.rng = GameRng::new(seed);
        self.reset()
    }

    /// Advance one tick with the model's raw `[button, direction]` action
    pub fn step(&mut self, action: [f32; 2]) -> Result<StepOutcome, EnvError> {
        let player = self.state.player;
        let opponent = self.state.opponent;
        let intents = Intents::new()
            .with(
                player,
                Intent::from_prediction(action, Params::MODEL_DIRECTION_SCALE),
            )
            .with(opponent, self.opponent_policy.intent(opponent, &self.state));

        self.hook.reset();
        let mut terminated = pong_core::step(
            &mut self.state,
            &self.config,
            &intents,
            self.env_config.delta_time,
            &mut self.hook,
        )?;
        self.step_count += 1;

        if self.step_count > self.env_config.max_steps {
            self.hook.end_episode(player, &self.state);
            terminated = true;
        }

        Ok(StepOutcome {
            observation: self.observation(),
            reward: self.hook.total_reward(),
            terminated,
            truncated: false,
            events: self.state.events,
        })
    }

    /// The tracked player's current view of the match
    pub fn observation(&self) -> Observation {
        self.observer.observe(self.state.player, &self.state)
    }

    pub fn observation_bounds(&self) -> ObservationBounds {
        self.observer.bounds()
    }

    pub fn action_bounds(&self) -> ActionBounds {
        ActionBounds::default()
    }

    pub fn starting_state(&self) -> MatchSetup {
        STARTING_STATES[self.starting_state_index]
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn env_config(&self) -> &EnvConfig {
        &self.env_config
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }
}
