use pong_core::{ControllerPolicy, Observation, Observer, RewardHook};
use rayon::prelude::*;

use crate::{EnvError, PongEnv, StepOutcome};

/// Step independent environments in parallel, one action each.
///
/// Outcomes come back in the order of `envs`. Terminated environments are
/// not reset here; call [`reset_batch`] or [`PongEnv::reset`] for those.
pub fn step_batch<C, H, O>(
    envs: &mut [PongEnv<C, H, O>],
    actions: &[[f32; 2]],
) -> Result<Vec<StepOutcome>, EnvError>
where
    C: ControllerPolicy + Send,
    H: RewardHook + Send,
    O: Observer + Send,
{
    if envs.len() != actions.len() {
        return Err(EnvError::ActionCount {
            expected: envs.len(),
            got: actions.len(),
        });
    }

    envs.par_iter_mut()
        .zip(actions.par_iter())
        .map(|(env, &action)| env.step(action))
        .collect()
}

/// Reset every environment in parallel
pub fn reset_batch<C, H, O>(envs: &mut [PongEnv<C, H, O>]) -> Result<Vec<Observation>, EnvError>
where
    C: ControllerPolicy + Send,
    H: RewardHook + Send,
    O: Observer + Send,
{
    envs.par_iter_mut().map(|env| env.reset()).collect()
}
