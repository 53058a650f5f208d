use crate::{
    ControllerPolicy, Intent, MatchState, Observation, Observer, Params, PlayerId,
    StandardObserver,
};

/// External model inference: observation in, `[button, direction]` out
pub trait Predictor {
    fn predict(&mut self, observation: &Observation) -> [f32; 2];
}

impl<F> Predictor for F
where
    F: FnMut(&Observation) -> [f32; 2],
{
    fn predict(&mut self, observation: &Observation) -> [f32; 2] {
        self(observation)
    }
}

/// Plays whatever a trained model predicts
#[derive(Debug, Clone)]
pub struct ModelPolicy<P, O = StandardObserver> {
    predictor: P,
    observer: O,
    direction_scale: f32,
}

impl<P: Predictor> ModelPolicy<P, StandardObserver> {
    pub fn new(predictor: P, observer: StandardObserver) -> Self {
        Self::with_observer(predictor, observer)
    }
}

impl<P: Predictor, O: Observer> ModelPolicy<P, O> {
    /// Use a custom observer when the model was trained on a different encoding
    pub fn with_observer(predictor: P, observer: O) -> Self {
        Self {
            predictor,
            observer,
            direction_scale: Params::MODEL_DIRECTION_SCALE,
        }
    }

    pub fn direction_scale(mut self, scale: f32) -> Self {
        self.direction_scale = scale;
        self
    }
}

impl<P: Predictor, O: Observer> ControllerPolicy for ModelPolicy<P, O> {
    fn reset(&mut self) {}

    fn intent(&mut self, player: PlayerId, state: &MatchState) -> Intent {
        let observation = self.observer.observe(player, state);
        let prediction = self.predictor.predict(&observation);
        Intent::from_prediction(prediction, self.direction_scale)
    }
}
