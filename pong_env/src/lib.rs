//! Episode driver for training a model against a scripted opponent.
//!
//! Wraps a `pong_core` match in a reset/step loop: each episode is one point,
//! rewards are reported per step, and many environments can be stepped in
//! parallel with [`step_batch`].

pub mod batch;
pub mod config;
pub mod env;
pub mod error;

pub use batch::*;
pub use config::*;
pub use env::*;
pub use error::*;
