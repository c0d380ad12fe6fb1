//! Core engine types: players, configuration, actions, state, RNG.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{DrawPolicy, GameConfig};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, TurnPhase};
