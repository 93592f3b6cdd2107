#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod game;
pub mod llm;
pub mod players;
pub mod questions;
pub mod types;

pub use config::{ConfigLoader, GameConfig};
pub use game::{Game, GameError, GamePhase, GameState, Winner};
pub use players::{ChaserAnswer, Opponent};
pub use questions::{Question, QuestionBank};
pub use types::{OfferChoice, OptionLabel, PhaseKind};
