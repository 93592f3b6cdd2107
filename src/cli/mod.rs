pub mod contestant;
pub mod display;
pub mod players;
pub mod prompt;
pub mod session;
pub mod stats;

pub use contestant::{SimulatedContestant, autoplay};
pub use players::{CLI_CHASERS, ChaserInstance, ChaserSetupError, create_chaser, print_chaser_help};
pub use prompt::Prompt;
pub use session::{SessionError, play_session};
pub use stats::{SimulationStats, StatisticsAccumulator};
