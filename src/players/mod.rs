pub mod base;
pub mod llm;
pub mod random;

pub use base::{AccuracyGate, ChaserAnswer, CommentContext, Opponent, OpponentError};
pub use llm::LlmChaser;
pub use random::RandomChaser;
