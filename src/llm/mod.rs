pub mod client;
pub mod personas;
pub mod prompts;

pub use client::{ChatClient, DEFAULT_MODEL, LlmError, OpenAiClient};
pub use personas::Persona;
