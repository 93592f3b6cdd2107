use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::llm::prompts::{QUIZ_SYSTEM_PROMPT, comment_prompt, parse_answer, question_prompt};
use crate::llm::{ChatClient, Persona};
use crate::players::{AccuracyGate, ChaserAnswer, CommentContext, Opponent, OpponentError};
use crate::questions::Question;

/// Chaser that asks a language model for its pick, then lets the accuracy
/// gate decide whether the pick counts as correct.
pub struct LlmChaser<C> {
    client: C,
    persona: &'static Persona,
    gate: AccuracyGate,
    rng: StdRng,
}

impl<C: ChatClient> LlmChaser<C> {
    pub fn new(client: C, persona: &'static Persona, p_correct: f64, seed: u64) -> Self {
        Self {
            client,
            persona,
            gate: AccuracyGate::new(p_correct),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn persona(&self) -> &'static Persona {
        self.persona
    }
}

impl<C: ChatClient> Opponent for LlmChaser<C> {
    fn name(&self) -> &str {
        self.persona.name
    }

    fn answer(&mut self, question: &Question) -> Result<ChaserAnswer, OpponentError> {
        let raw = self
            .client
            .chat(QUIZ_SYSTEM_PROMPT, &question_prompt(question))?;
        let natural = parse_answer(&raw).ok_or_else(|| OpponentError::Unparseable(raw.clone()))?;
        debug!(id = %question.id, %natural, "llm chaser picked");
        Ok(self.gate.resolve(question, natural, raw, &mut self.rng))
    }

    fn comment(&mut self, ctx: &CommentContext<'_>) -> Result<String, OpponentError> {
        let reply = self
            .client
            .chat(self.persona.full_description, &comment_prompt(ctx))?;
        Ok(reply.trim().to_string())
    }
}
