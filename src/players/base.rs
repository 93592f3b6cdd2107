use rand::Rng;
use rand::seq::IteratorRandom;

use crate::llm::LlmError;
use crate::questions::Question;
use crate::types::OptionLabel;

#[derive(Debug, thiserror::Error)]
pub enum OpponentError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("could not find an answer label in reply: {0:?}")]
    Unparseable(String),
}

/// The chaser's answer. `natural_choice` is what the opponent actually
/// picked; `chosen_option` and `is_correct` come from the accuracy gate and
/// are what the game scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaserAnswer {
    pub natural_choice: OptionLabel,
    pub chosen_option: OptionLabel,
    pub is_correct: bool,
    pub raw_response: String,
}

/// What the chaser knows when commenting on a finished chase question.
#[derive(Debug, Clone, Copy)]
pub struct CommentContext<'a> {
    pub question: &'a Question,
    pub player_choice: Option<OptionLabel>,
    pub player_correct: bool,
    pub chaser: &'a ChaserAnswer,
}

pub trait Opponent {
    fn name(&self) -> &str;

    fn answer(&mut self, question: &Question) -> Result<ChaserAnswer, OpponentError>;

    fn comment(&mut self, ctx: &CommentContext<'_>) -> Result<String, OpponentError>;
}

/// Decides mechanical correctness independently of the natural pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyGate {
    p_correct: f64,
}

impl AccuracyGate {
    pub fn new(p_correct: f64) -> Self {
        let p_correct = if p_correct.is_nan() { 0.0 } else { p_correct.clamp(0.0, 1.0) };
        Self { p_correct }
    }

    pub fn p_correct(&self) -> f64 {
        self.p_correct
    }

    pub fn resolve<R: Rng + ?Sized>(
        &self,
        question: &Question,
        natural_choice: OptionLabel,
        raw_response: String,
        rng: &mut R,
    ) -> ChaserAnswer {
        let correct = question.correct_option;
        let (chosen_option, is_correct) = if rng.gen_bool(self.p_correct) {
            (correct, true)
        } else {
            // others() always yields three labels
            let wrong = correct.others().choose(rng).unwrap_or(correct);
            (wrong, wrong == correct)
        };
        ChaserAnswer {
            natural_choice,
            chosen_option,
            is_correct,
            raw_response,
        }
    }
}
