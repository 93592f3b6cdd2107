use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::llm::Persona;
use crate::players::{AccuracyGate, ChaserAnswer, CommentContext, Opponent, OpponentError};
use crate::questions::Question;
use crate::types::OptionLabel;

/// Offline chaser: guesses uniformly and speaks from canned lines.
#[derive(Debug, Clone)]
pub struct RandomChaser {
    persona: &'static Persona,
    gate: AccuracyGate,
    rng: StdRng,
}

impl RandomChaser {
    pub fn new(persona: &'static Persona, p_correct: f64, seed: u64) -> Self {
        Self {
            persona,
            gate: AccuracyGate::new(p_correct),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn persona(&self) -> &'static Persona {
        self.persona
    }
}

impl Opponent for RandomChaser {
    fn name(&self) -> &str {
        self.persona.name
    }

    fn answer(&mut self, question: &Question) -> Result<ChaserAnswer, OpponentError> {
        let natural = *OptionLabel::ALL
            .choose(&mut self.rng)
            .unwrap_or(&OptionLabel::A);
        let raw = format!("Answer: {natural}");
        Ok(self.gate.resolve(question, natural, raw, &mut self.rng))
    }

    fn comment(&mut self, ctx: &CommentContext<'_>) -> Result<String, OpponentError> {
        let line = canned_line(self.persona.key, ctx.chaser.is_correct, ctx.player_correct);
        Ok(format!(
            "{line} The answer was {}) {}.",
            ctx.question.correct_option,
            ctx.question.correct_text()
        ))
    }
}

fn canned_line(persona: &str, chaser_correct: bool, player_correct: bool) -> &'static str {
    match (persona, chaser_correct, player_correct) {
        ("beast", true, false) => "Too slow. I'm coming for you.",
        ("beast", true, true) => "You got it, but so did I. Keep running.",
        ("beast", false, _) => "A rotten question. It won't happen twice.",
        ("trickster", true, _) => "Easy as pie, and I ate the pie.",
        ("trickster", false, _) => "Well, even foxes trip over their own tails.",
        ("machine", true, _) => "Result: correct. Distance reduced.",
        ("machine", false, _) => "Error logged. Recalibrating.",
        (_, true, _) => "As expected, the facts were on my side.",
        (_, false, _) => "An interesting exception to the rule.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::personas;
    use crate::questions::fixtures;

    fn chaser(p: f64) -> RandomChaser {
        RandomChaser::new(personas::by_key("machine").unwrap(), p, 4)
    }

    #[test]
    fn raw_response_names_the_natural_choice() {
        let q = &fixtures::pool(1)[0];
        let answer = chaser(0.5).answer(q).unwrap();
        assert_eq!(answer.raw_response, format!("Answer: {}", answer.natural_choice));
    }

    #[test]
    fn accuracy_gate_drives_correctness() {
        let q = &fixtures::pool(1)[0];
        let mut sure = chaser(1.0);
        assert!((0..10).all(|_| sure.answer(q).unwrap().is_correct));
    }

    #[test]
    fn comment_mentions_correct_answer() {
        let q = &fixtures::pool(2)[1];
        let mut chaser = chaser(1.0);
        let answer = chaser.answer(q).unwrap();
        let ctx = CommentContext {
            question: q,
            player_choice: Some(OptionLabel::A),
            player_correct: false,
            chaser: &answer,
        };
        let comment = chaser.comment(&ctx).unwrap();
        assert_eq!(
            comment,
            "Result: correct. Distance reduced. The answer was B) bravo 1."
        );
        assert_eq!(chaser.name(), "The Machine");
    }
}
