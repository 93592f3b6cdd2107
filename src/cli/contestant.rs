use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::game::game::Game;
use crate::game::state::GameError;
use crate::players::Opponent;
use crate::questions::Question;
use crate::types::{OfferChoice, PhaseKind};

/// Stand-in for a human: answers correctly with probability `accuracy`,
/// otherwise picks one of the wrong labels.
#[derive(Debug, Clone)]
pub struct SimulatedContestant {
    accuracy: f64,
    rng: StdRng,
}

impl SimulatedContestant {
    pub fn new(accuracy: f64, seed: u64) -> Self {
        let accuracy = if accuracy.is_nan() { 0.0 } else { accuracy.clamp(0.0, 1.0) };
        Self {
            accuracy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn answer(&mut self, question: &Question) -> String {
        let correct = question.correct_option;
        let label = if self.rng.gen_bool(self.accuracy) {
            correct
        } else {
            correct.others().choose(&mut self.rng).unwrap_or(correct)
        };
        label.to_string()
    }
}

/// Plays a whole game without input, taking `offer` when the chase begins.
pub fn autoplay<O: Opponent>(
    game: &mut Game<O>,
    contestant: &mut SimulatedContestant,
    offer: OfferChoice,
) -> Result<(), GameError> {
    game.start_cash_builder()?;
    while let Some(question) = game.cash_builder_question() {
        let answer = contestant.answer(question);
        game.answer_cash_builder(&answer);
    }

    game.choose_offer(&offer.to_string())?;
    while game.phase() == PhaseKind::Chase {
        let answer = contestant.answer(game.next_chase_question()?);
        game.play_chase_step(&answer)?;
    }
    if game.phase() != PhaseKind::FinalChase {
        return Ok(());
    }

    game.start_final_chase()?;
    while let Some(question) = game.final_player_question() {
        let answer = contestant.answer(question);
        game.answer_final_chase(&answer)?;
    }
    game.finish_final_chase()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::state::Winner;
    use crate::llm::personas;
    use crate::players::RandomChaser;
    use crate::questions::fixtures;

    #[test]
    fn perfect_contestant_always_answers_correctly() {
        let mut contestant = SimulatedContestant::new(1.0, 3);
        for q in fixtures::pool(8) {
            assert_eq!(contestant.answer(&q), q.correct_option.to_string());
        }
    }

    #[test]
    fn hopeless_contestant_never_does() {
        let mut contestant = SimulatedContestant::new(0.0, 3);
        for q in fixtures::pool(8) {
            assert_ne!(contestant.answer(&q), q.correct_option.to_string());
        }
    }

    #[test]
    fn autoplay_reaches_completion() {
        for seed in 0..20 {
            let chaser = RandomChaser::new(personas::by_key("beast").unwrap(), 0.75, seed);
            let config = GameConfig::default().with_seed(seed);
            let mut game = Game::new(fixtures::pool(20), config, chaser);
            let mut contestant = SimulatedContestant::new(0.6, seed);
            autoplay(&mut game, &mut contestant, OfferChoice::Low).unwrap();
            assert_eq!(game.phase(), PhaseKind::Completed);
            if game.winner() == Some(Winner::Chaser) {
                assert_eq!(game.state.player.secured_cash, 0);
            }
        }
    }
}
