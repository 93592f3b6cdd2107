use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::players::{ChaserAnswer, CommentContext, Opponent};
use crate::questions::Question;
use crate::types::{OptionLabel, PhaseKind, SeedRole};

use super::offers::{OfferSet, generate_offers};
use super::state::{GameError, GamePhase, GameState, Winner};
use super::{cash_builder, chase, final_chase};

/// What happened on one chase question.
#[derive(Debug, Clone)]
pub struct ChaseStepReport {
    pub question: Question,
    pub player_choice: Option<OptionLabel>,
    pub player_correct: bool,
    pub chaser: ChaserAnswer,
    pub comment: Option<String>,
}

/// One session: owns the state, the seeded RNG and the opponent, and
/// sequences engine transitions one player action at a time.
pub struct Game<O> {
    pub seed: u64,
    pub id: Uuid,
    pub state: GameState,
    opponent: O,
    rng: StdRng,
}

impl<O: Opponent> Game<O> {
    pub fn new(question_pool: Vec<Question>, config: GameConfig, opponent: O) -> Self {
        let seed = config.seed;
        let chaser_name = opponent.name().to_string();
        let mut state = GameState::new(question_pool, config);
        state.chaser.name = chaser_name;
        Self {
            seed,
            id: Uuid::new_v4(),
            state,
            opponent,
            rng: StdRng::seed_from_u64(SeedRole::Game.derive(seed)),
        }
    }

    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.state.player.name = name.into();
        self
    }

    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    pub fn phase(&self) -> PhaseKind {
        self.state.phase_kind()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.state.winner()
    }

    pub fn outcome_message(&self) -> Option<&str> {
        self.state.outcome_message.as_deref()
    }

    pub fn start_cash_builder(&mut self) -> Result<(), GameError> {
        let _span = info_span!("game", id = %self.id).entered();
        let count = self.state.config.cash_builder_questions;
        self.state = cash_builder::start_cash_builder(&self.state, count, &mut self.rng)?;
        Ok(())
    }

    pub fn cash_builder_question(&self) -> Option<&Question> {
        cash_builder::current_cash_builder_question(&self.state)
    }

    /// Returns whether the answer scored.
    pub fn answer_cash_builder(&mut self, answer: &str) -> bool {
        let _span = info_span!("game", id = %self.id).entered();
        let before = self.state.player.correct_answers;
        self.state = cash_builder::submit_cash_builder_answer(&self.state, answer);
        self.state.player.correct_answers > before
    }

    /// Offers are drawn once per session and kept on the state, which also
    /// records the chosen one.
    pub fn offers(&mut self) -> Result<OfferSet, GameError> {
        if !matches!(self.state.phase, GamePhase::Chase(_)) {
            return Err(GameError::WrongPhase {
                expected: PhaseKind::Chase,
                actual: self.phase(),
            });
        }
        if let Some(offers) = self.state.offers {
            return Ok(offers);
        }
        let offers = generate_offers(&self.state, &mut self.rng);
        self.state.offers = Some(offers);
        Ok(offers)
    }

    pub fn choose_offer(&mut self, choice: &str) -> Result<(), GameError> {
        let _span = info_span!("game", id = %self.id).entered();
        let offers = self.offers()?;
        self.state = chase::apply_offer_choice(&self.state, &offers, choice)?;
        Ok(())
    }

    pub fn next_chase_question(&mut self) -> Result<&Question, GameError> {
        self.state = chase::next_chase_question(&self.state, &mut self.rng)?;
        self.state
            .current_question
            .as_ref()
            .ok_or(GameError::NoPendingQuestion)
    }

    /// Asks the opponent, then resolves the step. An opponent failure leaves
    /// the state untouched; a failed comment only drops the comment.
    pub fn play_chase_step(&mut self, answer: &str) -> Result<ChaseStepReport, GameError> {
        let _span = info_span!("game", id = %self.id).entered();
        let question = self
            .state
            .current_question
            .clone()
            .ok_or(GameError::NoPendingQuestion)?;
        let chaser = self.opponent.answer(&question)?;
        self.state = chase::process_chase_step(&self.state, answer, chaser.is_correct)?;

        let player_choice = OptionLabel::normalize(answer);
        let player_correct = question.is_correct(player_choice);
        let ctx = CommentContext {
            question: &question,
            player_choice,
            player_correct,
            chaser: &chaser,
        };
        let comment = match self.opponent.comment(&ctx) {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(error = %err, "skipping chaser commentary");
                None
            }
        };

        Ok(ChaseStepReport {
            question,
            player_choice,
            player_correct,
            chaser,
            comment,
        })
    }

    pub fn start_final_chase(&mut self) -> Result<(), GameError> {
        let _span = info_span!("game", id = %self.id).entered();
        let player = self.state.config.final_player_questions;
        let chaser = self.state.config.final_chaser_questions;
        self.state = final_chase::start_final_chase(&self.state, player, chaser, &mut self.rng)?;
        Ok(())
    }

    pub fn final_player_question(&self) -> Option<&Question> {
        final_chase::next_final_chase_player_question(&self.state)
    }

    pub fn final_chaser_question(&self) -> Option<&Question> {
        final_chase::next_final_chase_chaser_question(&self.state)
    }

    /// Returns whether the answer scored.
    pub fn answer_final_chase(&mut self, answer: &str) -> Result<bool, GameError> {
        let before = self.state.player.final_chase_score;
        self.state = final_chase::submit_final_chase_player_answer(&self.state, answer)?;
        Ok(self.state.player.final_chase_score > before)
    }

    /// Plays the chaser's next final-chase question. With the chaser's run
    /// exhausted this only runs the completion check and returns `None`.
    pub fn play_final_chaser(&mut self) -> Result<Option<ChaserAnswer>, GameError> {
        let _span = info_span!("game", id = %self.id).entered();
        let answer = match self.final_chaser_question().cloned() {
            Some(question) => Some(self.opponent.answer(&question)?),
            None => None,
        };
        let correct = answer.as_ref().is_some_and(|a| a.is_correct);
        self.state = final_chase::submit_final_chase_chaser_answer(&self.state, correct)?;
        Ok(answer)
    }

    /// Plays the chaser's remaining run and settles the game.
    pub fn finish_final_chase(&mut self) -> Result<Vec<ChaserAnswer>, GameError> {
        let mut answers = Vec::new();
        while self.phase() == PhaseKind::FinalChase {
            match self.play_final_chaser()? {
                Some(answer) => answers.push(answer),
                // exhausted and still unsettled: the player has questions left
                None => break,
            }
        }
        if let Some(message) = self.outcome_message() {
            info!(id = %self.id, outcome = message, "game over");
        }
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::personas;
    use crate::players::{OpponentError, RandomChaser};
    use crate::questions::fixtures;
    use crate::types::OfferChoice;

    fn game(p_correct: f64) -> Game<RandomChaser> {
        let chaser = RandomChaser::new(personas::by_key("professor").unwrap(), p_correct, 9);
        Game::new(fixtures::pool(12), GameConfig::default(), chaser)
    }

    fn answer_all_cash_builder(game: &mut Game<RandomChaser>) {
        while let Some(q) = game.cash_builder_question() {
            let answer = q.correct_option.to_string();
            assert!(game.answer_cash_builder(&answer));
        }
    }

    #[test]
    fn chaser_name_comes_from_opponent() {
        let game = game(0.5).with_player_name("Ada");
        assert_eq!(game.state.chaser.name, "The Professor");
        assert_eq!(game.state.player.name, "Ada");
    }

    #[test]
    fn offers_are_stable_until_chosen() {
        let mut game = game(0.5);
        game.start_cash_builder().unwrap();
        assert!(matches!(game.offers(), Err(GameError::WrongPhase { .. })));
        answer_all_cash_builder(&mut game);
        let first = game.offers().unwrap();
        assert_eq!(game.offers().unwrap(), first);
        assert_eq!(first.mid.money, 5000);

        game.choose_offer("high").unwrap();
        let after = game.offers().unwrap();
        assert_eq!(after.chosen, Some(OfferChoice::High));
        assert_eq!(after.high, first.high);
        assert_eq!(game.state.offers, Some(after));
    }

    #[test]
    fn hopeless_chaser_lets_perfect_player_bank() {
        let mut game = game(0.0);
        game.start_cash_builder().unwrap();
        answer_all_cash_builder(&mut game);
        game.choose_offer("high").unwrap();
        let banked = game.offers().unwrap().high.money;

        while game.phase() == PhaseKind::Chase {
            let answer = game.next_chase_question().unwrap().correct_option.to_string();
            let report = game.play_chase_step(&answer).unwrap();
            assert!(report.player_correct);
            assert!(!report.chaser.is_correct);
            assert!(report.comment.is_some());
        }
        assert_eq!(game.phase(), PhaseKind::FinalChase);
        assert_eq!(game.state.player.secured_cash, banked);

        game.start_final_chase().unwrap();
        while let Some(q) = game.final_player_question() {
            let answer = q.correct_option.to_string();
            assert!(game.answer_final_chase(&answer).unwrap());
        }
        let answers = game.finish_final_chase().unwrap();
        assert_eq!(answers.len(), 5);
        assert_eq!(game.winner(), Some(Winner::Player));
        assert!(game.outcome_message().is_some());
    }

    #[test]
    fn finish_waits_for_unanswered_player_questions() {
        let mut game = game(1.0);
        game.state.phase = GamePhase::FinalChase(None);
        game.start_final_chase().unwrap();
        game.answer_final_chase("A").unwrap();

        let answers = game.finish_final_chase().unwrap();
        assert_eq!(answers.len(), 5);
        assert_eq!(game.phase(), PhaseKind::FinalChase);

        while game.final_player_question().is_some() {
            game.answer_final_chase("A").unwrap();
        }
        assert!(game.finish_final_chase().unwrap().is_empty());
        assert_eq!(game.winner(), Some(Winner::Chaser));
    }

    struct BrokenChaser;

    impl Opponent for BrokenChaser {
        fn name(&self) -> &str {
            "Broken"
        }

        fn answer(&mut self, _question: &Question) -> Result<ChaserAnswer, OpponentError> {
            Err(OpponentError::Unparseable("static".into()))
        }

        fn comment(&mut self, _ctx: &CommentContext<'_>) -> Result<String, OpponentError> {
            Err(OpponentError::Unparseable("static".into()))
        }
    }

    #[test]
    fn opponent_failure_leaves_state_unchanged() {
        let mut game = Game::new(fixtures::pool(4), GameConfig::default(), BrokenChaser);
        game.start_cash_builder().unwrap();
        while game.cash_builder_question().is_some() {
            game.answer_cash_builder("A");
        }
        game.choose_offer("mid").unwrap();
        let pending = game.next_chase_question().unwrap().clone();

        let err = game.play_chase_step(&pending.correct_option.to_string());
        assert!(matches!(err, Err(GameError::Opponent(_))));
        assert_eq!(game.state.current_question, Some(pending));
        assert_eq!(game.state.player.board_position, Some(5));
        assert_eq!(game.state.chaser.board_position, Some(7));
    }

    /// Answers every question with A and never manages a remark.
    struct MuteChaser;

    impl Opponent for MuteChaser {
        fn name(&self) -> &str {
            "Mute"
        }

        fn answer(&mut self, question: &Question) -> Result<ChaserAnswer, OpponentError> {
            Ok(ChaserAnswer {
                natural_choice: OptionLabel::A,
                chosen_option: OptionLabel::A,
                is_correct: question.correct_option == OptionLabel::A,
                raw_response: "A".into(),
            })
        }

        fn comment(&mut self, _ctx: &CommentContext<'_>) -> Result<String, OpponentError> {
            Err(OpponentError::Unparseable("silence".into()))
        }
    }

    #[test]
    fn failed_commentary_still_counts_the_step() {
        let mut game = Game::new(fixtures::pool(4), GameConfig::default(), MuteChaser);
        game.start_cash_builder().unwrap();
        while game.cash_builder_question().is_some() {
            game.answer_cash_builder("A");
        }
        game.choose_offer("mid").unwrap();
        let answer = game.next_chase_question().unwrap().correct_option.to_string();

        let report = game.play_chase_step(&answer).unwrap();
        assert!(report.comment.is_none());
        assert!(report.player_correct);
        assert_eq!(game.state.player.board_position, Some(4));
        assert_eq!(game.phase(), PhaseKind::Chase);
        assert!(game.state.current_question.is_none());
    }
}
