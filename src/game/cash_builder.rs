//! Cash builder: a solo, untimed run of questions that sets the cash pot.

use rand::Rng;
use tracing::{debug, info};

use crate::questions::Question;
use crate::types::{OptionLabel, PhaseKind};

use super::state::{
    CashBuilderRound, ChaseRound, GameError, GamePhase, GameState, sample_questions,
};

pub fn start_cash_builder<R: Rng + ?Sized>(
    state: &GameState,
    question_count: usize,
    rng: &mut R,
) -> Result<GameState, GameError> {
    if !matches!(state.phase, GamePhase::CashBuilder(_)) {
        return Err(state.wrong_phase(PhaseKind::CashBuilder));
    }
    let questions = sample_questions(&state.question_pool, question_count, rng)?;
    info!(questions = questions.len(), "cash builder started");

    let mut next = state.clone();
    next.player.correct_answers = 0;
    next.current_question = questions.first().cloned();
    next.phase = if questions.is_empty() {
        // zero-length round: nothing to answer
        GamePhase::Chase(ChaseRound::default())
    } else {
        GamePhase::CashBuilder(CashBuilderRound {
            questions,
            cursor: 0,
        })
    };
    Ok(next)
}

pub fn current_cash_builder_question(state: &GameState) -> Option<&Question> {
    match &state.phase {
        GamePhase::CashBuilder(round) => round.current(),
        _ => None,
    }
}

/// Scores one answer and advances. After the last question the game moves
/// to the chase; any call once the round is exhausted returns the state as is.
pub fn submit_cash_builder_answer(state: &GameState, answer: &str) -> GameState {
    let GamePhase::CashBuilder(round) = &state.phase else {
        return state.clone();
    };
    let Some(question) = round.current() else {
        return state.clone();
    };

    let normalized = OptionLabel::normalize(answer);
    let correct = question.is_correct(normalized);
    debug!(id = %question.id, answer = ?normalized, correct, "cash builder answer");

    let mut next = state.clone();
    if correct {
        next.player.correct_answers += 1;
    }

    let mut round = round.clone();
    round.cursor += 1;
    match round.current().cloned() {
        Some(upcoming) => {
            next.current_question = Some(upcoming);
            next.phase = GamePhase::CashBuilder(round);
        }
        None => {
            info!(
                correct = next.player.correct_answers,
                "cash builder finished, moving to chase"
            );
            next.current_question = None;
            next.phase = GamePhase::Chase(ChaseRound::default());
        }
    }
    next
}
