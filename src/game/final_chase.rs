//! Final chase: two independent question runs compared by score.
//!
//! Completion is only evaluated on the chaser side, so callers must submit
//! the chaser's answers after the player's run, including one call once the
//! chaser's run is exhausted if the player finished last.

use std::cmp::Ordering;

use rand::Rng;
use tracing::{debug, info};

use crate::questions::Question;
use crate::types::{OptionLabel, PhaseKind, TieBreak};

use super::state::{FinalChaseRound, GameError, GamePhase, GameState, Winner, sample_questions};

pub fn start_final_chase<R: Rng + ?Sized>(
    state: &GameState,
    player_question_count: usize,
    chaser_question_count: usize,
    rng: &mut R,
) -> Result<GameState, GameError> {
    if !matches!(state.phase, GamePhase::FinalChase(_)) {
        return Err(state.wrong_phase(PhaseKind::FinalChase));
    }
    let player_questions = sample_questions(&state.question_pool, player_question_count, rng)?;
    let chaser_questions = sample_questions(&state.question_pool, chaser_question_count, rng)?;
    info!(
        player = player_questions.len(),
        chaser = chaser_questions.len(),
        "final chase started"
    );

    let mut next = state.clone();
    next.player.final_chase_score = 0;
    next.chaser.final_chase_score = 0;
    next.current_question = None;
    next.phase = GamePhase::FinalChase(Some(FinalChaseRound {
        player_questions,
        chaser_questions,
        player_cursor: 0,
        chaser_cursor: 0,
    }));
    Ok(next)
}

fn active_round(state: &GameState) -> Result<&FinalChaseRound, GameError> {
    match &state.phase {
        GamePhase::FinalChase(Some(round)) => Ok(round),
        GamePhase::FinalChase(None) => Err(GameError::FinalChaseNotStarted),
        _ => Err(state.wrong_phase(PhaseKind::FinalChase)),
    }
}

pub fn next_final_chase_player_question(state: &GameState) -> Option<&Question> {
    active_round(state).ok().and_then(FinalChaseRound::player_question)
}

pub fn next_final_chase_chaser_question(state: &GameState) -> Option<&Question> {
    active_round(state).ok().and_then(FinalChaseRound::chaser_question)
}

pub fn submit_final_chase_player_answer(
    state: &GameState,
    answer: &str,
) -> Result<GameState, GameError> {
    let round = active_round(state)?;
    let Some(question) = round.player_question() else {
        return Ok(state.clone());
    };
    let correct = question.is_correct(OptionLabel::normalize(answer));
    debug!(id = %question.id, correct, "final chase player answer");

    let mut round = round.clone();
    round.player_cursor += 1;
    let mut next = state.clone();
    if correct {
        next.player.final_chase_score += 1;
    }
    next.phase = GamePhase::FinalChase(Some(round));
    Ok(next)
}

/// Records the chaser's correctness for its pending question, then settles
/// the game if both runs are exhausted.
pub fn submit_final_chase_chaser_answer(
    state: &GameState,
    chaser_correct: bool,
) -> Result<GameState, GameError> {
    let mut round = active_round(state)?.clone();
    let mut next = state.clone();
    if round.chaser_cursor < round.chaser_questions.len() {
        if chaser_correct {
            next.chaser.final_chase_score += 1;
        }
        round.chaser_cursor += 1;
        debug!(chaser_correct, cursor = round.chaser_cursor, "final chase chaser answer");
    }

    if round.is_finished() {
        settle(&mut next);
    } else {
        next.phase = GamePhase::FinalChase(Some(round));
    }
    Ok(next)
}

fn settle(state: &mut GameState) {
    let player = state.player.final_chase_score;
    let chaser = state.chaser.final_chase_score;
    let winner = match player.cmp(&chaser) {
        Ordering::Greater => Winner::Player,
        Ordering::Less => Winner::Chaser,
        Ordering::Equal => match state.config.tie_break {
            TieBreak::ChaserWins => Winner::Chaser,
            TieBreak::PlayerWins => Winner::Player,
        },
    };

    let message = match winner {
        Winner::Player => format!(
            "{} wins the Final Chase {}-{} and takes home {}!",
            state.player.name, player, chaser, state.player.secured_cash
        ),
        Winner::Chaser => {
            state.player.secured_cash = 0;
            format!(
                "{} wins the Final Chase {}-{}. {} leaves with nothing.",
                state.chaser.name, chaser, player, state.player.name
            )
        }
    };
    info!(player, chaser, ?winner, "final chase settled");
    state.outcome_message = Some(message);
    state.phase = GamePhase::Completed { winner };
}
