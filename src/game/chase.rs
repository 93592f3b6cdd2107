//! Head-to-head board race.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::types::{OfferChoice, OptionLabel, PhaseKind};

use super::offers::OfferSet;
use super::state::{ChaseRound, GameError, GamePhase, GameState, Winner};

/// Places both contestants on the board. The chaser always starts
/// `chaser_distance` steps behind the mid-offer square, whichever offer
/// was taken.
pub fn apply_offer_choice(
    state: &GameState,
    offers: &OfferSet,
    choice: &str,
) -> Result<GameState, GameError> {
    let GamePhase::Chase(round) = &state.phase else {
        return Err(state.wrong_phase(PhaseKind::Chase));
    };
    if state.player.board_position.is_some() {
        return Err(GameError::ChaseAlreadyStarted);
    }

    let choice = OfferChoice::resolve(choice);
    let offer = offers.get(choice);
    let chaser_start = offers
        .mid
        .start_position
        .saturating_add(state.config.chase.chaser_distance);

    let mut next = state.clone();
    next.offers = Some(OfferSet {
        chosen: Some(choice),
        ..*offers
    });
    next.player.board_position = Some(offer.start_position);
    next.chaser.board_position = Some(chaser_start);
    next.current_question = None;
    next.phase = GamePhase::Chase(round.clone());
    info!(
        %choice,
        money = offer.money,
        player = offer.start_position,
        chaser = chaser_start,
        "offer chosen, chase begins"
    );
    Ok(next)
}

/// Draws a question not yet seen this round. Once every pool question has
/// been used, any question may repeat.
pub fn next_chase_question<R: Rng + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> Result<GameState, GameError> {
    let GamePhase::Chase(round) = &state.phase else {
        return Err(state.wrong_phase(PhaseKind::Chase));
    };
    if state.player.board_position.is_none() {
        return Err(GameError::ChaseNotStarted);
    }
    if state.question_pool.is_empty() {
        return Err(GameError::EmptyPool);
    }

    let fresh: Vec<_> = state
        .question_pool
        .iter()
        .filter(|q| !round.used_question_ids.contains(&q.id))
        .collect();
    let drawn = if fresh.is_empty() {
        debug!("chase pool exhausted, allowing repeats");
        state.question_pool.choose(rng)
    } else {
        fresh.choose(rng).copied()
    };
    let drawn = drawn.ok_or(GameError::EmptyPool)?.clone();

    let mut round: ChaseRound = round.clone();
    round.used_question_ids.insert(drawn.id.clone());

    let mut next = state.clone();
    debug!(id = %drawn.id, used = round.used_question_ids.len(), "chase question drawn");
    next.current_question = Some(drawn);
    next.phase = GamePhase::Chase(round);
    Ok(next)
}

/// Resolves one chase question. A player reaching the bank wins the round
/// even if the chaser catches up on the same question.
pub fn process_chase_step(
    state: &GameState,
    player_answer: &str,
    chaser_correct: bool,
) -> Result<GameState, GameError> {
    if !matches!(state.phase, GamePhase::Chase(_)) {
        return Err(state.wrong_phase(PhaseKind::Chase));
    }
    if state.player.board_position.is_none() {
        return Err(GameError::ChaseNotStarted);
    }
    let question = state
        .current_question
        .as_ref()
        .ok_or(GameError::NoPendingQuestion)?;

    let player_correct = question.is_correct(OptionLabel::normalize(player_answer));

    let mut next = state.clone();
    if player_correct {
        next.player.step_toward_bank();
    }
    if chaser_correct {
        next.chaser.step_toward_bank();
    }
    next.current_question = None;
    debug!(
        id = %question.id,
        player_correct,
        chaser_correct,
        player = ?next.player.board_position,
        chaser = ?next.chaser.board_position,
        "chase step"
    );

    if next.player.has_banked() {
        let banked = next
            .offers
            .and_then(|offers| offers.chosen_offer())
            .map(|offer| offer.money)
            .unwrap_or(0);
        next.player.secured_cash = banked;
        next.phase = GamePhase::FinalChase(None);
        next.outcome_message = Some(format!(
            "{} reached the bank with {} secured. On to the Final Chase!",
            next.player.name, banked
        ));
        info!(banked, "player reached the bank");
    } else if next.chaser.has_caught(&next.player) {
        next.player.secured_cash = 0;
        next.phase = GamePhase::Completed {
            winner: Winner::Chaser,
        };
        next.outcome_message = Some(format!(
            "{} caught {}. Game over, nothing banked.",
            next.chaser.name, next.player.name
        ));
        info!("player caught by the chaser");
    }
    Ok(next)
}
