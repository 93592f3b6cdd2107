mod common;

use std::collections::HashSet;

use chaser_rs::config::GameConfig;
use chaser_rs::game::{
    ChaseRound, FinalChaseRound, GamePhase, GameState, Winner, apply_offer_choice,
    current_cash_builder_question, generate_offers, next_chase_question,
    next_final_chase_chaser_question, next_final_chase_player_question, process_chase_step,
    start_cash_builder, start_final_chase, submit_cash_builder_answer,
    submit_final_chase_chaser_answer, submit_final_chase_player_answer,
};
use chaser_rs::types::PhaseKind;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn answer_cash_builder_correctly(mut state: GameState) -> GameState {
    while let Some(question) = current_cash_builder_question(&state) {
        let answer = question.correct_option.to_string();
        state = submit_cash_builder_answer(&state, &answer);
    }
    state
}

#[test]
fn perfect_cash_builder_earns_five_thousand() {
    let mut rng = StdRng::seed_from_u64(1234);
    let state = GameState::new(common::pool(10), GameConfig::default());

    let state = start_cash_builder(&state, 5, &mut rng).unwrap();
    let state = answer_cash_builder_correctly(state);

    assert_eq!(state.player.correct_answers, 5);
    assert_eq!(state.phase_kind(), PhaseKind::Chase);
    assert!(state.current_question.is_none());
    let offers = generate_offers(&state, &mut rng);
    assert_eq!(offers.mid.money, 5000);
}

#[test]
fn low_offer_places_both_contestants() {
    let mut rng = StdRng::seed_from_u64(5);
    let config = GameConfig::default();
    let distance = config.chase.chaser_distance;
    let state = GameState::new(common::pool(10), config);
    let state = answer_cash_builder_correctly(start_cash_builder(&state, 5, &mut rng).unwrap());

    let offers = generate_offers(&state, &mut rng);
    let state = apply_offer_choice(&state, &offers, "low").unwrap();

    assert_eq!(state.player.board_position, Some(offers.low.start_position));
    assert_eq!(
        state.chaser.board_position,
        Some(offers.mid.start_position + distance)
    );
    assert_eq!(state.offers.and_then(|o| o.chosen_offer()), Some(offers.low));
}

#[test]
fn banking_and_catching_on_the_same_step_favours_the_player() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut state = GameState::new(common::pool(3), GameConfig::default());
    state.phase = GamePhase::Chase(ChaseRound::default());
    let offers = generate_offers(&state, &mut rng);
    let mut state = apply_offer_choice(&state, &offers, "mid").unwrap();
    state.player.board_position = Some(1);
    state.chaser.board_position = Some(1);

    let state = next_chase_question(&state, &mut rng).unwrap();
    let answer = state.current_question.as_ref().unwrap().correct_option.to_string();
    let state = process_chase_step(&state, &answer, true).unwrap();

    assert_eq!(state.player.board_position, Some(0));
    assert_eq!(state.chaser.board_position, Some(0));
    assert_eq!(state.phase_kind(), PhaseKind::FinalChase);
    assert_eq!(state.player.secured_cash, offers.mid.money);
    assert!(state.outcome_message.is_some());
}

#[test]
fn wrong_answers_let_the_chaser_catch_up() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut state = GameState::new(common::pool(6), GameConfig::default());
    state.phase = GamePhase::Chase(ChaseRound::default());
    let offers = generate_offers(&state, &mut rng);
    let mut state = apply_offer_choice(&state, &offers, "high").unwrap();

    let mut steps = 0;
    while state.phase_kind() == PhaseKind::Chase {
        state = next_chase_question(&state, &mut rng).unwrap();
        let wrong = common::wrong_label(state.current_question.as_ref().unwrap());
        state = process_chase_step(&state, &wrong.to_string(), true).unwrap();
        steps += 1;
    }

    // high offer starts one square ahead of the chaser
    assert_eq!(steps, 1);
    assert_eq!(state.winner(), Some(Winner::Chaser));
    assert_eq!(state.player.secured_cash, 0);
    assert!(state.outcome_message.unwrap().contains("caught"));
}

#[test]
fn chase_questions_repeat_once_the_pool_is_used_up() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut state = GameState::new(common::pool(3), GameConfig::default());
    state.phase = GamePhase::Chase(ChaseRound::default());
    let offers = generate_offers(&state, &mut rng);
    let mut state = apply_offer_choice(&state, &offers, "mid").unwrap();

    let mut seen = HashSet::new();
    for _ in 0..3 {
        state = next_chase_question(&state, &mut rng).unwrap();
        seen.insert(state.current_question.clone().unwrap().id);
    }
    assert_eq!(seen.len(), 3);

    for _ in 0..5 {
        state = next_chase_question(&state, &mut rng).unwrap();
        assert!(seen.contains(&state.current_question.as_ref().unwrap().id));
    }
}

#[test]
fn final_chase_two_against_one_goes_to_the_player() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = GameState::new(common::pool(8), GameConfig::default());
    state.phase = GamePhase::FinalChase(None);
    state.player.secured_cash = 4000;

    let mut state = start_final_chase(&state, 2, 2, &mut rng).unwrap();
    while let Some(question) = next_final_chase_player_question(&state) {
        let answer = question.correct_option.to_string();
        state = submit_final_chase_player_answer(&state, &answer).unwrap();
    }
    assert_eq!(state.phase_kind(), PhaseKind::FinalChase);

    for correct in [true, false] {
        assert!(next_final_chase_chaser_question(&state).is_some());
        state = submit_final_chase_chaser_answer(&state, correct).unwrap();
    }

    assert_eq!(state.phase_kind(), PhaseKind::Completed);
    assert_eq!(state.winner(), Some(Winner::Player));
    assert_eq!(state.player.final_chase_score, 2);
    assert_eq!(state.chaser.final_chase_score, 1);
    let message = state.outcome_message.unwrap();
    assert!(message.contains("wins the Final Chase 2-1"), "{message}");
    assert!(message.contains("4000"));
}

#[test]
fn chaser_finishing_first_settles_on_a_trailing_call() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut state = GameState::new(common::pool(8), GameConfig::default());
    state.phase = GamePhase::FinalChase(None);
    let mut state = start_final_chase(&state, 1, 1, &mut rng).unwrap();

    state = submit_final_chase_chaser_answer(&state, false).unwrap();
    let answer = next_final_chase_player_question(&state)
        .unwrap()
        .correct_option
        .to_string();
    state = submit_final_chase_player_answer(&state, &answer).unwrap();
    assert!(matches!(
        state.phase,
        GamePhase::FinalChase(Some(FinalChaseRound { .. }))
    ));

    state = submit_final_chase_chaser_answer(&state, true).unwrap();
    assert_eq!(state.chaser.final_chase_score, 0);
    assert_eq!(state.winner(), Some(Winner::Player));
}
