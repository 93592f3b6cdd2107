use std::fmt::Write;

use crate::game::offers::OfferSet;
use crate::game::state::GameState;
use crate::questions::Question;
use crate::types::OfferChoice;

pub fn render_question(question: &Question) -> String {
    let mut out = format!("{}\n", question.question);
    for (label, text) in question.options.iter() {
        let _ = writeln!(out, "  {label}) {text}");
    }
    out
}

/// Board drawn top to bottom, far end first. Each row is a square's distance
/// from the bank.
pub fn render_board(state: &GameState) -> String {
    let top = state
        .config
        .chase
        .board_steps
        .max(state.chaser.board_position.unwrap_or(0))
        .max(state.player.board_position.unwrap_or(0));

    let mut out = String::new();
    for square in (1..=top).rev() {
        let mut marks = Vec::new();
        if state.chaser.board_position == Some(square) {
            marks.push(format!("[C] {}", state.chaser.name));
        }
        if state.player.board_position == Some(square) {
            marks.push(format!("[P] {}", state.player.name));
        }
        let _ = writeln!(out, "{square:>3} | {}", marks.join("  "));
    }
    let _ = writeln!(out, "    | BANK");
    out
}

pub fn render_offers(offers: &OfferSet) -> String {
    let mut out = String::new();
    for choice in [OfferChoice::Low, OfferChoice::Mid, OfferChoice::High] {
        let offer = offers.get(choice);
        let _ = writeln!(
            out,
            "  {:<5} {:>8}  ({} steps from the bank)",
            choice.to_string(),
            offer.money,
            offer.start_position
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::offers::Offer;
    use crate::questions::fixtures;

    #[test]
    fn question_lists_all_options() {
        let rendered = render_question(&fixtures::pool(1)[0]);
        assert_eq!(
            rendered,
            "Question number 1?\n  A) alpha 0\n  B) bravo 0\n  C) charlie 0\n  D) delta 0\n"
        );
    }

    #[test]
    fn board_marks_both_contestants() {
        let mut state = GameState::new(fixtures::pool(1), GameConfig::default())
            .with_names("Ada", "The Beast");
        state.player.board_position = Some(5);
        state.chaser.board_position = Some(7);

        let rendered = render_board(&state);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "  7 | [C] The Beast");
        assert_eq!(lines[2], "  5 | [P] Ada");
        assert_eq!(lines[7], "    | BANK");
    }

    #[test]
    fn offers_are_listed_low_to_high() {
        let offer = |money, start_position| Offer {
            money,
            start_position,
        };
        let offers = OfferSet {
            low: offer(1200, 4),
            mid: offer(3000, 5),
            high: offer(9000, 6),
            chosen: None,
        };
        let rendered = render_offers(&offers);
        let lines: Vec<_> = rendered.lines().collect();
        assert!(lines[0].contains("low") && lines[0].contains("1200"));
        assert!(lines[2].contains("high") && lines[2].contains("6 steps"));
    }
}
