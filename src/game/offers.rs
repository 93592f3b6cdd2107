use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{ChaseRules, OfferRules};
use crate::types::OfferChoice;

use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub money: u32,
    /// Steps from the bank the player starts on.
    pub start_position: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferSet {
    pub low: Offer,
    pub mid: Offer,
    pub high: Offer,
    pub chosen: Option<OfferChoice>,
}

impl OfferSet {
    pub fn get(&self, choice: OfferChoice) -> Offer {
        match choice {
            OfferChoice::Low => self.low,
            OfferChoice::Mid => self.mid,
            OfferChoice::High => self.high,
        }
    }

    pub fn chosen_offer(&self) -> Option<Offer> {
        self.chosen.map(|choice| self.get(choice))
    }
}

/// Offers for the score the cash builder left in `state`. Reads only.
pub fn generate_offers<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> OfferSet {
    offers_for_score(
        state.player.correct_answers,
        &state.config.offers,
        &state.config.chase,
        rng,
    )
}

pub fn offers_for_score<R: Rng + ?Sized>(
    correct_answers: u32,
    rules: &OfferRules,
    board: &ChaseRules,
    rng: &mut R,
) -> OfferSet {
    let mut base = correct_answers.saturating_mul(rules.cash_per_answer);
    if base == 0 {
        base = rules.zero_score_floor;
    }

    let low_factor = sample_factor(rules.low_multiplier, rng);
    let high_factor = sample_factor(rules.high_multiplier, rng);

    let low_money = scale(base, low_factor).max(rules.min_low_offer);
    let high_money = scale(base, high_factor);

    OfferSet {
        low: Offer {
            money: low_money,
            start_position: board.low_start(),
        },
        mid: Offer {
            money: base,
            start_position: board.mid_start,
        },
        high: Offer {
            money: high_money,
            start_position: board.high_start(),
        },
        chosen: None,
    }
}

fn sample_factor<R: Rng + ?Sized>((lo, hi): (f64, f64), rng: &mut R) -> f64 {
    if hi > lo { rng.gen_range(lo..=hi) } else { lo }
}

fn scale(base: u32, factor: f64) -> u32 {
    (base as f64 * factor).round().max(0.0) as u32
}
