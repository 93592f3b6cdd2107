pub mod cash_builder;
pub mod chase;
pub mod final_chase;
pub mod game;
pub mod offers;
pub mod players;
pub mod state;

pub use cash_builder::{current_cash_builder_question, start_cash_builder, submit_cash_builder_answer};
pub use chase::{apply_offer_choice, next_chase_question, process_chase_step};
pub use final_chase::{
    next_final_chase_chaser_question, next_final_chase_player_question, start_final_chase,
    submit_final_chase_chaser_answer, submit_final_chase_player_answer,
};
pub use game::{ChaseStepReport, Game};
pub use offers::{Offer, OfferSet, generate_offers, offers_for_score};
pub use players::{ChaserState, PlayerState};
pub use state::{
    CashBuilderRound, ChaseRound, FinalChaseRound, GameError, GamePhase, GameState, Winner,
};
