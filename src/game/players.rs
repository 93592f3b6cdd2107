use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const DEFAULT_CHASER_NAME: &str = "The Chaser";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub correct_answers: u32,
    /// Steps remaining to the bank. `None` until the chase starts.
    pub board_position: Option<u8>,
    pub secured_cash: u32,
    pub final_chase_score: u32,
}

impl PlayerState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            correct_answers: 0,
            board_position: None,
            secured_cash: 0,
            final_chase_score: 0,
        }
    }

    pub fn step_toward_bank(&mut self) {
        if let Some(pos) = self.board_position.as_mut() {
            *pos = pos.saturating_sub(1);
        }
    }

    pub fn has_banked(&self) -> bool {
        self.board_position == Some(0)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaserState {
    pub name: String,
    pub board_position: Option<u8>,
    pub final_chase_score: u32,
}

impl ChaserState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board_position: None,
            final_chase_score: 0,
        }
    }

    pub fn step_toward_bank(&mut self) {
        if let Some(pos) = self.board_position.as_mut() {
            *pos = pos.saturating_sub(1);
        }
    }

    /// True once the chaser stands on or past the player's square.
    pub fn has_caught(&self, player: &PlayerState) -> bool {
        match (self.board_position, player.board_position) {
            (Some(chaser), Some(player)) => chaser <= player,
            _ => false,
        }
    }
}

impl Default for ChaserState {
    fn default() -> Self {
        Self::new(DEFAULT_CHASER_NAME)
    }
}
