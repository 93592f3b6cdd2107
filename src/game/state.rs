use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GameConfig;
use crate::players::OpponentError;
use crate::questions::Question;
use crate::types::PhaseKind;

use super::offers::OfferSet;
use super::players::{ChaserState, PlayerState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CashBuilderRound {
    pub questions: Vec<Question>,
    pub cursor: usize,
}

impl CashBuilderRound {
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.questions.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChaseRound {
    pub used_question_ids: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FinalChaseRound {
    pub player_questions: Vec<Question>,
    pub chaser_questions: Vec<Question>,
    pub player_cursor: usize,
    pub chaser_cursor: usize,
}

impl FinalChaseRound {
    pub fn player_question(&self) -> Option<&Question> {
        self.player_questions.get(self.player_cursor)
    }

    pub fn chaser_question(&self) -> Option<&Question> {
        self.chaser_questions.get(self.chaser_cursor)
    }

    pub fn is_finished(&self) -> bool {
        self.player_cursor >= self.player_questions.len()
            && self.chaser_cursor >= self.chaser_questions.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Chaser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamePhase {
    CashBuilder(CashBuilderRound),
    Chase(ChaseRound),
    /// `None` until the final chase questions are drawn.
    FinalChase(Option<FinalChaseRound>),
    Completed { winner: Winner },
}

impl GamePhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            GamePhase::CashBuilder(_) => PhaseKind::CashBuilder,
            GamePhase::Chase(_) => PhaseKind::Chase,
            GamePhase::FinalChase(_) => PhaseKind::FinalChase,
            GamePhase::Completed { .. } => PhaseKind::Completed,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("question pool is empty")]
    EmptyPool,
    #[error("operation requires phase {expected} but game is in {actual}")]
    WrongPhase {
        expected: PhaseKind,
        actual: PhaseKind,
    },
    #[error("chase has not started: no offer chosen")]
    ChaseNotStarted,
    #[error("chase already started")]
    ChaseAlreadyStarted,
    #[error("no question is pending")]
    NoPendingQuestion,
    #[error("final chase questions have not been drawn")]
    FinalChaseNotStarted,
    #[error("opponent failed: {0}")]
    Opponent(#[from] OpponentError),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub player: PlayerState,
    pub chaser: ChaserState,
    pub offers: Option<OfferSet>,
    pub question_pool: Arc<[Question]>,
    pub current_question: Option<Question>,
    pub outcome_message: Option<String>,
}

impl GameState {
    pub fn new(question_pool: Vec<Question>, config: GameConfig) -> Self {
        Self {
            config,
            phase: GamePhase::CashBuilder(CashBuilderRound::default()),
            player: PlayerState::default(),
            chaser: ChaserState::default(),
            offers: None,
            question_pool: question_pool.into(),
            current_question: None,
            outcome_message: None,
        }
    }

    pub fn with_names(mut self, player: impl Into<String>, chaser: impl Into<String>) -> Self {
        self.player.name = player.into();
        self.chaser.name = chaser.into();
        self
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, GamePhase::Completed { .. })
    }

    pub fn winner(&self) -> Option<Winner> {
        match self.phase {
            GamePhase::Completed { winner } => Some(winner),
            _ => None,
        }
    }

    pub(crate) fn wrong_phase(&self, expected: PhaseKind) -> GameError {
        GameError::WrongPhase {
            expected,
            actual: self.phase_kind(),
        }
    }
}

/// Uniform sample of `min(count, pool.len())` distinct questions in random order.
pub(crate) fn sample_questions<R: Rng + ?Sized>(
    pool: &[Question],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, GameError> {
    if pool.is_empty() {
        return Err(GameError::EmptyPool);
    }
    let mut indices: Vec<usize> = (0..pool.len()).collect();
    let amount = count.min(pool.len());
    let (picked, _) = indices.partial_shuffle(rng, amount);
    Ok(picked.iter().map(|&idx| pool[idx].clone()).collect())
}
