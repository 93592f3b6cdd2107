//! Game configuration and the layered loader.
//!
//! Sources, lowest to highest priority: built-in defaults, `./chaser.toml`,
//! an explicit file, then `CHASER_*` environment variables (`__` separates
//! nested keys, e.g. `CHASER_CHASER__P_CORRECT=0.9`).

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::llm::DEFAULT_MODEL;
use crate::types::TieBreak;

pub const PROJECT_CONFIG_FILE: &str = "chaser.toml";
pub const ENV_PREFIX: &str = "CHASER_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub seed: u64,
    pub cash_builder_questions: usize,
    pub final_player_questions: usize,
    pub final_chaser_questions: usize,
    pub chase: ChaseRules,
    pub offers: OfferRules,
    pub chaser: ChaserSettings,
    pub tie_break: TieBreak,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            cash_builder_questions: 5,
            final_player_questions: 5,
            final_chaser_questions: 5,
            chase: ChaseRules::default(),
            offers: OfferRules::default(),
            chaser: ChaserSettings::default(),
            tie_break: TieBreak::ChaserWins,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_cash_builder_questions(mut self, count: usize) -> Self {
        self.cash_builder_questions = count;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Board geometry. Positions count steps remaining to the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseRules {
    pub board_steps: u8,
    /// Extra steps the chaser starts behind the mid-offer position.
    pub chaser_distance: u8,
    pub mid_start: u8,
    /// Steps closer to the bank for the low offer.
    pub low_offset: u8,
    /// Steps farther from the bank for the high offer.
    pub high_offset: u8,
}

impl Default for ChaseRules {
    fn default() -> Self {
        Self {
            board_steps: 7,
            chaser_distance: 2,
            mid_start: 5,
            low_offset: 1,
            high_offset: 1,
        }
    }
}

impl ChaseRules {
    pub fn low_start(&self) -> u8 {
        self.mid_start.saturating_sub(self.low_offset)
    }

    pub fn high_start(&self) -> u8 {
        self.mid_start.saturating_add(self.high_offset)
    }

    pub fn chaser_start(&self) -> u8 {
        self.mid_start.saturating_add(self.chaser_distance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferRules {
    pub cash_per_answer: u32,
    /// Base cash used when the cash builder scored nothing.
    pub zero_score_floor: u32,
    pub min_low_offer: u32,
    pub low_multiplier: (f64, f64),
    pub high_multiplier: (f64, f64),
}

impl Default for OfferRules {
    fn default() -> Self {
        Self {
            cash_per_answer: 1000,
            zero_score_floor: 1000,
            min_low_offer: 500,
            low_multiplier: (0.25, 0.75),
            high_multiplier: (1.5, 4.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaserSettings {
    pub model: String,
    pub p_correct: f64,
    /// Persona key; a random persona is picked when unset.
    pub persona: Option<String>,
}

impl Default for ChaserSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            p_correct: 0.75,
            persona: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] Box<figment::Error>);

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(config_path: Option<&Path>) -> Result<GameConfig, ConfigError> {
        Self::figment(config_path)
            .extract()
            .map_err(|e| ConfigError(Box::new(e)))
    }

    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(GameConfig::default()));

        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
