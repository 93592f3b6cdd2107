use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [
        OptionLabel::A,
        OptionLabel::B,
        OptionLabel::C,
        OptionLabel::D,
    ];

    /// Parses free-form player input. Anything outside A-D yields `None`,
    /// which never matches a correct label.
    pub fn normalize(input: &str) -> Option<OptionLabel> {
        match input.trim().to_ascii_uppercase().as_str() {
            "A" => Some(OptionLabel::A),
            "B" => Some(OptionLabel::B),
            "C" => Some(OptionLabel::C),
            "D" => Some(OptionLabel::D),
            _ => None,
        }
    }

    pub fn others(self) -> impl Iterator<Item = OptionLabel> {
        Self::ALL.into_iter().filter(move |label| *label != self)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseKind {
    CashBuilder,
    Chase,
    FinalChase,
    Completed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OfferChoice {
    Low,
    Mid,
    High,
}

impl OfferChoice {
    /// "low" and "high" select those offers; every other input falls back to mid.
    pub fn resolve(input: &str) -> OfferChoice {
        match input.trim().to_ascii_lowercase().as_str() {
            "low" => OfferChoice::Low,
            "high" => OfferChoice::High,
            _ => OfferChoice::Mid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    ChaserWins,
    PlayerWins,
}

/// Random concerns that each draw from their own stream of one session seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SeedRole {
    Persona,
    Chaser,
    Game,
    Contestant,
}

impl SeedRole {
    fn salt(self) -> u64 {
        match self {
            SeedRole::Persona => 0x7065_7273_6f6e_6131,
            SeedRole::Chaser => 0x6368_6173_6572_6232,
            SeedRole::Game => 0x6761_6d65_7374_6333,
            SeedRole::Contestant => 0x636f_6e74_6573_7434,
        }
    }

    /// Seed for this role's RNG, derived from the session seed.
    pub fn derive(self, seed: u64) -> u64 {
        StdRng::seed_from_u64(seed ^ self.salt()).r#gen()
    }
}
