use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ChaserSettings;
use crate::llm::{LlmError, OpenAiClient, Persona, personas};
use crate::players::{
    ChaserAnswer, CommentContext, LlmChaser, Opponent, OpponentError, RandomChaser,
};
use crate::questions::Question;
use crate::types::SeedRole;

pub struct CliChaser {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CLI_CHASERS: &[CliChaser] = &[
    CliChaser {
        code: "R",
        name: "RandomChaser",
        description: "Guesses at random and speaks canned lines. Works offline.",
    },
    CliChaser {
        code: "L",
        name: "LlmChaser",
        description: "Answers and comments through an OpenAI chat model. Needs OPENAI_API_KEY.",
    },
];

#[derive(Debug, thiserror::Error)]
pub enum ChaserSetupError {
    #[error("unknown chaser code '{0}'")]
    UnknownCode(String),
    #[error("unknown persona '{0}'")]
    UnknownPersona(String),
    #[error(transparent)]
    Llm(#[from] LlmError),
}

pub enum ChaserInstance {
    Random(RandomChaser),
    Llm(LlmChaser<OpenAiClient>),
}

impl ChaserInstance {
    pub fn persona(&self) -> &'static Persona {
        match self {
            ChaserInstance::Random(c) => c.persona(),
            ChaserInstance::Llm(c) => c.persona(),
        }
    }
}

impl Opponent for ChaserInstance {
    fn name(&self) -> &str {
        match self {
            ChaserInstance::Random(c) => c.name(),
            ChaserInstance::Llm(c) => c.name(),
        }
    }

    fn answer(&mut self, question: &Question) -> Result<ChaserAnswer, OpponentError> {
        match self {
            ChaserInstance::Random(c) => c.answer(question),
            ChaserInstance::Llm(c) => c.answer(question),
        }
    }

    fn comment(&mut self, ctx: &CommentContext<'_>) -> Result<String, OpponentError> {
        match self {
            ChaserInstance::Random(c) => c.comment(ctx),
            ChaserInstance::Llm(c) => c.comment(ctx),
        }
    }
}

/// Persona named in `settings`, or one drawn from the session `seed` when unset.
pub fn resolve_persona(
    settings: &ChaserSettings,
    seed: u64,
) -> Result<&'static Persona, ChaserSetupError> {
    match settings.persona.as_deref() {
        Some(key) => {
            personas::by_key(key).ok_or_else(|| ChaserSetupError::UnknownPersona(key.to_string()))
        }
        None => {
            let mut rng = StdRng::seed_from_u64(SeedRole::Persona.derive(seed));
            Ok(personas::random(&mut rng))
        }
    }
}

pub fn create_chaser(
    code: &str,
    settings: &ChaserSettings,
    seed: u64,
) -> Result<ChaserInstance, ChaserSetupError> {
    let persona = resolve_persona(settings, seed)?;
    let chaser_seed = SeedRole::Chaser.derive(seed);
    match code.trim().to_ascii_uppercase().as_str() {
        "R" => Ok(ChaserInstance::Random(RandomChaser::new(
            persona,
            settings.p_correct,
            chaser_seed,
        ))),
        "L" => {
            let client = OpenAiClient::from_env()?.with_model(settings.model.clone());
            Ok(ChaserInstance::Llm(LlmChaser::new(
                client,
                persona,
                settings.p_correct,
                chaser_seed,
            )))
        }
        _ => Err(ChaserSetupError::UnknownCode(code.to_string())),
    }
}

pub fn print_chaser_help() {
    println!("Chaser Legend:");
    println!("{:<5} {:<15} {}", "CODE", "CHASER", "DESCRIPTION");
    println!("{}", "-".repeat(80));
    for chaser in CLI_CHASERS {
        println!("{:<5} {:<15} {}", chaser.code, chaser.name, chaser.description);
    }
    println!("\nPersonas:");
    for persona in personas::all() {
        println!("  {:<10} {:<16} {}", persona.key, persona.name, persona.short_style);
    }
}
