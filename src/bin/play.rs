use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chaser_rs::cli::{Prompt, create_chaser, play_session, print_chaser_help};
use chaser_rs::config::ConfigLoader;
use chaser_rs::game::Game;
use chaser_rs::players::Opponent;
use chaser_rs::questions::QuestionBank;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser, Clone)]
#[command(name = "chaser-play")]
#[command(about = "Play The Chase against a quiz chaser")]
struct Args {
    /// Question bank in JSONL format
    #[arg(long, default_value = "data/questions.jsonl")]
    questions: PathBuf,

    /// Config file layered over ./chaser.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Chaser code (R=Random, L=LLM)
    #[arg(short = 'c', long, default_value = "R")]
    chaser: String,

    /// Persona key (professor, beast, trickster, machine)
    #[arg(long)]
    persona: Option<String>,

    /// Probability the chaser answers a question correctly
    #[arg(long)]
    p_correct: Option<f64>,

    /// Chat model for the LLM chaser
    #[arg(long)]
    model: Option<String>,

    /// Show chaser codes and personas, then exit
    #[arg(long)]
    help_chasers: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chaser_rs={level},chaser_play={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.help_chasers {
        print_chaser_help();
        return Ok(());
    }

    let mut config = ConfigLoader::load(args.config.as_deref()).context("loading config")?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(persona) = args.persona {
        config.chaser.persona = Some(persona);
    }
    if let Some(p) = args.p_correct {
        config.chaser.p_correct = p;
    }
    if let Some(model) = args.model {
        config.chaser.model = model;
    }

    let bank = QuestionBank::load_jsonl(&args.questions)
        .with_context(|| format!("loading questions from {}", args.questions.display()))?;
    if bank.is_empty() {
        bail!("no questions found in {}", args.questions.display());
    }

    let chaser = create_chaser(&args.chaser, &config.chaser, config.seed)
        .context("setting up the chaser")?;
    info!(
        chaser = chaser.name(),
        questions = bank.len(),
        seed = config.seed,
        "starting game"
    );

    println!("Welcome to The Chase!");
    println!("Tonight's chaser: {} ({})", chaser.name(), chaser.persona().short_style);
    println!("{}", "=".repeat(60));

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    let name = prompt.ask_name("Player")?;

    let mut game = Game::new(bank.into_questions(), config, chaser).with_player_name(name);
    play_session(&mut game, &mut prompt)?;

    println!("\nFINAL STATS:");
    println!("  Cash builder: {} correct", game.state.player.correct_answers);
    println!(
        "  Final chase: {} vs {}",
        game.state.player.final_chase_score, game.state.chaser.final_chase_score
    );
    println!("  Taking home: {}", game.state.player.secured_cash);
    Ok(())
}
