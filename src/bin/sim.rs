use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chaser_rs::cli::{SimulatedContestant, StatisticsAccumulator, autoplay};
use chaser_rs::config::{ConfigLoader, GameConfig};
use chaser_rs::game::{Game, Winner};
use chaser_rs::llm::personas;
use chaser_rs::players::{Opponent, RandomChaser};
use chaser_rs::questions::{Question, QuestionBank};
use chaser_rs::types::{OfferChoice, SeedRole};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser, Clone)]
#[command(name = "chaser-sim")]
#[command(about = "Simulate many games between a simulated contestant and the random chaser")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 100)]
    num: u32,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Probability the contestant answers correctly
    #[arg(long, default_value_t = 0.6)]
    accuracy: f64,

    /// Probability the chaser answers correctly
    #[arg(long)]
    p_correct: Option<f64>,

    /// Offer the contestant always takes
    #[arg(long, default_value = "mid")]
    offer: String,

    /// Question bank in JSONL format
    #[arg(long, default_value = "data/questions.jsonl")]
    questions: PathBuf,

    /// Config file layered over ./chaser.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Silence console output
    #[arg(long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("chaser_rs={level},chaser_sim={level}")
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directives(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = ConfigLoader::load(args.config.as_deref()).context("loading config")?;
    if let Some(p) = args.p_correct {
        config.chaser.p_correct = p;
    }
    let offer = OfferChoice::resolve(&args.offer);
    let questions = QuestionBank::load_jsonl(&args.questions)
        .with_context(|| format!("loading questions from {}", args.questions.display()))?
        .into_questions();

    let mut stats = StatisticsAccumulator::new();
    run_sequential_simulations(&args, &config, &questions, offer, &mut stats)?;

    if !args.quiet {
        print_summary(&stats, &args, offer);
    }
    Ok(())
}

fn run_sequential_simulations(
    args: &Args,
    config: &GameConfig,
    questions: &[Question],
    offer: OfferChoice,
    stats: &mut StatisticsAccumulator,
) -> Result<()> {
    for game_idx in 0..args.num {
        let seed = game_seed(args.seed, game_idx);
        let config = config.clone().with_seed(seed);
        let persona = match config.chaser.persona.as_deref() {
            Some(key) => personas::by_key(key).with_context(|| format!("unknown persona '{key}'"))?,
            None => &personas::all()[game_idx as usize % personas::all().len()],
        };
        let chaser =
            RandomChaser::new(persona, config.chaser.p_correct, SeedRole::Chaser.derive(seed));
        let mut contestant =
            SimulatedContestant::new(args.accuracy, SeedRole::Contestant.derive(seed));

        let start = Instant::now();
        let mut game = Game::new(questions.to_vec(), config, chaser);
        autoplay(&mut game, &mut contestant, offer)
            .with_context(|| format!("game {} failed", game_idx + 1))?;
        let duration = start.elapsed();

        stats.after(&game, duration);

        if !args.quiet {
            let last_n = 10;
            if game_idx < last_n || game_idx >= args.num.saturating_sub(last_n) {
                let winner = match game.winner() {
                    Some(Winner::Player) => "Player",
                    Some(Winner::Chaser) => "Chaser",
                    None => "None",
                };
                println!(
                    "Game {:>4}: Chaser={:<14} Correct={} Banked={:>3} Winner={:>6} Cash={:>6} Duration={:?}",
                    game_idx + 1,
                    game.opponent().name(),
                    game.state.player.correct_answers,
                    if game.state.player.has_banked() { "yes" } else { "no" },
                    winner,
                    game.state.player.secured_cash,
                    duration
                );
            } else if (game_idx + 1) % 100 == 0 {
                print!(".");
                std::io::stdout().flush()?;
            }
        }
    }
    Ok(())
}

fn game_seed(base: u64, game_idx: u32) -> u64 {
    base.wrapping_add(u64::from(game_idx))
}

fn print_summary(stats: &StatisticsAccumulator, args: &Args, offer: OfferChoice) {
    let stats = &stats.stats;
    println!("\n{}", "=".repeat(80));
    println!("SIMULATION SUMMARY");
    println!("{}", "=".repeat(80));
    println!("  Contestant accuracy: {:.2}, offer: {}", args.accuracy, offer);
    println!("  Total Games: {}", stats.games);
    println!("  Player Wins: {} ({:.1}%)", stats.player_wins, stats.win_rate());
    println!("  Reached Final Chase: {}", stats.chase_wins);
    println!("  Caught in Chase: {} ({:.1}%)", stats.caught, stats.caught_rate());
    println!("  Avg Cash Builder Correct: {:.2}", stats.get_avg_correct());
    println!("  Avg Banked Cash: {:.2}", stats.get_avg_banked());
    println!("  Avg Duration: {:.2?}", stats.get_avg_duration());
}
