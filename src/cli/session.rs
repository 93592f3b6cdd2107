//! Interactive game loop over a [`Prompt`].

use std::io::{self, BufRead, Write};

use crate::cli::display::{render_board, render_offers, render_question};
use crate::cli::prompt::Prompt;
use crate::game::game::Game;
use crate::game::state::{GameError, Winner};
use crate::players::Opponent;
use crate::types::PhaseKind;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

pub fn play_session<O, R, W>(
    game: &mut Game<O>,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<Winner>, SessionError>
where
    O: Opponent,
    R: BufRead,
    W: Write,
{
    cash_builder(game, prompt)?;
    chase(game, prompt)?;
    if game.phase() == PhaseKind::FinalChase {
        final_chase(game, prompt)?;
    }

    let out = prompt.output();
    writeln!(out, "\n{}", "=".repeat(60))?;
    if let Some(message) = game.outcome_message() {
        writeln!(out, "{message}")?;
    }
    writeln!(out, "{}", "=".repeat(60))?;
    Ok(game.winner())
}

fn cash_builder<O: Opponent, R: BufRead, W: Write>(
    game: &mut Game<O>,
    prompt: &mut Prompt<R, W>,
) -> Result<(), SessionError> {
    game.start_cash_builder()?;
    writeln!(prompt.output(), "\n== CASH BUILDER ==")?;
    let mut number = 1;
    while let Some(question) = game.cash_builder_question() {
        let rendered = render_question(question);
        let correct = format!("{}) {}", question.correct_option, question.correct_text());
        writeln!(prompt.output(), "\nQ{number}. {rendered}")?;
        let answer = prompt.ask_answer()?;
        if game.answer_cash_builder(&answer) {
            writeln!(prompt.output(), "Correct!")?;
        } else {
            writeln!(prompt.output(), "Wrong. The answer was {correct}.")?;
        }
        number += 1;
    }
    writeln!(
        prompt.output(),
        "\nYou answered {} correctly.",
        game.state.player.correct_answers
    )?;
    Ok(())
}

fn chase<O: Opponent, R: BufRead, W: Write>(
    game: &mut Game<O>,
    prompt: &mut Prompt<R, W>,
) -> Result<(), SessionError> {
    let offers = game.offers()?;
    writeln!(prompt.output(), "\n== THE CHASE ==\n{}", render_offers(&offers))?;
    let choice = prompt.ask_offer()?;
    game.choose_offer(&choice.to_string())?;

    while game.phase() == PhaseKind::Chase {
        writeln!(prompt.output(), "\n{}", render_board(&game.state))?;
        let rendered = render_question(game.next_chase_question()?);
        writeln!(prompt.output(), "{rendered}")?;
        let answer = prompt.ask_answer()?;
        let report = game.play_chase_step(&answer)?;

        let out = prompt.output();
        writeln!(
            out,
            "You: {}. {}: {} ({}).",
            if report.player_correct { "correct" } else { "wrong" },
            game.state.chaser.name,
            report.chaser.chosen_option,
            if report.chaser.is_correct { "correct" } else { "wrong" },
        )?;
        if let Some(comment) = &report.comment {
            writeln!(out, "{}: \"{comment}\"", game.state.chaser.name)?;
        }
    }
    if let Some(message) = game.outcome_message() {
        writeln!(prompt.output(), "\n{message}")?;
    }
    Ok(())
}

fn final_chase<O: Opponent, R: BufRead, W: Write>(
    game: &mut Game<O>,
    prompt: &mut Prompt<R, W>,
) -> Result<(), SessionError> {
    game.start_final_chase()?;
    writeln!(prompt.output(), "\n== FINAL CHASE ==")?;
    while let Some(question) = game.final_player_question() {
        let rendered = render_question(question);
        writeln!(prompt.output(), "\n{rendered}")?;
        let answer = prompt.ask_answer()?;
        let scored = game.answer_final_chase(&answer)?;
        writeln!(prompt.output(), "{}", if scored { "Correct!" } else { "Wrong." })?;
    }
    writeln!(
        prompt.output(),
        "\nYou scored {}. Now {} answers...",
        game.state.player.final_chase_score,
        game.state.chaser.name
    )?;

    let answers = game.finish_final_chase()?;
    let out = prompt.output();
    for answer in &answers {
        writeln!(
            out,
            "  {} picks {}: {}",
            game.state.chaser.name,
            answer.chosen_option,
            if answer.is_correct { "correct" } else { "wrong" }
        )?;
    }
    Ok(())
}
