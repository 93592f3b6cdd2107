use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::players::CommentContext;
use crate::questions::Question;
use crate::types::OptionLabel;

pub const QUIZ_SYSTEM_PROMPT: &str = "You are a quiz player. You will always be given a multiple-choice \
question with four options: A, B, C, and D.\n\
Your task is to pick the single best answer.\n\
Always clearly indicate your choice in the format: 'Answer: X' where X is A, B, C, or D.";

static ANSWER_MARKER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)answer\s*:\s*([ABCD])\b").ok());
static BARE_LETTER: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\b([ABCD])\b").ok());

pub fn question_prompt(question: &Question) -> String {
    let options = question
        .options
        .iter()
        .map(|(label, text)| format!("{label}) {text}"))
        .join("\n");
    format!(
        "Question:\n{}\n\nOptions:\n{}\n\nPlease answer in the format: Answer: X",
        question.question, options
    )
}

/// Finds the label in a reply: an explicit "Answer: X" wins, otherwise the
/// first standalone capital A-D.
pub fn parse_answer(raw: &str) -> Option<OptionLabel> {
    let find = |pattern: &Option<Regex>| pattern.as_ref().and_then(|re| re.captures(raw));
    find(&ANSWER_MARKER)
        .or_else(|| find(&BARE_LETTER))
        .and_then(|caps| caps.get(1))
        .and_then(|m| OptionLabel::normalize(m.as_str()))
}

pub fn comment_prompt(ctx: &CommentContext<'_>) -> String {
    let question = ctx.question;
    let player_choice = ctx
        .player_choice
        .map(|label| format!("{label}) {}", question.options.get(label)))
        .unwrap_or_else(|| "no valid answer".to_string());
    let chaser_choice = ctx.chaser.chosen_option;
    format!(
        "Question: {}\n\
         Correct answer: {}) {}\n\
         The player answered {} and was {}.\n\
         You answered {}) {} and were {}.\n\n\
         Comment on this round in character, in 1-3 sentences.",
        question.question,
        question.correct_option,
        question.correct_text(),
        player_choice,
        verdict(ctx.player_correct),
        chaser_choice,
        question.options.get(chaser_choice),
        verdict(ctx.chaser.is_correct),
    )
}

fn verdict(correct: bool) -> &'static str {
    if correct { "correct" } else { "wrong" }
}
