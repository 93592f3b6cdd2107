#![allow(dead_code)]

use chaser_rs::questions::{Question, QuestionOptions};
use chaser_rs::types::OptionLabel;

/// `n` distinct questions; question `i` has correct label `ALL[i % 4]`.
pub fn pool(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| Question {
            id: format!("q_{:06}", i + 1),
            question: format!("Integration question {}?", i + 1),
            options: QuestionOptions::new(
                format!("first {i}"),
                format!("second {i}"),
                format!("third {i}"),
                format!("fourth {i}"),
            ),
            correct_option: OptionLabel::ALL[i % 4],
        })
        .collect()
}

pub fn wrong_label(question: &Question) -> OptionLabel {
    match question.correct_option {
        OptionLabel::A => OptionLabel::B,
        _ => OptionLabel::A,
    }
}
