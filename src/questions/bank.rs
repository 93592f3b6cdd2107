use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use super::Question;

#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("malformed question record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate question id {id:?} on line {line}")]
    DuplicateId { id: String, line: usize },
    #[error("question bank i/o: {0}")]
    Io(#[from] io::Error),
}

/// An ordered, immutable pool of questions with unique ids.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn load_jsonl(path: impl AsRef<Path>) -> Result<Self, QuestionError> {
        let path = path.as_ref();
        let bank = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(path = %path.display(), questions = bank.len(), "loaded question bank");
        Ok(bank)
    }

    /// Reads one JSON record per line. Either every record loads or none do.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, QuestionError> {
        let mut questions = Vec::new();
        let mut seen = HashSet::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let question: Question = serde_json::from_str(trimmed)
                .map_err(|source| QuestionError::Malformed { line: idx + 1, source })?;
            if !seen.insert(question.id.clone()) {
                return Err(QuestionError::DuplicateId {
                    id: question.id,
                    line: idx + 1,
                });
            }
            questions.push(question);
        }
        Ok(Self { questions })
    }

    pub fn save_jsonl(&self, path: impl AsRef<Path>) -> Result<(), QuestionError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(path)?);
        for question in &self.questions {
            let line = serde_json::to_string(question)
                .map_err(|e| QuestionError::Io(io::Error::other(e)))?;
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        info!(path = %path.display(), questions = self.len(), "saved question bank");
        Ok(())
    }

    /// Drops questions whose text and options repeat an earlier one.
    pub fn dedup(self) -> Self {
        let before = self.questions.len();
        let mut seen = HashSet::new();
        let questions: Vec<Question> = self
            .questions
            .into_iter()
            .filter(|q| seen.insert((q.question.clone(), q.options.clone())))
            .collect();
        debug!(before, after = questions.len(), "deduplicated question bank");
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
