use std::io::{self, BufRead, Write};

use crate::types::{OfferChoice, OptionLabel};

/// Line-based terminal input. Generic over the streams so sessions can be
/// scripted in tests.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Reads an option letter. Anything else is returned as typed, after a
    /// notice that it will be scored as wrong.
    pub fn ask_answer(&mut self) -> io::Result<String> {
        let answer = self.ask("Your answer (A-D): ")?;
        if OptionLabel::normalize(&answer).is_none() {
            writeln!(
                self.output,
                "'{answer}' is not one of A, B, C or D. It counts as incorrect."
            )?;
        }
        Ok(answer)
    }

    pub fn ask_offer(&mut self) -> io::Result<OfferChoice> {
        let answer = self.ask("Take which offer? (low/mid/high) [mid]: ")?;
        let choice = OfferChoice::resolve(&answer);
        if !answer.is_empty() && !answer.eq_ignore_ascii_case(&choice.to_string()) {
            writeln!(self.output, "Unrecognised offer '{answer}', taking {choice}.")?;
        }
        Ok(choice)
    }

    pub fn ask_name(&mut self, default: &str) -> io::Result<String> {
        let name = self.ask(&format!("Your name [{default}]: "))?;
        Ok(if name.is_empty() {
            default.to_string()
        } else {
            name
        })
    }
}
