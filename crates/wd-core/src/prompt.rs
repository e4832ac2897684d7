//! Line-oriented prompting
//!
//! [`Prompter`] implements [`Input`] over any buffered reader and writer:
//! it prints the question, reads one line, and asks again with
//! "Invalid Input!" until the answer parses.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use crate::error::{GameError, InputError};
use crate::io::{Choice, Input};

pub const INVALID_INPUT: &str = "Invalid Input!";

/// Parse an integer and check it against `bounds`
pub fn parse_bounded(line: &str, bounds: &RangeInclusive<i32>) -> Result<i32, InputError> {
    let trimmed = line.trim();
    let value: i32 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if bounds.contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            value,
            min: *bounds.start(),
            max: *bounds.end(),
        })
    }
}

/// Parse a "1" or "2" menu answer
pub fn parse_choice(line: &str) -> Result<Choice, InputError> {
    let n = parse_bounded(line, &(1..=2))?;
    Choice::from_number(n).ok_or(InputError::OutOfRange {
        value: n,
        min: 1,
        max: 2,
    })
}

/// Prompts on `writer`, reads answers from `reader`
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print `question`, then read one raw answer line without its line ending
    fn ask(&mut self, question: &str) -> Result<Vec<u8>, GameError> {
        writeln!(self.writer, "{question}")?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        while let Some(b'\n' | b'\r') = line.last() {
            line.pop();
        }
        Ok(line)
    }

    /// Keep asking until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, GameError> {
        loop {
            let line = self.ask(question)?;
            let answer = String::from_utf8(line)
                .map_err(|_| InputError::NotText)
                .and_then(|text| parse(&text));
            match answer {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(%err, "rejected answer");
                    writeln!(self.writer, "{INVALID_INPUT}")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Input for Prompter<R, W> {
    fn choose(&mut self, first: &str, second: &str) -> Result<Choice, GameError> {
        let question = format!("What will you do?\n> 1: {first}  2: {second}");
        self.ask_until(&question, parse_choice)
    }

    fn integer(&mut self, prompt: &str, bounds: RangeInclusive<i32>) -> Result<i32, GameError> {
        self.ask_until(prompt, |line| parse_bounded(line, &bounds))
    }

    fn text(&mut self, prompt: &str) -> Result<String, GameError> {
        let line = self.ask(prompt)?;
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}
