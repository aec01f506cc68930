//! Line based questions on a terminal. Every question is asked again until the answer is usable.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use colored::Colorize;
use poemish::Mode;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks `question` and returns the trimmed answer. An empty answer becomes `default`, if any.
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(d) => write!(self.output, "{} ({d}){} ", question.red(), ":".yellow())?,
            None => write!(self.output, "{}{} ", question.red(), ":".yellow())?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input ended while waiting for an answer to {question:?}");
        }

        let answer = line.trim();
        Ok(match default {
            Some(d) if answer.is_empty() => d.to_string(),
            _ => answer.to_string(),
        })
    }

    /// Asks until `parse` accepts the answer, printing `retry` after each rejected one.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        default: Option<&str>,
        retry: impl Fn(&str) -> String,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(question, default)?;
            if !answer.is_empty() {
                if let Some(value) = parse(&answer) {
                    return Ok(value);
                }
            }
            writeln!(self.output, "{}", retry(&answer))?;
        }
    }

    pub fn ask_mode(&mut self) -> Result<Mode> {
        self.ask_until(
            "Would you like to use a website or a txt file",
            None,
            |_| "Please choose a format to use".to_string(),
            Mode::parse,
        )
    }

    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        self.ask_until(
            question,
            None,
            |_| "Please input a yes or no answer".to_string(),
            |answer| {
                let answer = answer.to_lowercase();
                if answer.starts_with("yes") {
                    Some(true)
                } else if answer.starts_with("no") {
                    Some(false)
                } else {
                    None
                }
            },
        )
    }

    /// Asks for a whole number of at least one.
    pub fn ask_count(&mut self, question: &str, default: usize) -> Result<usize> {
        let default = default.to_string();
        self.ask_until(
            question,
            Some(default.as_str()),
            |_| "Please input a whole number greater than zero".to_string(),
            |answer| answer.parse::<usize>().ok().filter(|&n| n > 0),
        )
    }

    /// Where answers and prompts are written; poems go here too.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
