// ============================================================================
// Prompter
// Line-oriented input validation with indefinite re-prompting
// ============================================================================

use crate::numeric::{parse_operand, Operand, MAX_PRECISION};
use std::io::{self, BufRead, Write};

pub const PRECISION_PROMPT: &str = "Enter result precision: ";
pub const SIGN_POLICY_PROMPT: &str = "Allow negative results? (y/n): ";
pub const OPERATION_PROMPT: &str = "Enter operation (+, -, *, /) or 'exit' to quit: ";
pub const FIRST_OPERAND_PROMPT: &str = "Enter first number: ";
pub const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";

const NOT_A_NUMBER: &str = "Invalid input. Please enter a number.";
const NEGATIVE_PRECISION: &str = "Invalid input. Please enter a non-negative number.";
const NOT_YES_OR_NO: &str = "Invalid input. Please enter 'y' for yes or 'n' for no.";

/// What the user typed at the operation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// An operator symbol, not yet validated
    Operator(String),
    /// The `exit` sentinel, in any letter case
    Exit,
}

/// Parse a `y`/`n` answer, ignoring letter case
pub fn parse_yes_no(answer: &str) -> Result<bool, String> {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("y") {
        Ok(true)
    } else if answer.eq_ignore_ascii_case("n") {
        Ok(false)
    } else {
        Err(format!("expected 'y' or 'n', got '{}'", answer))
    }
}

/// Reads validated values from `reader`, writing prompts and complaints to
/// `writer`.
///
/// Every `read_*` method returns `Ok(None)` once the input is exhausted.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write one line of output
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()
    }

    /// Prompt until a non-blank line arrives and return it trimmed
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            write!(self.writer, "{}", message)?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let token = line.trim();
            if !token.is_empty() {
                return Ok(Some(token.to_string()));
            }
        }
    }

    /// Read a rounding precision between 0 and [`MAX_PRECISION`]
    pub fn read_precision(&mut self) -> io::Result<Option<u32>> {
        loop {
            let Some(token) = self.prompt(PRECISION_PROMPT)? else {
                return Ok(None);
            };

            match token.parse::<i64>() {
                Ok(value) if value < 0 => self.say(NEGATIVE_PRECISION)?,
                Ok(value) if value > MAX_PRECISION as i64 => self.say(&format!(
                    "Invalid input. Please enter a number between 0 and {}.",
                    MAX_PRECISION
                ))?,
                Ok(value) => return Ok(Some(value as u32)),
                Err(_) => self.say(NOT_A_NUMBER)?,
            }
        }
    }

    /// Read the negative-result policy as a `y`/`n` answer
    pub fn read_allow_negative(&mut self) -> io::Result<Option<bool>> {
        loop {
            let Some(token) = self.prompt(SIGN_POLICY_PROMPT)? else {
                return Ok(None);
            };

            match parse_yes_no(&token) {
                Ok(allow) => return Ok(Some(allow)),
                Err(_) => self.say(NOT_YES_OR_NO)?,
            }
        }
    }

    /// Read an operator symbol or the exit sentinel
    pub fn read_command(&mut self) -> io::Result<Option<Command>> {
        let Some(token) = self.prompt(OPERATION_PROMPT)? else {
            return Ok(None);
        };

        if token.eq_ignore_ascii_case("exit") {
            Ok(Some(Command::Exit))
        } else {
            Ok(Some(Command::Operator(token)))
        }
    }

    /// Read an operand, accepting `.` or `,` as the decimal separator
    pub fn read_operand(&mut self, message: &str) -> io::Result<Option<Operand>> {
        loop {
            let Some(token) = self.prompt(message)? else {
                return Ok(None);
            };

            match parse_operand(&token) {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(NOT_A_NUMBER)?,
            }
        }
    }

    /// The output sink
    pub fn writer(&self) -> &W {
        &self.writer
    }
}
