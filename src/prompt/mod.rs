//! Interactive prompting.
//!
//! [`Prompter`] asks one question at a time over any line-based reader and
//! writer, re-asking until the answer passes its validator. End of input is
//! reported as [`InitError::Interrupted`].

mod encoding;
pub mod validators;


pub use encoding::{TermEncoding, decode_input};
pub use validators::ValidationError;

use crate::error::{InitError, Result};
use std::io::{BufRead, Write};

/// Prefix printed before every question.
pub const PROMPT_PREFIX: &str = "> ";

/// Prefix printed before validation messages and notes.
pub const ERROR_PREFIX: &str = "* ";

const GUESSED_ENCODING_NOTE: &str = "Note: non-ASCII characters entered and terminal \
     encoding unknown -- assuming UTF-8 or Latin-1.";

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    encoding: TermEncoding,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, encoding: TermEncoding) -> Self {
        Self {
            input,
            output,
            encoding,
        }
    }

    /// Ask `text` until `validator` accepts the answer.
    ///
    /// An empty answer is replaced by `default` when one is given, and the
    /// default is shown in brackets after the question.
    pub fn ask<T, F>(&mut self, text: &str, default: Option<&str>, validator: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, ValidationError>,
    {
        let default = default.filter(|d| !d.is_empty());
        let question = match default {
            Some(d) => format!("{}{} [{}]: ", PROMPT_PREFIX, text, d),
            None => format!("{}{}: ", PROMPT_PREFIX, text),
        };

        loop {
            write!(self.output, "{}", question).map_err(InitError::Terminal)?;
            self.output.flush().map_err(InitError::Terminal)?;

            let mut raw = self.read_line()?;
            if raw.is_empty()
                && let Some(d) = default
            {
                raw = d.as_bytes().to_vec();
            }

            let answer = match decode_input(&raw, self.encoding) {
                Ok(decoded) => {
                    if decoded.guessed {
                        self.say(&format!("{}{}", ERROR_PREFIX, GUESSED_ENCODING_NOTE))?;
                    }
                    decoded.text
                }
                Err(err) => {
                    self.say(&format!("{}{}", ERROR_PREFIX, err))?;
                    continue;
                }
            };

            match validator(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(&format!("{}{}", ERROR_PREFIX, err))?,
            }
        }
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(InitError::Terminal)
    }

    /// Read one line without its line terminator.
    fn read_line(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(InitError::Terminal)?;
        if read == 0 {
            return Err(InitError::Interrupted);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }
}
