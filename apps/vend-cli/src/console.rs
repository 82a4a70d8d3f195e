//! # Console
//!
//! Line-oriented prompt/response over any `BufRead` + `Write` pair.
//!
//! The binary wires this to locked stdin/stdout; tests use a `Cursor` and a
//! `Vec<u8>`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::AppResult;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `text` (no newline), flushes, and reads one line.
    ///
    /// Returns `None` at end of input. The trailing line terminator is
    /// stripped; other whitespace is left for the caller's parser. Bytes that
    /// are not valid UTF-8 become U+FFFD, so the line still reaches the
    /// parser and gets rejected there.
    pub fn prompt(&mut self, text: &str) -> AppResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            trace!("end of input");
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        trace!(line = %line, "read line");
        Ok(Some(line))
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
