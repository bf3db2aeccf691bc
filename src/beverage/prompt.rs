//! Console-backed preference source.

use super::hook::PreferenceSource;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Interpret a typed answer: anything starting with `y` or `Y` is yes.
pub fn parse_answer(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Asks on stdout and reads the answer from one line of stdin.
///
/// I/O failures and end of input count as "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    fn read_answer(question: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{question} ")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

impl PreferenceSource for ConsolePrompt {
    fn ask(&self, question: &str) -> bool {
        match Self::read_answer(question) {
            Ok(line) => parse_answer(&line),
            Err(err) => {
                warn!(error = %err, "Could not read answer, assuming no");
                false
            }
        }
    }
}
