//! Interactive read-dispatch-print loop.

use crate::clock::Clock;
use crate::commands::{Assistant, Command, Reply, INVALID_COMMAND_MESSAGE};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub const WELCOME_MESSAGE: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Drives an [`Assistant`] from a line-oriented reader and writer.
pub struct Session<C: Clock> {
    assistant: Assistant<C>,
}

impl<C: Clock> Session<C> {
    pub fn new(assistant: Assistant<C>) -> Self {
        Self { assistant }
    }

    pub fn assistant(&self) -> &Assistant<C> {
        &self.assistant
    }

    /// Run until `close`/`exit` or end of input.
    ///
    /// Blank lines just prompt again and lines that are not valid UTF-8 are
    /// answered as invalid commands. Only I/O failures end the loop early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        info!("Session started");
        writeln!(output, "{}", WELCOME_MESSAGE)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read command")?;
            if read == 0 {
                info!("Input closed");
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "Ignoring input that is not valid UTF-8");
                    writeln!(output, "{}", INVALID_COMMAND_MESSAGE)?;
                    continue;
                }
            };

            let Some(command) = Command::parse(line) else {
                continue;
            };

            let reply = self.assistant.respond(command);
            for text in reply.lines() {
                writeln!(output, "{}", text)?;
            }
            if reply == Reply::Exit {
                break;
            }
        }

        info!(contacts = self.assistant.book().len(), "Session finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut session = Session::new(Assistant::with_clock(FixedClock(today), 7));
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_stops_reading() {
        let out = run_script("hello\nexit\nhello\n");
        assert_eq!(
            out,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Good bye!\n"
        );
    }

    #[test]
    fn test_eof_ends_session() {
        let out = run_script("hello");
        assert!(out.ends_with("How can I help you?\nEnter a command: "));
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session_alive() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut session = Session::new(Assistant::with_clock(FixedClock(today), 7));
        let mut input = b"add Bob 1234567890\n".to_vec();
        input.extend_from_slice(b"add \xff\xfe 1234567890\n");
        input.extend_from_slice(b"hello\nexit\n");

        let mut out = Vec::new();
        session.run(Cursor::new(input), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(
            out,
            "Welcome to the assistant bot!\n\
             Enter a command: Contact added.\n\
             Enter a command: Invalid command.\n\
             Enter a command: How can I help you?\n\
             Enter a command: Good bye!\n"
        );
        assert_eq!(session.assistant().book().len(), 1);
    }

    #[test]
    fn test_blank_lines_reprompt() {
        let out = run_script("\n   \nclose\n");
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.ends_with("Good bye!\n"));
    }
}
