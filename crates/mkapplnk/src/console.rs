//! Console backed by the process's standard streams.

use mkapplnk_core::console::{echo_answer, first_answer, key_answer, trim_line_ending};
use mkapplnk_core::{platform, Console, Result};
use std::io::{self, BufRead, Write};

/// Reads replies from stdin and writes to stdout, flushing after prompts.
///
/// Confirmations take a single key when stdin is an interactive console and
/// a whole line otherwise.
pub struct TerminalConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Console for TerminalConsole {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut out = self.stdout.lock();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.stdin.lock().read_line(&mut line)?;
        trim_line_ending(&mut line);
        Ok(line)
    }

    fn read_answer(&mut self) -> Result<Option<char>> {
        match platform::read_console_key()? {
            Some(key) => {
                let answer = key_answer(key);
                self.write_line(&echo_answer(answer))?;
                Ok(answer)
            }
            None => {
                let reply = self.read_line()?;
                Ok(first_answer(&reply))
            }
        }
    }
}
