//! Operator console abstraction.
//!
//! The run is entirely interactive; everything it prints or asks goes through
//! a [`Console`] so the flow can be driven by a script in tests.

use crate::error::Result;

/// Line-oriented operator console.
pub trait Console {
    /// Write text without a line break and flush it, used for prompts.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Write one line of text.
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Read one line, without its line terminator.
    ///
    /// End of input reads as an empty line.
    fn read_line(&mut self) -> Result<String>;

    /// Show a prompt and read the reply.
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.write(prompt)?;
        self.read_line()
    }

    /// Read a single-character answer, `None` for a blank one.
    ///
    /// Reads a whole line and keeps its first non-blank character. Consoles
    /// that can read a single key override this and echo the answer with
    /// [`echo_answer`].
    fn read_answer(&mut self) -> Result<Option<char>> {
        let reply = self.read_line()?;
        Ok(first_answer(&reply))
    }

    /// Show a prompt and read a single-character answer.
    fn prompt_char(&mut self, prompt: &str) -> Result<Option<char>> {
        self.write(prompt)?;
        self.read_answer()
    }
}

/// First non-blank character of a reply line.
pub fn first_answer(reply: &str) -> Option<char> {
    reply.trim().chars().next()
}

/// Answer given by a single key; Enter, space and control keys are blank.
pub fn key_answer(key: char) -> Option<char> {
    Some(key).filter(|c| !c.is_whitespace() && !c.is_control())
}

/// Upper-cased echo of a single-key answer, empty for a blank one.
pub fn echo_answer(answer: Option<char>) -> String {
    answer.map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// Strip a trailing `\n` or `\r\n`.
pub fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
