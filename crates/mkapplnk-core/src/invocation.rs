//! Positional command-line values.

use crate::config::AppConfig;
use crate::error::{Result, ShortcutError};
use std::fmt;

/// The two optional positional values of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Substring to look for; prompted for when absent.
    pub search_term: Option<String>,
    /// Where to save the shortcut; prompted for when absent.
    pub output_file: Option<String>,
}

impl Invocation {
    /// Build an invocation from the positional arguments.
    ///
    /// Fails with [`ShortcutError::Usage`] when the first one starts with a
    /// flag marker (`-` or `/`). Nothing else is validated here.
    pub fn from_positionals(search_term: Option<String>, output_file: Option<String>) -> Result<Self> {
        if search_term.as_deref().is_some_and(is_flag_like) {
            return Err(ShortcutError::Usage);
        }
        Ok(Self {
            search_term,
            output_file,
        })
    }
}

fn is_flag_like(arg: &str) -> bool {
    arg.starts_with(AppConfig::FLAG_MARKERS)
}

/// A non-empty, case-insensitive search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Returns `None` for an empty term, which ends the run as aborted.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return None;
        }
        let folded = raw.to_lowercase();
        Some(Self { raw, folded })
    }

    /// The term exactly as the operator typed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive substring test against a display name.
    pub fn matches(&self, display_name: &str) -> bool {
        display_name.to_lowercase().contains(&self.folded)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
