//! The shortcut creation flow.

use crate::config::{AppConfig, PromptText, RunConfig};
use crate::console::Console;
use crate::error::{Result, ShortcutError};
use crate::invocation::{Invocation, SearchTerm};
use crate::output::resolve_output_path;
use crate::search::{find_application, SelectedApp};
use crate::shell::ShellBackend;
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedShortcut {
    /// Display name of the application, also the link description.
    pub display_name: String,
    /// Where the link was written.
    pub path: PathBuf,
}

/// Print the two-line usage text.
pub fn write_usage<C: Console>(console: &mut C) -> Result<()> {
    console.write_line(&format!(
        "Usage: {} {}",
        AppConfig::APP_NAME,
        AppConfig::USAGE_ARGS
    ))?;
    console.write_line(AppConfig::ABOUT)
}

/// Drives one run: search term, scan, output path, link.
#[derive(Debug, Clone, Default)]
pub struct ShortcutCreator {
    config: RunConfig,
}

impl ShortcutCreator {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Run the whole flow.
    ///
    /// `open_backend` is only called once a non-empty search term is known, so
    /// usage errors and an empty term never touch the shell. The backend and
    /// every handle taken from it are dropped before this returns, on success
    /// and on every error path.
    ///
    /// # Arguments
    ///
    /// * `search_term` - First positional argument, if any
    /// * `output_file` - Second positional argument, if any
    /// * `console` - Operator console
    /// * `open_backend` - Opens the shell backend
    pub fn run<B, C, F>(
        &self,
        search_term: Option<String>,
        output_file: Option<String>,
        console: &mut C,
        open_backend: F,
    ) -> Result<CreatedShortcut>
    where
        B: ShellBackend,
        C: Console,
        F: FnOnce() -> Result<B>,
    {
        let invocation = match Invocation::from_positionals(search_term, output_file) {
            Ok(invocation) => invocation,
            Err(ShortcutError::Usage) => {
                write_usage(console)?;
                return Err(ShortcutError::Usage);
            }
            Err(e) => return Err(e),
        };

        let raw_term = match invocation.search_term {
            Some(term) => term,
            None => console.prompt(PromptText::SEARCH_TERM)?,
        };
        let term = SearchTerm::new(raw_term).ok_or(ShortcutError::Aborted)?;

        console.write_line(&format!("Searching for '{}' . . .", term.as_str()))?;

        let backend = open_backend()?;
        debug!("Shell backend ready, scanning for '{}'", term);

        let SelectedApp {
            display_name,
            target,
        } = find_application(&backend, &term, console)?;

        let path = resolve_output_path(
            invocation.output_file.as_deref(),
            &display_name,
            self.config.empty_output,
            console,
        )?;

        backend.save_link(&display_name, &target, &path)?;
        info!("Saved shortcut to {} at {}", display_name, path.display());

        console.write_line("")?;
        console.write_line(&format!(
            "Success. Created shortcut to '{}' at {}.",
            display_name,
            path.display()
        ))?;

        Ok(CreatedShortcut { display_name, path })
    }
}
