//! Linear scan of the applications namespace.

use crate::config::PromptText;
use crate::console::Console;
use crate::error::{Result, ShortcutError};
use crate::invocation::SearchTerm;
use crate::shell::{AppEntry, AppsNamespace};
use tracing::{debug, info};

/// The application the operator accepted.
#[derive(Debug)]
pub struct SelectedApp<T> {
    /// Display name, used as the link description.
    pub display_name: String,
    /// Absolute identifier of the entry.
    pub target: T,
}

/// Whether a confirmation answer rejects the candidate.
///
/// Anything but `N`/`n`, including a blank answer, accepts.
pub fn is_rejection(answer: Option<char>) -> bool {
    answer.is_some_and(|c| c.eq_ignore_ascii_case(&PromptText::REJECT))
}

/// Scan the namespace for the first match the operator accepts.
///
/// Entries are visited in enumeration order and the scan stops at the first
/// accepted match. Each textual match is shown with its AppUserModelID and
/// confirmed on the console.
///
/// # Errors
///
/// [`ShortcutError::NotFound`] when the scan runs out of entries, or the
/// first platform/console error encountered.
pub fn find_application<N, C>(
    namespace: &N,
    term: &SearchTerm,
    console: &mut C,
) -> Result<SelectedApp<N::Target>>
where
    N: AppsNamespace,
    C: Console,
{
    for entry in namespace.entries()? {
        let entry = entry?;
        let display_name = entry.display_name()?;
        if !term.matches(&display_name) {
            continue;
        }

        let app_id = entry.app_user_model_id()?;
        console.write_line("")?;
        console.write_line(&format!("Found '{}' ({}).", display_name, app_id))?;
        let answer = console.prompt_char(PromptText::CONFIRM)?;
        if is_rejection(answer) {
            debug!("Operator rejected {}", display_name);
            continue;
        }

        let target = namespace.absolute_target(&entry)?;
        info!("Selected {} ({})", display_name, app_id);
        console.write_line("")?;
        return Ok(SelectedApp {
            display_name,
            target,
        });
    }

    console.write_line("")?;
    console.write_line(PromptText::NOT_FOUND)?;
    Err(ShortcutError::NotFound)
}
