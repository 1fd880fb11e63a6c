//! Output path resolution.

use crate::config::{AppConfig, EmptyOutputPolicy, PromptText};
use crate::console::Console;
use crate::error::{Result, ShortcutError};
use std::path::PathBuf;
use tracing::debug;

/// Default link file name for an application: `<display name>.lnk`.
///
/// Characters Windows does not allow in file names are replaced with `_`.
/// The extension is added exactly once.
pub fn default_file_name(display_name: &str) -> String {
    let safe: String = display_name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let suffix = format!(".{}", AppConfig::LINK_EXTENSION);
    let has_suffix = safe.len() > suffix.len()
        && safe
            .get(safe.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(&suffix));

    if has_suffix {
        safe
    } else {
        format!("{}{}", safe, suffix)
    }
}

fn output_prompt(policy: EmptyOutputPolicy, display_name: &str) -> String {
    match policy {
        EmptyOutputPolicy::Abort => PromptText::OUTPUT_SKIP.to_string(),
        EmptyOutputPolicy::DeriveFromName => format!(
            "Filename to save as (<enter> for '{}'): ",
            default_file_name(display_name)
        ),
    }
}

/// Resolve where the link is saved.
///
/// Uses `explicit` when given, otherwise prompts. An empty answer is handled
/// by `policy`.
pub fn resolve_output_path<C: Console>(
    explicit: Option<&str>,
    display_name: &str,
    policy: EmptyOutputPolicy,
    console: &mut C,
) -> Result<PathBuf> {
    let file_name = match explicit {
        Some(name) => name.to_string(),
        None => console.prompt(&output_prompt(policy, display_name))?,
    };

    if !file_name.is_empty() {
        return Ok(PathBuf::from(file_name));
    }

    match policy {
        EmptyOutputPolicy::Abort => Err(ShortcutError::Aborted),
        EmptyOutputPolicy::DeriveFromName => {
            let derived = default_file_name(display_name);
            debug!("No output file given, using {}", derived);
            Ok(PathBuf::from(derived))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name_adds_lnk() {
        assert_eq!(default_file_name("Notepad"), "Notepad.lnk");
        assert_eq!(default_file_name("Visual Studio Code"), "Visual Studio Code.lnk");
    }

    #[test]
    fn test_default_file_name_no_double_extension() {
        assert_eq!(default_file_name("Shortcut.lnk"), "Shortcut.lnk");
        assert_eq!(default_file_name("Shortcut.LNK"), "Shortcut.LNK");
        assert_eq!(default_file_name(".lnk"), ".lnk.lnk");
    }

    #[test]
    fn test_default_file_name_replaces_reserved_characters() {
        assert_eq!(default_file_name("Xbox: Game Bar"), "Xbox_ Game Bar.lnk");
        assert_eq!(default_file_name("A/B\\C?"), "A_B_C_.lnk");
        assert_eq!(default_file_name("Tab\tName"), "Tab_Name.lnk");
    }

    #[test]
    fn test_default_file_name_multibyte() {
        assert_eq!(default_file_name("計算機"), "計算機.lnk");
        assert_eq!(default_file_name("é"), "é.lnk");
    }

    #[test]
    fn test_prompt_mentions_default() {
        assert_eq!(
            output_prompt(EmptyOutputPolicy::DeriveFromName, "Notepad"),
            "Filename to save as (<enter> for 'Notepad.lnk'): "
        );
        assert_eq!(
            output_prompt(EmptyOutputPolicy::Abort, "Notepad"),
            PromptText::OUTPUT_SKIP
        );
    }
}
