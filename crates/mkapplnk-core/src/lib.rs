//! mkapplnk core - find an installed app and write a shortcut to it.
//!
//! Searches the shell's installed applications namespace (the `AppsFolder`,
//! which includes UWP / MSIX apps) for a display name containing a search
//! term, asks the operator to confirm each candidate, and saves a shell link
//! whose target is the app's item identifier rather than a file path.
//!
//! # Example
//!
//! ```rust,ignore
//! use mkapplnk_core::{platform, RunConfig, ShortcutCreator};
//!
//! fn main() -> mkapplnk_core::Result<()> {
//!     let creator = ShortcutCreator::new(RunConfig::default());
//!     let mut console = MyConsole::new();
//!     let created = creator.run(
//!         Some("Notepad".into()),
//!         Some("notepad.lnk".into()),
//!         &mut console,
//!         platform::open_shell,
//!     )?;
//!     println!("Wrote {}", created.path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod console;
pub mod creator;
pub mod error;
pub mod invocation;
pub mod output;
pub mod platform;
pub mod search;
pub mod shell;

// Re-export commonly used types
pub use config::{AppConfig, EmptyOutputPolicy, ExitStatus, PromptText, RunConfig};
pub use console::Console;
pub use creator::{write_usage, CreatedShortcut, ShortcutCreator};
pub use error::{exit_status, Result, ShortcutError};
pub use invocation::{Invocation, SearchTerm};
pub use output::{default_file_name, resolve_output_path};
pub use search::{find_application, is_rejection, SelectedApp};
pub use shell::{AppEntry, AppsNamespace, LinkWriter, ShellBackend};
