//! Shell backend traits.
//!
//! These are the services the shortcut creator consumes: the installed
//! applications namespace, the per-entry property reads, identifier
//! combination and link persistence. [`crate::platform`] provides the real
//! implementation; tests provide their own.

use crate::error::Result;
use std::path::Path;

/// One entry of the applications namespace.
///
/// Holds the entry's identifier relative to the container. Dropping the entry
/// releases it.
pub trait AppEntry {
    /// Human-readable label, used for matching and as the link description.
    fn display_name(&self) -> Result<String>;

    /// Stable per-application identity string (AppUserModelID).
    fn app_user_model_id(&self) -> Result<String>;
}

/// The virtual container of installed applications.
pub trait AppsNamespace {
    /// Enumerated entry.
    type Entry: AppEntry;
    /// Absolute identifier of an entry, usable as a link target.
    type Target;

    /// Enumerate non-folder, fast-path entries in enumeration order.
    ///
    /// The iterator is lazy; entries not yet pulled are never visited.
    fn entries(&self) -> Result<Box<dyn Iterator<Item = Result<Self::Entry>> + '_>>;

    /// Combine the container's absolute identifier with an entry's relative one.
    fn absolute_target(&self, entry: &Self::Entry) -> Result<Self::Target>;
}

/// Persists shell links.
pub trait LinkWriter<T> {
    /// Write a link with `description` pointing at `target` to `path`,
    /// replacing any existing file.
    fn save_link(&self, description: &str, target: &T, path: &Path) -> Result<()>;
}

/// A complete backend: enumeration plus link persistence for its targets.
pub trait ShellBackend: AppsNamespace + LinkWriter<<Self as AppsNamespace>::Target> {}

impl<S> ShellBackend for S where S: AppsNamespace + LinkWriter<<S as AppsNamespace>::Target> {}
