//! Shared test doubles: an in-memory apps folder and a scripted console.

#![allow(dead_code)]

use mkapplnk_core::{
    AppEntry, AppsNamespace, Console, LinkWriter, Result, ShortcutError,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// `E_FAIL` as the shell reports it.
pub const E_FAIL: i32 = 0x8000_4005_u32 as i32;

/// Counts mock handles taken and released.
#[derive(Debug, Default)]
pub struct Counters {
    acquired: Cell<usize>,
    released: Cell<usize>,
}

impl Counters {
    pub fn acquired(&self) -> usize {
        self.acquired.get()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }

    pub fn live(&self) -> usize {
        self.acquired() - self.released()
    }
}

/// Stand-in for any platform handle.
#[derive(Debug)]
pub struct Handle {
    counters: Rc<Counters>,
}

impl Handle {
    fn acquire(counters: &Rc<Counters>) -> Self {
        counters.acquired.set(counters.acquired.get() + 1);
        Self {
            counters: Rc::clone(counters),
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.counters.released.set(self.counters.released.get() + 1);
    }
}

/// Platform call to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Open,
    Enumerate,
    Bind,
    DisplayName,
    AppUserModelId,
    Combine,
    Save,
}

impl FailAt {
    pub const ALL: [FailAt; 7] = [
        FailAt::Open,
        FailAt::Enumerate,
        FailAt::Bind,
        FailAt::DisplayName,
        FailAt::AppUserModelId,
        FailAt::Combine,
        FailAt::Save,
    ];
}

/// A link the mock wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedLink {
    pub description: String,
    pub target: String,
    pub path: PathBuf,
}

/// In-memory apps folder.
///
/// Relative output paths resolve against `working_dir`. Links are written to
/// disk as `description\ntarget`.
pub struct MockShell {
    apps: Vec<(String, String)>,
    fail_at: Option<FailAt>,
    working_dir: PathBuf,
    counters: Rc<Counters>,
    visited: Rc<RefCell<Vec<String>>>,
    saved: Rc<RefCell<Vec<SavedLink>>>,
    _folder: Handle,
}

impl MockShell {
    pub fn new(apps: &[(&str, &str)], working_dir: &Path) -> Self {
        let counters = Rc::new(Counters::default());
        let folder = Handle::acquire(&counters);
        Self {
            apps: apps
                .iter()
                .map(|(name, aumid)| (name.to_string(), aumid.to_string()))
                .collect(),
            fail_at: None,
            working_dir: working_dir.to_path_buf(),
            counters,
            visited: Rc::new(RefCell::new(Vec::new())),
            saved: Rc::new(RefCell::new(Vec::new())),
            _folder: folder,
        }
    }

    pub fn failing_at(mut self, fail_at: FailAt) -> Self {
        self.fail_at = Some(fail_at);
        self
    }

    pub fn counters(&self) -> Rc<Counters> {
        Rc::clone(&self.counters)
    }

    /// Display names of entries pulled from the enumerator, in order.
    pub fn visited(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.visited)
    }

    pub fn saved(&self) -> Rc<RefCell<Vec<SavedLink>>> {
        Rc::clone(&self.saved)
    }

    /// Finish opening the folder the way the shell backend does: a desktop
    /// handle is held while binding and released afterwards.
    pub fn open(self) -> Result<Self> {
        let _desktop = Handle::acquire(&self.counters);
        if self.fails(FailAt::Open) {
            return Err(ShortcutError::platform("BindToObject", E_FAIL, 0));
        }
        Ok(self)
    }

    fn fails(&self, step: FailAt) -> bool {
        self.fail_at == Some(step)
    }
}

pub struct MockEntry {
    name: String,
    aumid: String,
    fail_at: Option<FailAt>,
    _store: Handle,
    _child: Handle,
}

impl AppEntry for MockEntry {
    fn display_name(&self) -> Result<String> {
        if self.fail_at == Some(FailAt::DisplayName) {
            return Err(ShortcutError::platform("GetValue(ItemNameDisplay)", E_FAIL, 0));
        }
        Ok(self.name.clone())
    }

    fn app_user_model_id(&self) -> Result<String> {
        if self.fail_at == Some(FailAt::AppUserModelId) {
            return Err(ShortcutError::platform("GetValue(AppUserModel_ID)", E_FAIL, 0));
        }
        Ok(self.aumid.clone())
    }
}

/// Absolute identifier of a mock entry.
pub struct MockTarget {
    pub path: String,
    _id: Handle,
}

impl AppsNamespace for MockShell {
    type Entry = MockEntry;
    type Target = MockTarget;

    fn entries(&self) -> Result<Box<dyn Iterator<Item = Result<MockEntry>> + '_>> {
        if self.fails(FailAt::Enumerate) {
            return Err(ShortcutError::platform("EnumObjects", E_FAIL, 0));
        }
        let enumerator = Handle::acquire(&self.counters);
        Ok(Box::new(self.apps.iter().map(move |(name, aumid)| {
            let _ = &enumerator;
            self.visited.borrow_mut().push(name.clone());
            let child = Handle::acquire(&self.counters);
            if self.fails(FailAt::Bind) {
                return Err(ShortcutError::platform("GetPropertyStore", E_FAIL, 0));
            }
            Ok(MockEntry {
                name: name.clone(),
                aumid: aumid.clone(),
                fail_at: self.fail_at,
                _store: Handle::acquire(&self.counters),
                _child: child,
            })
        })))
    }

    fn absolute_target(&self, entry: &MockEntry) -> Result<MockTarget> {
        if self.fails(FailAt::Combine) {
            return Err(ShortcutError::platform("ILCombine", E_FAIL, 8));
        }
        Ok(MockTarget {
            path: format!("shell:AppsFolder\\{}", entry.aumid),
            _id: Handle::acquire(&self.counters),
        })
    }
}

impl LinkWriter<MockTarget> for MockShell {
    fn save_link(&self, description: &str, target: &MockTarget, path: &Path) -> Result<()> {
        let _link = Handle::acquire(&self.counters);
        if self.fails(FailAt::Save) {
            return Err(ShortcutError::platform("Save", E_FAIL, 5));
        }
        let full_path = self.working_dir.join(path);
        std::fs::write(&full_path, format!("{}\n{}", description, target.path))?;
        self.saved.borrow_mut().push(SavedLink {
            description: description.to_string(),
            target: target.path.clone(),
            path: path.to_path_buf(),
        });
        Ok(())
    }
}

/// Console that answers from a script and records everything shown.
///
/// Once the script runs out every read returns an empty line.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    transcript: String,
    reads: usize,
}

impl ScriptedConsole {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn count(&self, needle: &str) -> usize {
        self.transcript.matches(needle).count()
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        self.reads += 1;
        Ok(self.replies.pop_front().unwrap_or_default())
    }
}
