//! Owned shell item identifier lists.

use super::last_error;
use crate::error::{Result, ShortcutError};
use std::ptr::NonNull;
use windows::Win32::Foundation::E_OUTOFMEMORY;
use windows::Win32::UI::Shell::Common::ITEMIDLIST;
use windows::Win32::UI::Shell::{ILCombine, ILFree};

/// A shell-allocated `ITEMIDLIST`, freed with `ILFree` on drop.
///
/// Whether the list is absolute or relative depends on where it came from;
/// [`IdList::combine`] turns a container's absolute list and a child's
/// relative one into an absolute list for the child.
pub struct IdList(NonNull<ITEMIDLIST>);

impl IdList {
    /// Take ownership of a list returned by the shell. `None` for null.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a list allocated by the shell allocator that no
    /// one else frees.
    pub(crate) unsafe fn from_raw(ptr: *mut ITEMIDLIST) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn as_ptr(&self) -> *const ITEMIDLIST {
        self.0.as_ptr()
    }

    /// Append `child` to `parent` in a newly allocated list.
    pub fn combine(parent: &IdList, child: &IdList) -> Result<IdList> {
        // SAFETY: both lists are valid for the duration of the call; ILCombine
        // copies them into a fresh allocation.
        let combined = unsafe { ILCombine(Some(parent.as_ptr()), Some(child.as_ptr())) };
        // SAFETY: the combined list is a new allocation owned only by us.
        unsafe { IdList::from_raw(combined) }
            .ok_or_else(|| ShortcutError::platform("ILCombine", E_OUTOFMEMORY.0, last_error()))
    }
}

impl Drop for IdList {
    fn drop(&mut self) {
        // SAFETY: the list is owned by this value and freed exactly once here.
        unsafe { ILFree(Some(self.as_ptr())) };
    }
}
