//! Scoped COM initialization.

use super::check;
use crate::error::Result;
use std::marker::PhantomData;
use tracing::debug;
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};

/// Keeps COM initialized on the current thread while alive.
///
/// The shell objects are apartment-threaded, so the guard is not `Send`: it
/// must be dropped on the thread that created it, after every interface
/// obtained under it.
pub struct ComGuard {
    _not_send: PhantomData<*const ()>,
}

impl ComGuard {
    /// Initialize a single-threaded apartment for the calling thread.
    pub fn new() -> Result<Self> {
        // SAFETY: balanced by CoUninitialize in Drop, on the same thread since
        // the guard cannot leave it.
        let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
        check("CoInitializeEx", hr.ok())?;
        debug!("COM initialized");
        Ok(Self {
            _not_send: PhantomData,
        })
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        // SAFETY: CoInitializeEx succeeded in `new` on this thread.
        unsafe { CoUninitialize() };
        debug!("COM uninitialized");
    }
}
