//! Single-key reads from an interactive console.

use crate::error::Result;
use std::io;
use tracing::debug;
use windows_sys::Win32::Foundation::{HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::System::Console::{
    GetConsoleMode, GetStdHandle, ReadConsoleW, SetConsoleMode, CONSOLE_MODE, ENABLE_ECHO_INPUT,
    ENABLE_LINE_INPUT, STD_INPUT_HANDLE,
};

/// Puts the previous input mode back when dropped.
struct InputModeGuard {
    handle: HANDLE,
    mode: CONSOLE_MODE,
}

impl Drop for InputModeGuard {
    fn drop(&mut self) {
        // SAFETY: `handle` is the console input handle the mode was read from.
        if unsafe { SetConsoleMode(self.handle, self.mode) } == 0 {
            debug!("Could not restore console mode: {}", io::Error::last_os_error());
        }
    }
}

/// Read one key without waiting for Enter and without echo.
///
/// `Ok(None)` when stdin is not a console, e.g. when it is redirected.
pub fn read_console_key() -> Result<Option<char>> {
    // SAFETY: GetStdHandle only reads process state.
    let handle = unsafe { GetStdHandle(STD_INPUT_HANDLE) };
    if handle.is_null() || handle == INVALID_HANDLE_VALUE {
        return Ok(None);
    }

    let mut mode: CONSOLE_MODE = 0;
    // SAFETY: `mode` is a valid out pointer; fails for non-console handles.
    if unsafe { GetConsoleMode(handle, &mut mode) } == 0 {
        return Ok(None);
    }

    let raw_mode = mode & !(ENABLE_LINE_INPUT | ENABLE_ECHO_INPUT);
    // SAFETY: `handle` is a console input handle.
    if unsafe { SetConsoleMode(handle, raw_mode) } == 0 {
        return Err(io::Error::last_os_error().into());
    }
    let _restore = InputModeGuard { handle, mode };

    let mut unit = [0u16; 1];
    let mut read = 0u32;
    // SAFETY: `unit` has room for the one UTF-16 unit requested.
    let ok = unsafe {
        ReadConsoleW(
            handle,
            unit.as_mut_ptr().cast(),
            1,
            &mut read,
            std::ptr::null(),
        )
    };
    if ok == 0 {
        return Err(io::Error::last_os_error().into());
    }
    if read == 0 {
        // Nothing read counts as Enter.
        return Ok(Some('\r'));
    }

    let key = char::decode_utf16(unit)
        .next()
        .and_then(|unit| unit.ok())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Ok(Some(key))
}
