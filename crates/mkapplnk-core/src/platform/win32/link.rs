//! Shell link persistence.

use super::{check, IdList, WindowsShell};
use crate::error::Result;
use crate::shell::LinkWriter;
use std::path::Path;
use tracing::debug;
use windows::core::{Interface, HSTRING};
use windows::Win32::Foundation::FALSE;
use windows::Win32::System::Com::{CoCreateInstance, IPersistFile, CLSCTX_INPROC_SERVER};
use windows::Win32::UI::Shell::{IShellLinkW, ShellLink};

impl LinkWriter<IdList> for WindowsShell {
    /// Save an `IShellLinkW` whose target is `target` rather than a file path,
    /// which is what makes links to packaged apps possible.
    fn save_link(&self, description: &str, target: &IdList, path: &Path) -> Result<()> {
        // SAFETY: COM stays initialized while `self` is alive.
        let link: IShellLinkW = check("CoCreateInstance", unsafe {
            CoCreateInstance(&ShellLink, None, CLSCTX_INPROC_SERVER)
        })?;

        let description = HSTRING::from(description);
        // SAFETY: the string and the identifier list outlive the calls; the
        // link copies both.
        check("SetDescription", unsafe { link.SetDescription(&description) })?;
        check("SetIDList", unsafe { link.SetIDList(target.as_ptr()) })?;

        let file: IPersistFile = check("QueryInterface", link.cast())?;
        let file_name = HSTRING::from(path.as_os_str());
        // SAFETY: `file_name` is a valid null-terminated wide string.
        check("Save", unsafe { file.Save(&file_name, FALSE) })?;

        debug!("Wrote shell link {}", path.display());
        Ok(())
    }
}
