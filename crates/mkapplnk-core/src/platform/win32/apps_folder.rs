//! Enumeration of the `AppsFolder` known folder.

use super::{check, ComGuard, IdList};
use crate::error::{Result, ShortcutError};
use crate::shell::{AppEntry, AppsNamespace};
use tracing::debug;
use windows::core::BSTR;
use windows::Win32::Foundation::{E_POINTER, HANDLE, HWND, S_OK};
use windows::Win32::Storage::EnhancedStorage::{PKEY_AppUserModel_ID, PKEY_ItemNameDisplay};
use windows::Win32::UI::Shell::PropertiesSystem::{
    IPropertyStore, IPropertyStoreFactory, GPS_DEFAULT,
};
use windows::Win32::UI::Shell::{
    FOLDERID_AppsFolder, IEnumIDList, IShellFolder, SHGetDesktopFolder, SHGetKnownFolderIDList,
    SHCONTF_FASTITEMS, SHCONTF_NONFOLDERS,
};

/// The installed applications folder.
///
/// Fields drop in declaration order, so the folder interface and its
/// identifier are released before COM is uninitialized.
pub struct WindowsShell {
    folder: IShellFolder,
    folder_id: IdList,
    _com: ComGuard,
}

impl WindowsShell {
    /// Initialize COM and bind to the `AppsFolder`.
    pub fn open() -> Result<Self> {
        let com = ComGuard::new()?;

        // SAFETY: COM is initialized on this thread for the lifetime of `com`.
        let desktop = check("SHGetDesktopFolder", unsafe { SHGetDesktopFolder() })?;

        // SAFETY: FOLDERID_AppsFolder is a static GUID; a null token means the
        // current user.
        let raw_id = check("SHGetKnownFolderIDList", unsafe {
            SHGetKnownFolderIDList(&FOLDERID_AppsFolder, 0, HANDLE::default())
        })?;
        // SAFETY: the list was allocated for us by the shell.
        let folder_id = unsafe { IdList::from_raw(raw_id) }
            .ok_or_else(|| ShortcutError::platform("SHGetKnownFolderIDList", E_POINTER.0, 0))?;

        // SAFETY: `folder_id` is an absolute list and outlives the call.
        let folder: IShellFolder = check("BindToObject", unsafe {
            desktop.BindToObject(folder_id.as_ptr(), None)
        })?;

        debug!("Bound to AppsFolder");
        Ok(Self {
            folder,
            folder_id,
            _com: com,
        })
    }

    fn child_ids(&self) -> Result<ChildIds> {
        let mut enumerator: Option<IEnumIDList> = None;
        let flags = (SHCONTF_FASTITEMS.0 | SHCONTF_NONFOLDERS.0) as u32;
        // SAFETY: `enumerator` is a valid out slot for the duration of the call.
        let hr = unsafe { self.folder.EnumObjects(HWND::default(), flags, &mut enumerator) };
        check("EnumObjects", hr.ok())?;
        Ok(ChildIds { enumerator })
    }

    fn bind_entry(&self, child: IdList) -> Result<WindowsAppEntry> {
        // SAFETY: `child` is a relative list of this folder and outlives the call.
        let factory: IPropertyStoreFactory = check("BindToObject", unsafe {
            self.folder.BindToObject(child.as_ptr(), None)
        })?;
        // SAFETY: plain COM call on a live interface.
        let store: IPropertyStore = check("GetPropertyStore", unsafe {
            factory.GetPropertyStore(GPS_DEFAULT, None)
        })?;
        Ok(WindowsAppEntry { store, child })
    }
}

impl AppsNamespace for WindowsShell {
    type Entry = WindowsAppEntry;
    type Target = IdList;

    fn entries(&self) -> Result<Box<dyn Iterator<Item = Result<WindowsAppEntry>> + '_>> {
        let ids = self.child_ids()?;
        Ok(Box::new(
            ids.map(move |child| child.and_then(|child| self.bind_entry(child))),
        ))
    }

    fn absolute_target(&self, entry: &WindowsAppEntry) -> Result<IdList> {
        IdList::combine(&self.folder_id, &entry.child)
    }
}

/// Lazily pulls child identifiers one at a time.
struct ChildIds {
    enumerator: Option<IEnumIDList>,
}

impl Iterator for ChildIds {
    type Item = Result<IdList>;

    fn next(&mut self) -> Option<Self::Item> {
        let enumerator = self.enumerator.as_ref()?;
        let mut slot = [std::ptr::null_mut(); 1];
        // SAFETY: `slot` has room for the single requested item.
        let hr = unsafe { enumerator.Next(&mut slot, None) };

        if hr != S_OK {
            // S_FALSE marks the end; anything negative is a failure.
            self.enumerator = None;
            return hr.ok().err().map(|err| check::<IdList>("Next", Err(err)));
        }

        // SAFETY: Next handed us ownership of the returned list.
        unsafe { IdList::from_raw(slot[0]) }.map(Ok)
    }
}

/// One application entry with its property store.
///
/// The property store is released before the identifier list.
pub struct WindowsAppEntry {
    store: IPropertyStore,
    child: IdList,
}

#[derive(Clone, Copy)]
enum Property {
    ItemNameDisplay,
    AppUserModelId,
}

impl WindowsAppEntry {
    fn read_string(&self, property: Property) -> Result<String> {
        let (call, key) = match property {
            Property::ItemNameDisplay => ("GetValue(ItemNameDisplay)", &PKEY_ItemNameDisplay),
            Property::AppUserModelId => ("GetValue(AppUserModel_ID)", &PKEY_AppUserModel_ID),
        };
        // SAFETY: `key` points at a static PROPERTYKEY; the value is owned and
        // cleared when dropped.
        let value = check(call, unsafe { self.store.GetValue(key) })?;
        if value.is_empty() {
            return Ok(String::new());
        }
        let text = check(call, BSTR::try_from(&value))?;
        Ok(text.to_string())
    }
}

impl AppEntry for WindowsAppEntry {
    fn display_name(&self) -> Result<String> {
        self.read_string(Property::ItemNameDisplay)
    }

    fn app_user_model_id(&self) -> Result<String> {
        self.read_string(Property::AppUserModelId)
    }
}
