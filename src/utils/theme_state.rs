use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The persisted light/dark preference. `false` means light mode.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        Self {
            is_dark: !self.is_dark,
        }
    }
}

/// Where the preference lives between page loads.
#[derive(Clone)]
pub enum StorageBackend {
    /// Browser local storage. Off wasm this backend reads nothing and
    /// accepts nothing.
    Browser,
    /// Shared in-memory map, used by tests.
    Memory(Rc<RefCell<HashMap<String, String>>>),
    /// Storage that always fails, mimicking local storage disabled by the
    /// browser.
    Disabled,
}

/// Persisted theme preference with a single flip mutation.
///
/// `toggle` writes storage before handing back the new state, so a reload
/// right after toggling sees the new value. When storage is unavailable the
/// session continues in-memory and the next load falls back to the caller's
/// default.
#[derive(Clone)]
pub struct ThemeStore {
    key: String,
    backend: StorageBackend,
}

impl ThemeStore {
    pub fn browser(key: impl Into<String>) -> Self {
        Self::with_backend(key, StorageBackend::Browser)
    }

    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::with_backend(key, StorageBackend::Memory(Rc::default()))
    }

    pub fn disabled(key: impl Into<String>) -> Self {
        Self::with_backend(key, StorageBackend::Disabled)
    }

    pub fn with_backend(key: impl Into<String>, backend: StorageBackend) -> Self {
        Self {
            key: key.into(),
            backend,
        }
    }

    /// Read the stored preference, falling back to `default` when the key is
    /// absent or holds something unparseable.
    pub fn load(&self, default: bool) -> ThemeState {
        ThemeState {
            is_dark: self.read().unwrap_or(default),
        }
    }

    /// Flip the preference, persisting the new value before returning it.
    pub fn toggle(&self, current: ThemeState) -> ThemeState {
        let next = current.toggled();
        if !self.write(next.is_dark) {
            log::warn!("theme storage write failed, preference kept in memory only");
        }
        next
    }

    fn read(&self) -> Option<bool> {
        let raw = match &self.backend {
            StorageBackend::Browser => browser_get(&self.key),
            StorageBackend::Memory(map) => map.borrow().get(&self.key).cloned(),
            StorageBackend::Disabled => None,
        };
        raw.and_then(|value| value.parse::<bool>().ok())
    }

    fn write(&self, value: bool) -> bool {
        match &self.backend {
            StorageBackend::Browser => browser_set(&self.key, &value.to_string()),
            StorageBackend::Memory(map) => {
                map.borrow_mut().insert(self.key.clone(), value.to_string());
                true
            }
            StorageBackend::Disabled => false,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_get(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_get(_key: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn browser_set(key: &str, value: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .map(|storage| storage.set_item(key, value).is_ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_set(_key: &str, _value: &str) -> bool {
    false
}
