use gloo::console;
use shared::LedgerCache;

/// Persistent cache backed by the browser's `localStorage`.
///
/// Write failures (storage full, private mode) are logged and swallowed;
/// losing the cache only costs the instant reload, never the dashboard.
#[derive(Clone, Default)]
pub struct BrowserCache;

impl BrowserCache {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl LedgerCache for BrowserCache {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match self.storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    console::error!("failed to persist cache entry", key.to_string());
                }
            }
            None => console::error!("localStorage is unavailable"),
        }
    }
}
