use web_sys::{window, Storage};
use hangman_shared::session::{SessionStore, StorageProvider};

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// `localStorage` backed provider. Private browsing and disabled storage make
/// every call a logged no-op.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl StorageProvider for BrowserStorage {
    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("failed to persist {}: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable, {} not saved", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn session_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
