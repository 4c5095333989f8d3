use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::error::{AppError, AppResult};

/// Durable key/value storage (localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    pub fn new() -> Option<Self> {
        get_local_storage().map(|storage| Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("could not write '{}': {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("could not remove '{}': {:?}", key, e)))
    }
}

/// Process-lifetime storage, used when localStorage is blocked (private mode)
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorage when available, memory otherwise
pub fn default_store() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::new() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("⚠️ [STORAGE] localStorage unavailable, session will not survive a reload");
            Rc::new(MemoryStorage::new())
        }
    }
}

pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = store.get(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Discarding unreadable '{}': {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let store = MemoryStorage::new();
        store.set("token", "abc").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        store.remove("token").unwrap();
        assert!(store.get("token").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_json_ignores_garbage() {
        let store = MemoryStorage::new();
        store.set("user", "{not json").unwrap();
        let loaded: Option<Vec<u32>> = load_json(&store, "user");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clones_share_items() {
        let store = MemoryStorage::new();
        let other = store.clone();
        save_json(&store, "numbers", &vec![1, 2, 3]).unwrap();
        assert_eq!(load_json::<Vec<u32>>(&other, "numbers"), Some(vec![1, 2, 3]));
        assert_eq!(other.len(), 1);
    }
}
