//! Tab-scoped session holding the current [`AuthResult`].
//!
//! Pages never touch `window.sessionStorage` directly; they go through the
//! [`SessionContext`] provided at the app root.

use crate::{
    api::AuthResult,
    utils::storage::{self as storage_utils, StorageError},
};
use leptos::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub const SESSION_USER_KEY: &str = "user";

pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.sessionStorage`.
pub struct BrowserSessionStorage {
    storage: web_sys::Storage,
}

impl BrowserSessionStorage {
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            storage: storage_utils::session_storage()?,
        })
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|_| StorageError::Access {
            op: "read",
            key: key.to_string(),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Access {
                op: "write",
                key: key.to_string(),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|_| StorageError::Access {
                op: "remove",
                key: key.to_string(),
            })
    }
}

/// In-process stand-in used off the browser and in tests.
#[derive(Clone, Default)]
pub struct MemorySessionStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Clone)]
pub struct SessionContext {
    storage: Rc<dyn SessionStorage>,
}

impl SessionContext {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemorySessionStorage::default())
    }

    /// Browser session storage when running in a tab, memory otherwise.
    pub fn from_environment() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match BrowserSessionStorage::open() {
                Ok(storage) => return Self::new(storage),
                Err(err) => log::warn!("Falling back to in-memory session: {}", err),
            }
        }
        Self::in_memory()
    }

    /// A stored value that no longer parses is treated as no session.
    pub fn read(&self) -> Option<AuthResult> {
        let raw = match self.storage.get_item(SESSION_USER_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("{}", err);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("Discarding unreadable session: {}", err);
                None
            }
        }
    }

    pub fn write(&self, user: &AuthResult) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set_item(SESSION_USER_KEY, &raw)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(SESSION_USER_KEY)
    }
}

pub fn use_session() -> SessionContext {
    match use_context::<SessionContext>() {
        Some(ctx) => ctx,
        None => {
            let ctx = SessionContext::from_environment();
            provide_context(ctx.clone());
            ctx
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_session_storage_round_trips_user() {
        let session = SessionContext::new(BrowserSessionStorage::open().unwrap());
        let user: AuthResult = serde_json::from_value(json!({ "role": "Admin" })).unwrap();
        session.write(&user).unwrap();
        assert_eq!(session.read(), Some(user));
        session.clear().unwrap();
        assert!(session.read().is_none());
    }
}
