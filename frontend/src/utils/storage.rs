//! Key/value persistence for browser state.
//!
//! On `wasm32` this is `window.localStorage`; host builds keep a per-thread
//! map so client code can run under native tests.

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read {}", key))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove {}", key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::{cell::RefCell, collections::HashMap};

    thread_local! {
        static ITEMS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        Ok(ITEMS.with(|items| items.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        ITEMS.with(|items| {
            items.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        ITEMS.with(|items| {
            items.borrow_mut().remove(key);
        });
        Ok(())
    }
}

pub use backend::{get_item, remove_item, set_item};
