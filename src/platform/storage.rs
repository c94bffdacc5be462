//! Key/value storage
//!
//! LocalStorage on wasm32. Native builds keep a per-thread map so the same
//! code paths run in tests and the headless demo.

/// Read a stored string
#[cfg(target_arch = "wasm32")]
pub fn get_item(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Write a string. Returns false if storage is unavailable or full.
#[cfg(target_arch = "wasm32")]
pub fn set_item(key: &str, value: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .map(|storage| storage.set_item(key, value).is_ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static MEMORY: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn get_item(key: &str) -> Option<String> {
    MEMORY.with(|m| m.borrow().get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_item(key: &str, value: &str) -> bool {
    MEMORY.with(|m| m.borrow_mut().insert(key.to_string(), value.to_string()));
    true
}
