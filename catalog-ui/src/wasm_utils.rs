//! Cross-platform utilities that work in both WASM and native contexts

#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    pub fn set_panic_hook() {
        console_error_panic_hook::set_once();
    }

    pub fn now_timestamp() -> u64 {
        js_sys::Date::now() as u64
    }

    pub fn spawn_async<F>(future: F)
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native_impl {
    pub fn set_panic_hook() {
        // Native panics already reach stderr
    }

    pub fn now_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Runs `future` on the ambient tokio runtime, or logs and drops it when there is none.
    pub fn spawn_async<F>(future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(future);
            }
            Err(e) => log::error!("No async runtime available: {}", e),
        }
    }
}

// Re-export the appropriate implementation
#[cfg(target_arch = "wasm32")]
pub use wasm_impl::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native_impl::*;
