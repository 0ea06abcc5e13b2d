use minigolf_core::error::CoreError;
use wasm_bindgen::prelude::*;

pub type JsResult<T> = Result<T, JsValue>;

#[macro_export]
macro_rules! rust_error {
    ($($arg:tt)*) => {
        wasm_bindgen::JsValue::from_str(&format!($($arg)*))
    };
}

/// Best-effort text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub fn view_error(value: JsValue) -> CoreError {
    CoreError::View(js_error_message(&value))
}

// Optimization potential: Remove or shrink the panic hook when the client is stable.
pub fn set_panic_hook() {
    use std::sync::Once;
    static SET_HOOK: Once = Once::new();
    SET_HOOK.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    });
}
