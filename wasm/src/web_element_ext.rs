use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;

use crate::web_error_handling::JsResult;

pub trait WebEventTargetExt {
    // Listeners on long-lived page elements are never removed, so the closure
    // is leaked on purpose. Per-edit listeners use `add_event_listener_kept`.
    fn add_event_listener_and_forget<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<()>;

    /// Registers `listener` and hands the closure back; it must outlive the element.
    fn add_event_listener_kept<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<Closure<dyn FnMut(E) -> JsResult<()>>>;
}

impl WebEventTargetExt for web_sys::EventTarget {
    fn add_event_listener_and_forget<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<()> {
        self.add_event_listener_kept(event_type, listener)?.forget();
        Ok(())
    }

    fn add_event_listener_kept<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<Closure<dyn FnMut(E) -> JsResult<()>>> {
        let closure = Closure::<dyn FnMut(E) -> JsResult<()>>::new(listener);
        self.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(closure)
    }
}
