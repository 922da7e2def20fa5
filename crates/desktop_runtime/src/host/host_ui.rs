#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use platform_host_web::document;

use crate::model::WindowId;

pub(super) fn focus_window_body(window_id: WindowId) {
    focus_element_deferred(window_id.body_dom_id());
}

/// Focus is deferred a tick so an element that just mounted is in the DOM.
pub(super) fn focus_element_deferred(dom_id: String) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let Some(element) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&dom_id))
            else {
                return;
            };
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dom_id;
}

pub(super) fn reload_page() {
    document::reload_page();
}

pub(super) fn viewport_profile() -> (f64, bool) {
    let (width, _) = document::viewport_size();
    (width, document::prefers_coarse_pointer())
}
