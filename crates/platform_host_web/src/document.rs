//! Document-level browser helpers used by the shell and the settings app.
//!
//! Every helper is a no-op (or returns a fixed fallback) outside `wasm32`, so callers do not need
//! their own target gates.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Viewport size reported when no browser window is available.
pub const FALLBACK_VIEWPORT: (f64, f64) = (1024.0, 768.0);

/// Formats the CSS filter applied for a brightness percentage.
pub fn brightness_filter_value(percent: u8) -> String {
    format!("brightness({})", f64::from(percent) / 100.0)
}

#[cfg(target_arch = "wasm32")]
fn root_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Applies the brightness filter to the document root.
pub fn apply_brightness_filter(percent: u8) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = root_element() else {
            leptos::logging::warn!("brightness filter skipped: no document root");
            return;
        };
        if let Err(err) = root
            .style()
            .set_property("filter", &brightness_filter_value(percent))
        {
            leptos::logging::warn!("brightness filter rejected: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = percent;
}

/// Adds or removes the `dark` class on the document root.
pub fn apply_dark_mode(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = root_element() else {
            leptos::logging::warn!("dark mode toggle skipped: no document root");
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force("dark", enabled) {
            leptos::logging::warn!("dark mode toggle rejected: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = enabled;
}

/// Returns the inner width and height of the browser window.
pub fn viewport_size() -> (f64, f64) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(FALLBACK_VIEWPORT.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(FALLBACK_VIEWPORT.1);
            return (width, height);
        }
    }

    FALLBACK_VIEWPORT
}

/// Returns whether the primary pointer is coarse (touch).
pub fn prefers_coarse_pointer() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.match_media("(pointer: coarse)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Returns the browser's current connectivity flag.
pub fn is_online() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.navigator().on_line())
            .unwrap_or(true)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Reloads the current page.
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().reload() {
            leptos::logging::warn!("page reload failed: {err:?}");
        }
    }
}

/// Reads the battery charge as a whole percentage, when the browser exposes it.
pub async fn battery_percent() -> Option<u8> {
    match crate::bridge::battery_level().await {
        Ok(level) => level.map(|level| (level * 100.0).round().clamp(0.0, 100.0) as u8),
        Err(err) => {
            leptos::logging::warn!("battery status unavailable: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn brightness_filter_uses_unit_fraction() {
        assert_eq!(brightness_filter_value(100), "brightness(1)");
        assert_eq!(brightness_filter_value(85), "brightness(0.85)");
        assert_eq!(brightness_filter_value(30), "brightness(0.3)");
    }

    #[test]
    fn host_fallbacks_are_stable() {
        assert_eq!(viewport_size(), FALLBACK_VIEWPORT);
        assert!(!prefers_coarse_pointer());
        assert!(is_online());
        assert_eq!(block_on(battery_percent()), None);
    }
}
