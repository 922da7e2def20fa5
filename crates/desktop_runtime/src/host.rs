//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches the document, timers or host services
//! goes through [`DesktopHostContext`].

mod boot;
mod host_ui;

use std::rc::Rc;

use platform_host::{ExternalUrlService, HostServices, MessageDispatchService, PrefsStore};

use crate::{model::WindowId, reducer::RuntimeEffect};

#[derive(Clone, Debug)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::default())
    }
}

impl DesktopHostContext {
    /// Wraps an injected host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured contact dispatch service.
    pub fn message_dispatch_service(&self) -> Rc<dyn MessageDispatchService> {
        self.services.dispatch.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Loads stored display preferences once and applies them to the document.
    pub fn install_display_prefs_hydration(&self) {
        boot::install_display_prefs_hydration(self.clone());
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowContent(window_id) => self.focus_window_content(window_id),
            RuntimeEffect::ReloadPage => host_ui::reload_page(),
        }
    }

    /// Moves keyboard focus into a window body once it has rendered.
    pub fn focus_window_content(&self, window_id: WindowId) {
        host_ui::focus_window_body(window_id);
    }

    /// Focuses a rendered element by DOM id on the next tick.
    pub fn focus_element(&self, dom_id: impl Into<String>) {
        host_ui::focus_element_deferred(dom_id.into());
    }

    /// Random sample in `[0, 1)` for cosmetic effects.
    pub fn random_unit(&self) -> f64 {
        platform_host::random_unit()
    }

    /// Current viewport width and whether the primary pointer is coarse.
    pub fn viewport_profile(&self) -> (f64, bool) {
        host_ui::viewport_profile()
    }
}
