//! Concrete adapter factories for runtime wiring.

use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

use crate::{WebExternalUrlService, WebMessageDispatchConfig, WebMessageDispatchService, WebPrefsStore};

/// Builds the preferences adapter for the browser host.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Builds the external-URL adapter for the browser host.
pub fn external_url_service() -> WebExternalUrlService {
    WebExternalUrlService
}

/// Builds the message dispatch adapter posting to `config.endpoint`.
pub fn message_dispatch_service(config: WebMessageDispatchConfig) -> WebMessageDispatchService {
    WebMessageDispatchService::new(config)
}

/// Builds the browser host service bundle injected into the desktop runtime.
pub fn build_host_services(dispatch: WebMessageDispatchConfig) -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        dispatch: Rc::new(message_dispatch_service(dispatch)),
        external_urls: Rc::new(external_url_service()),
        host_strategy: HostStrategy::Browser,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_bundle_reports_browser_strategy() {
        let host = build_host_services(WebMessageDispatchConfig::default());
        assert_eq!(host.host_strategy, HostStrategy::Browser);
    }
}
