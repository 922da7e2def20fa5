//! Shared host-bundle model for runtime composition.

use std::rc::Rc;

use crate::{
    ExternalUrlService, MemoryExternalUrlService, MemoryMessageDispatchService,
    MemoryPrefsStore, MessageDispatchService, NoopExternalUrlService, NoopMessageDispatchService,
    NoopPrefsStore, PrefsStore,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// In-memory adapters used by tests and host builds.
    Memory,
    /// Placeholder adapters with no side effects.
    Noop,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
            Self::Noop => "noop",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime and app crates decoupled from browser adapter
/// details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight typed preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Contact message hand-off.
    pub dispatch: Rc<dyn MessageDispatchService>,
    /// External document navigation.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle whose services do nothing (dispatch and navigation report unavailable).
    pub fn noop() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            dispatch: Rc::new(NoopMessageDispatchService),
            external_urls: Rc::new(NoopExternalUrlService),
            host_strategy: HostStrategy::Noop,
        }
    }

    /// Bundle backed by fresh in-memory adapters.
    pub fn memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            dispatch: Rc::new(MemoryMessageDispatchService::default()),
            external_urls: Rc::new(MemoryExternalUrlService::default()),
            host_strategy: HostStrategy::Memory,
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::noop()
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_bundle_round_trips_prefs_through_the_trait_object() {
        let host = HostServices::memory();
        block_on(host.prefs.save_pref("settings-volume", "40")).expect("save");
        assert_eq!(
            block_on(host.prefs.load_pref("settings-volume")).expect("load"),
            Some("40".to_string())
        );
        assert_eq!(host.host_strategy.as_str(), "memory");
    }

    #[test]
    fn default_bundle_is_noop() {
        assert_eq!(HostServices::default().host_strategy, HostStrategy::Noop);
    }
}
