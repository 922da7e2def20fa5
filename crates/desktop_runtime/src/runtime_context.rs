//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue and startup
//! preference hydration. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    config::ShellConfig,
    effect_executor,
    host::DesktopHostContext,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Presentational constants.
    pub config: StoredValue<ShellConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Effects emitted by the reducer, drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Current shell configuration.
    pub fn config(&self) -> ShellConfig {
        self.config.get_value()
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Overrides [`ShellConfig::default`].
    #[prop(optional)]
    config: Option<ShellConfig>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let config = store_value(config.unwrap_or_default());
    let state = create_rw_signal(DesktopState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        let new_effects = reduce_desktop(&mut desktop, action);
        if desktop != previous {
            state.set(desktop);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        config,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    host.get_value().install_display_prefs_hydration();
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
