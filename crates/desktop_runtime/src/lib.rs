//! Desktop shell runtime: window store, geometry and gesture rules, reducer, and the Leptos
//! components that compose windows, desktop icons, the taskbar and the boot screen.

pub mod apps;
pub mod boot;
pub mod clock;
pub mod components;
pub mod config;
pub mod gesture;
pub mod model;
pub mod reducer;
pub mod store;
pub mod window_manager;

mod effect_executor;
mod host;
mod runtime_context;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{GesturePolicy, ShellConfig, DEFAULT_SHELL_CONFIG};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use store::WindowStore;
