//! Desktop shell UI composition and interaction surfaces.

mod boot_screen;
mod desktop_icon;
mod gesture_listeners;
mod taskbar;
mod window;

use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};
use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconGrid, DesktopIconButton, DesktopRoot, DesktopWindowLayer,
    DismissLayer, Icon, IconName, IconSize, MenuItem, MenuSurface, ResizeHandle, Taskbar,
    TaskbarButton, TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{
    boot_screen::BootScreen, desktop_icon::DesktopIcon, gesture_listeners::ActiveGesture,
    taskbar::DesktopTaskbar, window::DesktopWindow,
};
use crate::{
    apps,
    model::{PointerPosition, ResizeEdge, WindowId, WindowRecord},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Boot and login until a user signs in, then the desktop.
pub fn DesktopShell(
    /// Window to open right after sign-in, e.g. from a `?open=` link.
    #[prop(optional_no_strip)]
    launch: Option<WindowId>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let signed_in = create_memo(move |_| runtime.state.with(|desktop| desktop.session.is_some()));

    let sync_compact_mode = move || {
        let (width, coarse_pointer) = runtime.host.get_value().viewport_profile();
        let compact = runtime.config().is_compact(width, coarse_pointer);
        if runtime.state.with_untracked(|desktop| desktop.compact_mode) != compact {
            runtime.dispatch_action(DesktopAction::SetCompactMode(compact));
        }
    };
    sync_compact_mode();
    let resize_listener = window_event_listener(ev::resize, move |_| sync_compact_mode());
    on_cleanup(move || resize_listener.remove());

    view! {
        <Show when=move || signed_in.get() fallback=|| view! { <BootScreen /> }>
            <Desktop launch />
        </Show>
    }
}

#[component]
fn Desktop(launch: Option<WindowId>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let compact = Signal::derive(move || runtime.state.with(|desktop| desktop.compact_mode));

    if let Some(window_id) = launch {
        runtime.dispatch_action(DesktopAction::OpenWindow(window_id));
    }

    view! {
        <DesktopRoot id="desktop-shell-root" compact>
            <DesktopBackdrop>
                <div data-ui-slot="atmosphere" aria-hidden="true"></div>
                <DesktopIconGrid compact>
                    {apps::desktop_icon_apps()
                        .enumerate()
                        .map(|(order, (app, label, home))| {
                            view! {
                                <DesktopIcon
                                    window_id=app.window_id
                                    label
                                    icon=app.icon
                                    home
                                    order
                                />
                            }
                        })
                        .collect_view()}
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    {WindowId::ALL
                        .into_iter()
                        .map(|window_id| view! { <DesktopWindow window_id /> })
                        .collect_view()}
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <DesktopTaskbar />
        </DesktopRoot>
    }
}

/// Press filter shared by every draggable surface: left button for mice, primary contact otherwise.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
