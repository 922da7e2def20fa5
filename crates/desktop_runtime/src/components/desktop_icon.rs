use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::{
    gesture::{GestureRelease, PointerGesture},
    model::Position,
    window_manager::DragSession,
};

/// Delay between consecutive icons' entrance animations.
const ICON_STAGGER_MS: usize = 50;

#[component]
/// Desktop shortcut. Free-form mode: press and move to drag, quick press to open.
/// Compact mode: static grid cell, click to open.
pub(super) fn DesktopIcon(
    window_id: WindowId,
    label: &'static str,
    icon: IconName,
    /// Free-form starting position.
    home: Position,
    /// Position in the icon list, drives the entrance stagger.
    order: usize,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let policy = runtime.config().gesture;
    let compact = Signal::derive(move || runtime.state.with(|desktop| desktop.compact_mode));
    // Icons are not windows; their position never reaches the store.
    let position = create_rw_signal(home);
    let dragging = create_rw_signal(false);
    let gesture_listeners = ActiveGesture::new();

    let open = move || runtime.dispatch_action(DesktopAction::OpenWindow(window_id));

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if compact.get_untracked() || !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();

        let start = pointer_from_pointer_event(&ev);
        let drag = DragSession::begin(start, position.get_untracked());
        let gesture = Rc::new(Cell::new(PointerGesture::begin(policy, start, ev.time_stamp())));
        let tracked = Rc::clone(&gesture);
        gesture_listeners.begin(
            move |ev| {
                let pointer = pointer_from_pointer_event(&ev);
                let mut current = tracked.get();
                if current.track(pointer) {
                    dragging.set(true);
                    position.set(drag.position_at(pointer));
                }
                tracked.set(current);
            },
            move |ev| {
                dragging.set(false);
                let release = gesture
                    .get()
                    .release(pointer_from_pointer_event(&ev), ev.time_stamp());
                if release == GestureRelease::Click {
                    open();
                }
            },
        );
    });

    // In free-form mode pointer presses open through the gesture; only keyboard activation
    // (click with no press count) comes through here.
    let on_click = Callback::new(move |ev: web_sys::MouseEvent| {
        if compact.get_untracked() || ev.detail() == 0 {
            open();
        }
    });

    let style = Signal::derive(move || {
        let delay = order * ICON_STAGGER_MS;
        if compact.get() {
            format!("animation-delay:{delay}ms;")
        } else {
            let Position { x, y } = position.get();
            format!("left:{x}px;top:{y}px;animation-delay:{delay}ms;")
        }
    });

    view! {
        <DesktopIconButton
            style
            aria_label=format!("Open {label}")
            dragging=dragging.read_only()
            on_click
            on_pointerdown
        >
            <span class="desktop-icon-glyph" aria-hidden="true">
                <Icon icon size=IconSize::Lg />
            </span>
            <span class="desktop-icon-label">{label}</span>
        </DesktopIconButton>
    }
}
