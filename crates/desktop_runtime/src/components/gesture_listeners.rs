//! Window-level pointer listeners for one in-flight drag or resize.
//!
//! Listeners are attached to `window` rather than the pressed element so the gesture keeps
//! tracking when the pointer leaves the surface. They are removed on pointer-up, on
//! pointer-cancel, when another gesture replaces this one, and when the owner unmounts.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;

#[derive(Clone, Copy)]
pub(super) struct ActiveGesture {
    listeners: StoredValue<Vec<WindowListenerHandle>>,
}

impl ActiveGesture {
    /// Creates an idle gesture slot owned by the current component.
    pub(super) fn new() -> Self {
        let gesture = Self {
            listeners: store_value(Vec::new()),
        };
        on_cleanup(move || gesture.end());
        gesture
    }

    /// Starts tracking, replacing any gesture still in flight.
    ///
    /// `on_release` runs once on pointer-up; a cancelled gesture ends without it.
    pub(super) fn begin(
        self,
        on_move: impl Fn(web_sys::PointerEvent) + 'static,
        on_release: impl Fn(web_sys::PointerEvent) + 'static,
    ) {
        self.end();

        let pointer_move = window_event_listener(ev::pointermove, move |ev| {
            if self.is_active() {
                on_move(ev);
            }
        });
        let pointer_up = window_event_listener(ev::pointerup, move |ev| {
            if self.is_active() {
                self.end();
                on_release(ev);
            }
        });
        let pointer_cancel = window_event_listener(ev::pointercancel, move |_| self.end());

        let _ = self
            .listeners
            .try_set_value(vec![pointer_move, pointer_up, pointer_cancel]);
    }

    pub(super) fn end(self) {
        let _ = self.listeners.try_update_value(|listeners| {
            for listener in listeners.drain(..) {
                listener.remove();
            }
        });
    }

    pub(super) fn is_active(self) -> bool {
        self.listeners
            .try_with_value(|listeners| !listeners.is_empty())
            .unwrap_or(false)
    }
}
