use super::*;
use crate::{
    model::{Size, WindowRect},
    window_manager::{
        window_visual_state, CloseTransition, DragSession, ResizeSession, WindowPlacement,
        WindowVisualState,
    },
};

#[component]
/// One hosted window. Stays mounted for the whole session; the surface itself only exists while
/// the window is visible, so its size resets after a minimize or close.
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let config = runtime.config();

    let record = create_memo(move |_| runtime.state.with(|state| *state.windows.record(window_id)));
    let compact = create_memo(move |_| runtime.state.with(|state| state.compact_mode));
    let visual_state = create_memo(move |_| window_visual_state(&record.get(), compact.get()));

    let close_transition = create_rw_signal(CloseTransition::default());
    let close_timer = store_value(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = close_timer.get_value() {
            handle.clear();
        }
    });

    let finish_close = move || {
        let _ = close_transition.try_update(CloseTransition::finish);
        runtime.dispatch_action(DesktopAction::CloseWindow(window_id));
    };
    let request_close = Callback::new(move |_: ()| {
        let mut started = false;
        close_transition.update(|transition| started = transition.request());
        if !started {
            return;
        }
        match set_timeout_with_handle(finish_close, config.close_transition()) {
            Ok(handle) => close_timer.set_value(Some(handle)),
            Err(_) => finish_close(),
        }
    });

    view! {
        <Show when=move || visual_state.get().is_rendered()>
            <WindowSurface
                window_id
                record
                compact
                visual_state
                closing=Signal::derive(move || close_transition.get().is_closing())
                request_close
            />
        </Show>
    }
}

#[component]
fn WindowSurface(
    window_id: WindowId,
    record: Memo<WindowRecord>,
    compact: Memo<bool>,
    visual_state: Memo<WindowVisualState>,
    closing: Signal<bool>,
    request_close: Callback<()>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let config = runtime.config();
    let app = apps::app_descriptor(window_id);
    let min_size = Size {
        width: config.min_window_width,
        height: config.min_window_height,
    };
    let size = create_rw_signal(Size {
        width: config.default_window_width,
        height: config.default_window_height,
    });

    let opening = create_rw_signal(true);
    match set_timeout_with_handle(
        move || {
            let _ = opening.try_set(false);
        },
        config.open_animation(),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => opening.set(false),
    }

    let style = Signal::derive(move || {
        let record = record.get();
        let rect = WindowRect::from_parts(record.position, size.get());
        WindowPlacement::resolve(visual_state.get(), compact.get(), rect)
            .map(|placement| placement.style(record.z_index, &config))
            .unwrap_or_default()
    });
    let user_name = Signal::derive(move || {
        runtime
            .state
            .with(|state| state.user_name().unwrap_or_default().to_string())
    });

    let drag = ActiveGesture::new();
    let resize = ActiveGesture::new();

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow(window_id));
    });

    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || !visual_state.get_untracked().allows_drag() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();

        let session = DragSession::begin(
            pointer_from_pointer_event(&ev),
            record.get_untracked().position,
        );
        // Title bars have no click action, so every move repositions the window.
        drag.begin(
            move |ev| {
                runtime.dispatch_action(DesktopAction::UpdatePosition {
                    id: window_id,
                    position: session.position_at(pointer_from_pointer_event(&ev)),
                });
            },
            |_| {},
        );
    });

    let begin_resize = move |edge: ResizeEdge, ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || !visual_state.get_untracked().allows_drag() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::FocusWindow(window_id));

        let start = WindowRect::from_parts(record.get_untracked().position, size.get_untracked());
        let session = ResizeSession::begin(edge, pointer_from_pointer_event(&ev), start);
        resize.begin(
            move |ev| {
                let current =
                    WindowRect::from_parts(record.get_untracked().position, size.get_untracked());
                let next = session.step(current, pointer_from_pointer_event(&ev), min_size);
                if next.size() != current.size() {
                    size.set(next.size());
                }
                if next.position() != current.position() {
                    runtime.dispatch_action(DesktopAction::UpdatePosition {
                        id: window_id,
                        position: next.position(),
                    });
                }
            },
            |_| {},
        );
    };

    let toggle_maximize = move || {
        if !compact.get_untracked() {
            runtime.dispatch_action(DesktopAction::ToggleMaximize(window_id));
        }
    };
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    });
    // Controls raise the window themselves and keep the press from starting a title-bar drag.
    let controls_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::FocusWindow(window_id));
    });

    view! {
        <Show when=move || visual_state.get() == WindowVisualState::OpenMaximized>
            <div
                class="ui-window-scrim"
                aria-hidden="true"
                data-ui-slot="window-scrim"
                style=move || format!("z-index:{};", record.get().z_index)
            ></div>
        </Show>
        <WindowFrame
            id=format!("window-{}", window_id.token())
            style
            aria_label=app.title.to_string()
            visual_state=Signal::derive(move || visual_state.get().token())
            closing
            opening=opening.read_only()
            on_pointerdown=focus
        >
            <WindowTitleBar
                draggable=Signal::derive(move || visual_state.get().allows_drag())
                on_pointerdown=begin_drag
                on_dblclick=titlebar_double_click
            >
                <WindowTitle>
                    <Icon icon=app.icon size=IconSize::Sm />
                    <span>{app.title}</span>
                </WindowTitle>
                <WindowControls on_pointerdown=controls_pointerdown>
                    <Show when=move || !compact.get()>
                        <WindowControlButton
                            aria_label="Minimize window".to_string()
                            ui_slot="window-minimize"
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::MinimizeWindow(window_id));
                            })
                        >
                            <Icon icon=IconName::Minimize size=IconSize::Sm />
                        </WindowControlButton>
                        <WindowControlButton
                            aria_label=Signal::derive(move || {
                                if record.get().is_maximized {
                                    "Restore window".to_string()
                                } else {
                                    "Maximize window".to_string()
                                }
                            })
                            ui_slot="window-maximize"
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                toggle_maximize();
                            })
                        >
                            {move || {
                                let icon = if record.get().is_maximized {
                                    IconName::Restore
                                } else {
                                    IconName::Maximize
                                };
                                view! { <Icon icon size=IconSize::Sm /> }
                            }}
                        </WindowControlButton>
                    </Show>
                    <WindowControlButton
                        aria_label="Close window".to_string()
                        ui_slot="window-close"
                        on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                            stop_mouse_event(&ev);
                            request_close.call(());
                        })
                    >
                        <Icon icon=IconName::Close size=IconSize::Sm />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody id=window_id.body_dom_id()>
                {apps::render_window_contents(window_id, &runtime.host.get_value(), user_name)}
            </WindowBody>
            <Show when=move || visual_state.get().allows_drag()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| {
                        view! {
                            <ResizeHandle
                                edge=edge.token()
                                on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                                    begin_resize(edge, ev)
                                })
                            />
                        }
                    })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}
