use platform_host::ClockSnapshot;

use super::*;
use crate::clock::{format_short_date, format_time};

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let compact = Signal::derive(move || state.with(|desktop| desktop.compact_mode));
    let start_menu_open = Signal::derive(move || state.with(|desktop| desktop.start_menu_open));

    view! {
        <Show when=move || start_menu_open.get()>
            <DismissLayer on_dismiss=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::CloseStartMenu);
            }) />
            <StartMenu />
        </Show>

        <Taskbar aria_label="Desktop taskbar" compact>
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    ui_slot="start-button"
                    aria_label="Open start menu".to_string()
                    aria_expanded=start_menu_open
                    selected=start_menu_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    <Icon icon=IconName::Start size=IconSize::Md />
                </TaskbarButton>
            </TaskbarSection>

            <TaskbarSection ui_slot="running">
                <For
                    each=move || {
                        state.with(|desktop| {
                            desktop.windows.list_open().map(|record| record.id).collect::<Vec<_>>()
                        })
                    }
                    key=|window_id| *window_id
                    let:window_id
                >
                    <TaskbarWindowButton window_id />
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray">
                <TaskbarClock />
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarWindowButton(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app = apps::app_descriptor(window_id);
    let minimized = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| desktop.windows.record(window_id).is_minimized)
    });
    let focused = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| desktop.focused_window_id() == Some(window_id))
    });

    view! {
        <TaskbarButton
            ui_slot="taskbar-window"
            aria_label=app.title.to_string()
            title=app.title.to_string()
            selected=focused
            dimmed=minimized
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::FocusWindow(window_id));
            })
        >
            <Icon icon=app.icon size=IconSize::Sm />
            <span class="taskbar-app-label">{app.title}</span>
        </TaskbarButton>
    }
}

#[component]
fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let user_name = move || {
        runtime
            .state
            .with(|desktop| desktop.user_name().unwrap_or_default().to_string())
    };

    view! {
        <MenuSurface id="start-menu" aria_label="Start menu">
            <div class="start-menu-user" data-ui-slot="start-menu-user">
                <Icon icon=IconName::User size=IconSize::Md />
                <span>{user_name}</span>
            </div>
            <div class="start-menu-apps" data-ui-slot="start-menu-apps">
                {apps::start_menu_apps()
                    .map(|app| {
                        let window_id = app.window_id;
                        view! {
                            <MenuItem
                                aria_label=app.title
                                icon=app.icon
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::OpenWindow(window_id));
                                })
                            >
                                {app.title}
                            </MenuItem>
                        }
                    })
                    .collect_view()}
            </div>
            <MenuItem
                aria_label="Restart"
                icon=IconName::Power
                on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::Restart))
            >
                "Restart"
            </MenuItem>
        </MenuSurface>
    }
}

#[component]
fn TaskbarClock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || {
            let _ = now.try_set(ClockSnapshot::now());
        },
        runtime.config().clock_tick(),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="taskbar-clock" data-ui-slot="clock" role="timer" aria-live="off">
            <span>{move || format_time(&now.get())}</span>
            <span class="taskbar-clock-date">{move || format_short_date(&now.get())}</span>
        </div>
    }
}
