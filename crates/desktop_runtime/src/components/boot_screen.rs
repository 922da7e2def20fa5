use platform_host::ClockSnapshot;
use system_ui::prelude::*;

use super::*;
use crate::{
    boot::{can_sign_in, BootPhase, BootProgress},
    clock::{format_long_date, format_time},
};

const LOGIN_PHOTO_URL: &str = "/photo/photo1.jpg";
const LOGIN_INPUT_ID: &str = "login-name";
const PROGRESS_DOTS: u16 = 5;

#[component]
/// Simulated boot followed by the sign-in form.
pub(super) fn BootScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let config = runtime.config();
    let phase = create_rw_signal(BootPhase::Booting);
    let progress = create_rw_signal(BootProgress::default());
    let ticker = store_value(None::<IntervalHandle>);
    let login_timer = store_value(None::<TimeoutHandle>);

    let stop_ticker = move || {
        if let Some(handle) = ticker.try_get_value().flatten() {
            handle.clear();
        }
        let _ = ticker.try_set_value(None);
    };
    on_cleanup(move || {
        stop_ticker();
        if let Some(handle) = login_timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    let show_login = move || {
        let _ = phase.try_set(BootPhase::Login);
    };
    let tick = move || {
        let host = runtime.host.get_value();
        let mut complete = false;
        let _ = progress.try_update(|progress| {
            complete = progress.advance(config.boot_max_step, &mut || host.random_unit());
        });
        if !complete {
            return;
        }
        stop_ticker();
        match set_timeout_with_handle(show_login, config.login_delay()) {
            Ok(handle) => login_timer.set_value(Some(handle)),
            Err(_) => show_login(),
        }
    };
    match set_interval_with_handle(tick, config.boot_tick()) {
        Ok(handle) => ticker.set_value(Some(handle)),
        Err(_) => show_login(),
    }

    view! {
        <div class="boot-screen" data-ui-slot="boot-screen">
            <Show
                when=move || phase.get() == BootPhase::Login
                fallback=move || view! { <BootProgressView progress=progress.read_only() /> }
            >
                <LoginForm />
            </Show>
        </div>
    }
}

#[component]
fn BootProgressView(progress: ReadSignal<BootProgress>) -> impl IntoView {
    let percent = Signal::derive(move || progress.get().display_percent());
    let step = 100 / PROGRESS_DOTS;

    view! {
        <Stack align=LayoutAlign::Center gap=LayoutGap::Lg>
            <div class="boot-dots" aria-hidden="true">
                {(0..PROGRESS_DOTS)
                    .map(|dot| {
                        view! {
                            <span
                                class="boot-dot"
                                data-ui-state=move || {
                                    if progress.get().percent() > f64::from(dot * step) {
                                        "lit"
                                    } else {
                                        "idle"
                                    }
                                }
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
            <ProgressBar ui_slot="boot-progress" max=100 value=percent />
            <Text tone=TextTone::Secondary>"Getting things ready..."</Text>
        </Stack>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let name = create_rw_signal(String::new());
    let photo_failed = create_rw_signal(false);
    let now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || {
            let _ = now.try_set(ClockSnapshot::now());
        },
        runtime.config().clock_tick(),
    ) {
        on_cleanup(move || interval.clear());
    }
    runtime.host.get_value().focus_element(LOGIN_INPUT_ID);

    let sign_in = move || {
        let user_name = name.get_untracked();
        if can_sign_in(&user_name) {
            runtime.dispatch_action(DesktopAction::SignIn { user_name });
        }
    };
    let on_keydown = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            sign_in();
        }
    });

    view! {
        <Stack align=LayoutAlign::Center gap=LayoutGap::Lg>
            <Stack align=LayoutAlign::Center gap=LayoutGap::Sm>
                <span class="login-time">{move || format_time(&now.get())}</span>
                <Text tone=TextTone::Secondary>{move || format_long_date(&now.get())}</Text>
            </Stack>
            <div class="login-avatar">
                <Show
                    when=move || !photo_failed.get()
                    fallback=|| view! { <Icon icon=IconName::User size=IconSize::Lg /> }
                >
                    <img
                        src=LOGIN_PHOTO_URL
                        alt="Profile photo"
                        on:error=move |_| photo_failed.set(true)
                    />
                </Show>
            </div>
            <Stack align=LayoutAlign::Center gap=LayoutGap::Sm>
                <Heading>"Welcome"</Heading>
                <Text tone=TextTone::Secondary>"Enter your name to continue"</Text>
            </Stack>
            <TextField
                id=LOGIN_INPUT_ID
                placeholder="Your name"
                aria_label="Your name"
                autocomplete="name"
                ui_slot="login-name"
                value=name.read_only()
                on_input=Callback::new(move |ev: web_sys::Event| name.set(event_target_value(&ev)))
                on_keydown
            />
            <Button
                variant=ButtonVariant::Primary
                ui_slot="sign-in"
                disabled=Signal::derive(move || !can_sign_in(&name.get()))
                on_click=Callback::new(move |_| sign_in())
            >
                "Sign In"
            </Button>
        </Stack>
    }
}
