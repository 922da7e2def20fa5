use super::*;

#[component]
/// Shared overlay surface for menus and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared overlay menu item primitive.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            aria_label=aria_label.unwrap_or_default()
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </Button>
    }
}

#[component]
/// Full-viewport transparent layer that reports clicks outside an open popup.
pub fn DismissLayer(#[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>) -> impl IntoView {
    view! {
        <div
            class="ui-dismiss-layer"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="dismiss-layer"
            on:click=move |ev| {
                if let Some(on_dismiss) = on_dismiss.as_ref() {
                    on_dismiss.call(ev);
                }
            }
        ></div>
    }
}

#[component]
/// Stack of transient notifications.
pub fn ToastRegion(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast-region", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast-region"
        >
            {children()}
        </div>
    }
}

#[component]
/// One dismissable notification.
pub fn Toast(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = ToastTone::Info)] tone: ToastTone,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-toast"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
        >
            <div data-ui-slot="copy">
                <strong data-ui-slot="title">{title}</strong>
                {description.map(|description| view! { <p data-ui-slot="description">{description}</p> })}
            </div>
            <Button
                aria_label="Dismiss notification".to_string()
                ui_slot="toast-dismiss"
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                on_click=Callback::new(move |ev| {
                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                        on_dismiss.call(ev);
                    }
                })
            >
                <Icon icon=IconName::Close size=IconSize::Sm />
            </Button>
        </div>
    }
}
