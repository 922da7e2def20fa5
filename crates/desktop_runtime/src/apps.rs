//! Static registry of the windows the shell can host and how their contents render.

use desktop_app_calculator::CalculatorApp;
use desktop_app_contact::ContactApp;
use desktop_app_games::{MemoryGameApp, SnakeGameApp};
use desktop_app_notepad::NotepadApp;
use desktop_app_portfolio::{AboutApp, ProjectsApp, ResumeApp};
use desktop_app_settings::SettingsApp;
use leptos::*;
use system_ui::IconName;

use crate::{
    host::DesktopHostContext,
    model::{Position, WindowId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub window_id: WindowId,
    pub title: &'static str,
    pub icon: IconName,
    /// Label and default position of the desktop shortcut, if the app has one.
    pub desktop_icon: Option<(&'static str, Position)>,
    pub show_in_start_menu: bool,
}

const fn app(
    window_id: WindowId,
    title: &'static str,
    icon: IconName,
    desktop_icon: Option<(&'static str, Position)>,
) -> AppDescriptor {
    AppDescriptor {
        window_id,
        title,
        icon,
        desktop_icon,
        show_in_start_menu: true,
    }
}

/// Indexed by [`WindowId::index`].
const APP_REGISTRY: [AppDescriptor; WindowId::COUNT] = [
    app(
        WindowId::About,
        "About Me",
        IconName::User,
        Some(("About Me", Position::new(20, 20))),
    ),
    app(
        WindowId::Projects,
        "Projects",
        IconName::Folder,
        Some(("Projects", Position::new(20, 110))),
    ),
    app(
        WindowId::Resume,
        "Resume",
        IconName::Document,
        Some(("Resume", Position::new(20, 200))),
    ),
    app(
        WindowId::Contact,
        "Contact",
        IconName::Mail,
        Some(("Contact", Position::new(20, 290))),
    ),
    app(
        WindowId::Calculator,
        "Calculator",
        IconName::Calculator,
        Some(("Calculator", Position::new(20, 380))),
    ),
    app(
        WindowId::Notepad,
        "Notepad",
        IconName::Notepad,
        Some(("Notepad", Position::new(20, 470))),
    ),
    app(WindowId::Settings, "Settings", IconName::Settings, None),
    app(
        WindowId::Game,
        "Memory Game",
        IconName::Gamepad,
        Some(("Memory Game", Position::new(110, 20))),
    ),
    app(
        WindowId::Snake,
        "Snake",
        IconName::Snake,
        Some(("Snake", Position::new(110, 110))),
    ),
];

/// Start menu order: the games come before settings.
const START_MENU_ORDER: [WindowId; WindowId::COUNT] = [
    WindowId::About,
    WindowId::Projects,
    WindowId::Resume,
    WindowId::Contact,
    WindowId::Calculator,
    WindowId::Notepad,
    WindowId::Game,
    WindowId::Snake,
    WindowId::Settings,
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(window_id: WindowId) -> &'static AppDescriptor {
    &APP_REGISTRY[window_id.index()]
}

pub fn start_menu_apps() -> impl Iterator<Item = &'static AppDescriptor> {
    START_MENU_ORDER
        .iter()
        .map(|id| app_descriptor(*id))
        .filter(|entry| entry.show_in_start_menu)
}

pub fn desktop_icon_apps() -> impl Iterator<Item = (&'static AppDescriptor, &'static str, Position)> {
    app_registry().iter().filter_map(|entry| {
        entry
            .desktop_icon
            .map(|(label, position)| (entry, label, position))
    })
}

/// Builds the body of a window. `user_name` feeds the settings profile header.
pub fn render_window_contents(
    window_id: WindowId,
    host: &DesktopHostContext,
    user_name: Signal<String>,
) -> View {
    match window_id {
        WindowId::About => view! { <AboutApp /> }.into_view(),
        WindowId::Projects => view! { <ProjectsApp /> }.into_view(),
        WindowId::Resume => {
            view! { <ResumeApp external_urls=host.external_url_service() /> }.into_view()
        }
        WindowId::Contact => {
            view! { <ContactApp dispatch=host.message_dispatch_service() /> }.into_view()
        }
        WindowId::Calculator => view! { <CalculatorApp /> }.into_view(),
        WindowId::Notepad => view! { <NotepadApp /> }.into_view(),
        WindowId::Settings => {
            view! { <SettingsApp prefs=host.prefs_store() user_name=user_name /> }.into_view()
        }
        WindowId::Game => view! { <MemoryGameApp /> }.into_view(),
        WindowId::Snake => view! { <SnakeGameApp /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_is_indexed_by_window_id() {
        for id in WindowId::ALL {
            assert_eq!(app_descriptor(id).window_id, id);
        }
    }

    #[test]
    fn settings_is_start_menu_only() {
        let settings = app_descriptor(WindowId::Settings);
        assert_eq!(settings.desktop_icon, None);
        assert!(start_menu_apps().any(|entry| entry.window_id == WindowId::Settings));
    }

    #[test]
    fn desktop_icons_follow_the_two_column_layout() {
        let icons: Vec<_> = desktop_icon_apps()
            .map(|(entry, _, position)| (entry.window_id, position))
            .collect();
        assert_eq!(icons.len(), 8);
        assert_eq!(icons[0], (WindowId::About, Position::new(20, 20)));
        assert_eq!(icons[5], (WindowId::Notepad, Position::new(20, 470)));
        assert_eq!(icons[6], (WindowId::Game, Position::new(110, 20)));
        assert_eq!(icons[7], (WindowId::Snake, Position::new(110, 110)));
    }

    #[test]
    fn start_menu_lists_every_app_once() {
        let ids: Vec<_> = start_menu_apps().map(|entry| entry.window_id).collect();
        assert_eq!(ids.len(), WindowId::COUNT);
        assert_eq!(ids.last(), Some(&WindowId::Settings));
    }
}
