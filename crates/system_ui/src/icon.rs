//! Centralized icon API.
//!
//! Icons render as a single glyph inside a tokenized span so the shell stylesheet can swap the
//! glyph for artwork through `data-ui-icon` without touching call sites.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to the shell and apps.
pub enum IconName {
    /// Person silhouette.
    User,
    /// Folder with contents.
    Folder,
    /// Text document.
    Document,
    /// Envelope.
    Mail,
    /// Calculator keypad.
    Calculator,
    /// Notepad page.
    Notepad,
    /// Gear.
    Settings,
    /// Game controller.
    Gamepad,
    /// Snake.
    Snake,
    /// Start button mark.
    Start,
    /// Power symbol.
    Power,
    /// Minimize bar.
    Minimize,
    /// Maximize square.
    Maximize,
    /// Restore-down squares.
    Restore,
    /// Close cross.
    Close,
    /// Network connected.
    Wifi,
    /// Network disconnected.
    WifiOff,
    /// Battery.
    Battery,
    /// Sun (brightness).
    Sun,
    /// Moon (dark mode).
    Moon,
    /// Speaker (volume).
    Volume,
    /// Arrow leaving a box.
    ExternalLink,
    /// Downward arrow into a tray.
    Download,
    /// Paper plane.
    Send,
    /// Circular arrow.
    Refresh,
    /// Triangle pointing up.
    ArrowUp,
    /// Triangle pointing down.
    ArrowDown,
    /// Triangle pointing left.
    ArrowLeft,
    /// Triangle pointing right.
    ArrowRight,
    /// Pause bars.
    Pause,
    /// Play triangle.
    Play,
    /// Trophy.
    Trophy,
}

impl IconName {
    /// Stable token exposed through `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Folder => "folder",
            Self::Document => "document",
            Self::Mail => "mail",
            Self::Calculator => "calculator",
            Self::Notepad => "notepad",
            Self::Settings => "settings",
            Self::Gamepad => "gamepad",
            Self::Snake => "snake",
            Self::Start => "start",
            Self::Power => "power",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Restore => "restore",
            Self::Close => "close",
            Self::Wifi => "wifi",
            Self::WifiOff => "wifi-off",
            Self::Battery => "battery",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Volume => "volume",
            Self::ExternalLink => "external-link",
            Self::Download => "download",
            Self::Send => "send",
            Self::Refresh => "refresh",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::Pause => "pause",
            Self::Play => "play",
            Self::Trophy => "trophy",
        }
    }

    /// Text glyph used when no artwork is styled in.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::User => "\u{1F464}",
            Self::Folder => "\u{1F4C1}",
            Self::Document => "\u{1F4C4}",
            Self::Mail => "\u{2709}",
            Self::Calculator => "\u{1F5A9}",
            Self::Notepad => "\u{1F4DD}",
            Self::Settings => "\u{2699}",
            Self::Gamepad => "\u{1F3AE}",
            Self::Snake => "\u{1F40D}",
            Self::Start => "\u{229E}",
            Self::Power => "\u{23FB}",
            Self::Minimize => "\u{2212}",
            Self::Maximize => "\u{25A1}",
            Self::Restore => "\u{2750}",
            Self::Close => "\u{2715}",
            Self::Wifi => "\u{1F4F6}",
            Self::WifiOff => "\u{1F6AB}",
            Self::Battery => "\u{1F50B}",
            Self::Sun => "\u{2600}",
            Self::Moon => "\u{263E}",
            Self::Volume => "\u{1F50A}",
            Self::ExternalLink => "\u{2197}",
            Self::Download => "\u{2913}",
            Self::Send => "\u{27A4}",
            Self::Refresh => "\u{21BB}",
            Self::ArrowUp => "\u{25B2}",
            Self::ArrowDown => "\u{25BC}",
            Self::ArrowLeft => "\u{25C0}",
            Self::ArrowRight => "\u{25B6}",
            Self::Pause => "\u{23F8}",
            Self::Play => "\u{25B6}",
            Self::Trophy => "\u{1F3C6}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline with dense controls.
    Sm,
    /// Default control size.
    #[default]
    Md,
    /// Desktop icon / launcher size.
    Lg,
}

impl IconSize {
    const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Decorative icon glyph.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_kebab_case() {
        for icon in [IconName::WifiOff, IconName::ExternalLink, IconName::ArrowRight] {
            let token = icon.token();
            assert!(token.contains('-'), "{token}");
            assert_eq!(token, token.to_ascii_lowercase());
        }
    }
}
