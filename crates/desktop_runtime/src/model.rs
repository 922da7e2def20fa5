use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DEFAULT_SHELL_CONFIG;
use crate::store::WindowStore;

pub const DEFAULT_WINDOW_WIDTH: i32 = DEFAULT_SHELL_CONFIG.default_window_width;
pub const DEFAULT_WINDOW_HEIGHT: i32 = DEFAULT_SHELL_CONFIG.default_window_height;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowId {
    About,
    Projects,
    Resume,
    Contact,
    Calculator,
    Notepad,
    Settings,
    Game,
    Snake,
}

impl WindowId {
    pub const COUNT: usize = 9;

    /// Every window id in stable (taskbar) order.
    pub const ALL: [WindowId; Self::COUNT] = [
        Self::About,
        Self::Projects,
        Self::Resume,
        Self::Contact,
        Self::Calculator,
        Self::Notepad,
        Self::Settings,
        Self::Game,
        Self::Snake,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Contact => "contact",
            Self::Calculator => "calculator",
            Self::Notepad => "notepad",
            Self::Settings => "settings",
            Self::Game => "game",
            Self::Snake => "snake",
        }
    }

    pub const fn initial_position(self) -> Position {
        let (x, y) = match self {
            Self::About => (100, 50),
            Self::Projects => (150, 80),
            Self::Resume => (200, 110),
            Self::Contact => (250, 140),
            Self::Calculator => (300, 100),
            Self::Notepad => (350, 120),
            Self::Settings => (180, 90),
            Self::Game => (280, 80),
            Self::Snake => (320, 110),
        };
        Position { x, y }
    }

    /// DOM id of the window body, used to move keyboard focus into the window.
    pub fn body_dom_id(self) -> String {
        format!("window-body-{}", self.token())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window id `{0}`")]
pub struct UnknownWindowId(pub String);

impl FromStr for WindowId {
    type Err = UnknownWindowId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.token() == token)
            .ok_or_else(|| UnknownWindowId(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn from_parts(position: Position, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
        }
    }

    pub fn position(self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub const fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub const fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub const fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub const fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u64,
    pub position: Position,
}

impl WindowRecord {
    pub const fn closed(id: WindowId) -> Self {
        Self {
            id,
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_index: 0,
            position: id.initial_position(),
        }
    }

    /// Open and not minimized.
    pub fn is_stacked(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopSession {
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub windows: WindowStore,
    pub start_menu_open: bool,
    pub compact_mode: bool,
    /// `None` until the user signs in on the login screen.
    pub session: Option<DesktopSession>,
}

impl DesktopState {
    pub fn user_name(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.user_name.as_str())
    }

    /// Topmost stacked window, if any.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.topmost().map(|record| record.id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_ids_parse_from_their_tokens() {
        for id in WindowId::ALL {
            assert_eq!(id.token().parse::<WindowId>(), Ok(id));
        }
        assert_eq!(" snake ".parse::<WindowId>(), Ok(WindowId::Snake));
    }

    #[test]
    fn unknown_window_token_is_an_error() {
        let err = "paint".parse::<WindowId>().unwrap_err();
        assert_eq!(err, UnknownWindowId("paint".to_string()));
        assert_eq!(err.to_string(), "unknown window id `paint`");
    }

    #[test]
    fn window_id_index_matches_stable_order() {
        for (index, id) in WindowId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), index);
        }
    }

    #[test]
    fn window_id_serializes_as_token() {
        let raw = serde_json::to_string(&WindowId::Calculator).expect("serialize");
        assert_eq!(raw, "\"calculator\"");
    }

    #[test]
    fn corner_edges_combine_two_axes() {
        assert!(ResizeEdge::SouthEast.has_south() && ResizeEdge::SouthEast.has_east());
        assert!(ResizeEdge::NorthWest.has_north() && ResizeEdge::NorthWest.has_west());
        assert!(!ResizeEdge::East.has_north() && !ResizeEdge::East.has_west());
        let tokens: Vec<_> = ResizeEdge::ALL.iter().map(|edge| edge.token()).collect();
        assert_eq!(tokens, vec!["n", "s", "e", "w", "ne", "nw", "se", "sw"]);
    }
}
