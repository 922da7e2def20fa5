//! Window geometry engine and view-state mapping.
//!
//! Everything here is pure: drag/resize sessions translate pointer coordinates into positions and
//! sizes, and [`window_visual_state`] folds the stored flags plus compact mode into one of four
//! explicit visual states.

use crate::config::{ShellConfig, DEFAULT_SHELL_CONFIG};
use crate::model::{PointerPosition, Position, ResizeEdge, Size, WindowRecord, WindowRect};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = DEFAULT_SHELL_CONFIG.min_window_width;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = DEFAULT_SHELL_CONFIG.min_window_height;

/// Title-bar move gesture. Stores the pointer offset from the window origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub origin: PointerPosition,
    pub offset: PointerPosition,
}

impl DragSession {
    pub fn begin(pointer: PointerPosition, position: Position) -> Self {
        Self {
            origin: pointer,
            offset: PointerPosition {
                x: pointer.x - position.x,
                y: pointer.y - position.y,
            },
        }
    }

    /// Window position for the current pointer. Never clamped to the viewport.
    pub fn position_at(&self, pointer: PointerPosition) -> Position {
        Position::new(pointer.x - self.offset.x, pointer.y - self.offset.y)
    }
}

/// Edge/corner resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: ResizeEdge,
    pub origin: PointerPosition,
    pub start: WindowRect,
}

impl ResizeSession {
    pub fn begin(edge: ResizeEdge, pointer: PointerPosition, start: WindowRect) -> Self {
        Self {
            edge,
            origin: pointer,
            start,
        }
    }

    /// Applies one pointer-move tick to the current geometry.
    pub fn step(&self, current: WindowRect, pointer: PointerPosition, min: Size) -> WindowRect {
        resize_step(current, self.edge, pointer, min)
    }
}

/// One resize tick. East/south edges clamp to the minimum; west/north edges move the origin only
/// while the candidate size stays above the minimum, so the opposite edge never moves.
pub fn resize_step(
    current: WindowRect,
    edge: ResizeEdge,
    pointer: PointerPosition,
    min: Size,
) -> WindowRect {
    let mut next = current;

    if edge.has_east() {
        next.w = (pointer.x - current.x).max(min.width);
    }
    if edge.has_south() {
        next.h = (pointer.y - current.y).max(min.height);
    }
    if edge.has_west() {
        let candidate = current.w + (current.x - pointer.x);
        if candidate > min.width {
            next.x = pointer.x;
            next.w = candidate;
        }
    }
    if edge.has_north() {
        let candidate = current.h + (current.y - pointer.y);
        if candidate > min.height {
            next.y = pointer.y;
            next.h = candidate;
        }
    }

    next
}

/// The four visual states of a window view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVisualState {
    Closed,
    OpenNormal,
    OpenMinimized,
    OpenMaximized,
}

impl WindowVisualState {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::OpenNormal => "normal",
            Self::OpenMinimized => "minimized",
            Self::OpenMaximized => "maximized",
        }
    }

    /// Closed and minimized windows are absent from the visual tree.
    pub const fn is_rendered(self) -> bool {
        matches!(self, Self::OpenNormal | Self::OpenMaximized)
    }

    /// Drag and resize handles only exist in the normal state.
    pub const fn allows_drag(self) -> bool {
        matches!(self, Self::OpenNormal)
    }
}

pub fn window_visual_state(record: &WindowRecord, compact_mode: bool) -> WindowVisualState {
    if !record.is_open {
        WindowVisualState::Closed
    } else if record.is_minimized {
        WindowVisualState::OpenMinimized
    } else if record.is_maximized || compact_mode {
        WindowVisualState::OpenMaximized
    } else {
        WindowVisualState::OpenNormal
    }
}

/// Where a rendered window sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPlacement {
    Free(WindowRect),
    /// Fills the viewport above the taskbar.
    Fill { compact: bool },
}

impl WindowPlacement {
    pub fn resolve(state: WindowVisualState, compact: bool, rect: WindowRect) -> Option<Self> {
        match state {
            WindowVisualState::OpenNormal => Some(Self::Free(rect)),
            WindowVisualState::OpenMaximized => Some(Self::Fill { compact }),
            WindowVisualState::Closed | WindowVisualState::OpenMinimized => None,
        }
    }

    /// Inline style for the window frame.
    pub fn style(self, z_index: u64, config: &ShellConfig) -> String {
        match self {
            Self::Free(rect) => format!(
                "z-index:{z_index};left:{}px;top:{}px;width:{}px;height:{}px;",
                rect.x, rect.y, rect.w, rect.h
            ),
            Self::Fill { compact: false } => format!(
                "z-index:{z_index};left:0;top:0;right:0;bottom:{}px;",
                config.taskbar_height_px
            ),
            Self::Fill { compact: true } => format!(
                "z-index:{z_index};left:0;top:env(safe-area-inset-top, 0px);right:0;\
                 bottom:calc({}px + env(safe-area-inset-bottom, 0px));",
                config.compact_taskbar_height_px
            ),
        }
    }
}

/// Cosmetic exit transition played before a window is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseTransition {
    #[default]
    Idle,
    Closing,
}

impl CloseTransition {
    /// Starts the transition. Returns `false` when one is already running.
    pub fn request(&mut self) -> bool {
        match self {
            Self::Idle => {
                *self = Self::Closing;
                true
            }
            Self::Closing => false,
        }
    }

    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_closing(self) -> bool {
        matches!(self, Self::Closing)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowId;

    const MIN: Size = Size {
        width: MIN_WINDOW_WIDTH,
        height: MIN_WINDOW_HEIGHT,
    };

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
        WindowRect { x, y, w, h }
    }

    #[test]
    fn drag_applies_delta_not_absolute_pointer() {
        let session = DragSession::begin(pointer(150, 150), Position::new(100, 100));
        assert_eq!(session.position_at(pointer(200, 180)), Position::new(150, 130));
    }

    #[test]
    fn small_title_bar_move_repositions_window() {
        let mut store = crate::store::WindowStore::default();
        store.update_position(WindowId::About, Position::new(100, 100));
        store.open(WindowId::About);
        let session = DragSession::begin(
            pointer(150, 150),
            store.record(WindowId::About).position,
        );

        for step in [pointer(151, 150), pointer(154, 153)] {
            store.update_position(WindowId::About, session.position_at(step));
        }

        assert_eq!(store.record(WindowId::About).position, Position::new(104, 103));
    }

    #[test]
    fn drag_allows_off_screen_positions() {
        let session = DragSession::begin(pointer(120, 110), Position::new(100, 100));
        assert_eq!(session.position_at(pointer(-500, -20)), Position::new(-520, -30));
    }

    #[test]
    fn south_east_resize_clamps_each_axis_independently() {
        let start = rect(100, 100, 600, 450);
        let session = ResizeSession::begin(ResizeEdge::SouthEast, pointer(700, 550), start);
        assert_eq!(
            session.step(start, pointer(500, 500), MIN),
            rect(100, 100, 400, 400)
        );
        assert_eq!(
            session.step(start, pointer(150, 120), MIN),
            rect(100, 100, 300, 200)
        );
    }

    #[test]
    fn west_resize_keeps_right_edge_fixed() {
        let start = rect(100, 100, 600, 450);
        let next = resize_step(start, ResizeEdge::West, pointer(40, 0), MIN);
        assert_eq!(next, rect(40, 100, 660, 450));
        assert_eq!(next.x + next.w, start.x + start.w);
    }

    #[test]
    fn west_resize_past_minimum_is_noop() {
        let start = rect(100, 100, 600, 450);
        // Candidate width would be 600 + (100 - 450) = 250 < 300.
        assert_eq!(resize_step(start, ResizeEdge::West, pointer(450, 0), MIN), start);
        // Exactly the minimum is also rejected.
        assert_eq!(resize_step(start, ResizeEdge::West, pointer(400, 0), MIN), start);
    }

    #[test]
    fn north_resize_mirrors_west() {
        let start = rect(100, 100, 600, 450);
        assert_eq!(
            resize_step(start, ResizeEdge::North, pointer(0, 60), MIN),
            rect(100, 60, 600, 490)
        );
        assert_eq!(resize_step(start, ResizeEdge::North, pointer(0, 400), MIN), start);
    }

    #[test]
    fn north_west_resize_applies_both_axes_in_one_tick() {
        let start = rect(100, 100, 600, 450);
        assert_eq!(
            resize_step(start, ResizeEdge::NorthWest, pointer(90, 80), MIN),
            rect(90, 80, 610, 470)
        );
        // Width clamps out while height still grows.
        assert_eq!(
            resize_step(start, ResizeEdge::NorthWest, pointer(500, 80), MIN),
            rect(100, 80, 600, 470)
        );
    }

    #[test]
    fn repeated_west_ticks_never_invert_window() {
        let mut current = rect(100, 100, 600, 450);
        let session = ResizeSession::begin(ResizeEdge::SouthWest, pointer(100, 550), current);
        for x in (100..=900).step_by(50) {
            current = session.step(current, pointer(x, 550), MIN);
            assert!(current.w > MIN_WINDOW_WIDTH);
            assert_eq!(current.x + current.w, 700);
        }
    }

    #[test]
    fn visual_state_mapping_covers_all_flag_combinations() {
        let mut record = WindowRecord::closed(WindowId::About);
        assert_eq!(window_visual_state(&record, false), WindowVisualState::Closed);
        assert_eq!(window_visual_state(&record, true), WindowVisualState::Closed);

        record.is_open = true;
        assert_eq!(window_visual_state(&record, false), WindowVisualState::OpenNormal);
        assert_eq!(window_visual_state(&record, true), WindowVisualState::OpenMaximized);

        record.is_maximized = true;
        assert_eq!(window_visual_state(&record, false), WindowVisualState::OpenMaximized);

        record.is_minimized = true;
        assert_eq!(window_visual_state(&record, false), WindowVisualState::OpenMinimized);
        assert_eq!(window_visual_state(&record, true), WindowVisualState::OpenMinimized);
        assert!(!WindowVisualState::OpenMinimized.is_rendered());
    }

    #[test]
    fn maximize_round_trip_restores_rendered_rectangle() {
        let config = ShellConfig::default();
        let mut record = WindowRecord::closed(WindowId::Projects);
        record.is_open = true;
        let rect = WindowRect::from_parts(record.position, Size::default());

        let before = WindowPlacement::resolve(window_visual_state(&record, false), false, rect);
        record.is_maximized = !record.is_maximized;
        let maximized = WindowPlacement::resolve(window_visual_state(&record, false), false, rect);
        record.is_maximized = !record.is_maximized;
        let after = WindowPlacement::resolve(window_visual_state(&record, false), false, rect);

        assert_eq!(maximized, Some(WindowPlacement::Fill { compact: false }));
        assert_eq!(before, after);
        assert_eq!(
            after.map(|placement| placement.style(3, &config)),
            Some("z-index:3;left:150px;top:80px;width:600px;height:450px;".to_string())
        );
    }

    #[test]
    fn fill_placement_reserves_taskbar() {
        let config = ShellConfig::default();
        assert_eq!(
            WindowPlacement::Fill { compact: false }.style(7, &config),
            "z-index:7;left:0;top:0;right:0;bottom:56px;"
        );
        let compact = WindowPlacement::Fill { compact: true }.style(7, &config);
        assert!(compact.contains("top:env(safe-area-inset-top, 0px)"));
        assert!(compact.contains("bottom:calc(48px + env(safe-area-inset-bottom, 0px))"));
    }

    #[test]
    fn close_transition_is_idempotent() {
        let mut transition = CloseTransition::default();
        assert!(transition.request());
        assert!(!transition.request());
        assert!(transition.is_closing());
        transition.finish();
        assert!(!transition.is_closing());
        assert!(transition.request());
    }
}
