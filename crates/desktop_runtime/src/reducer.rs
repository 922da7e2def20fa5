//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::model::{DesktopSession, DesktopState, Position, WindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or re-raise) a window.
    OpenWindow(WindowId),
    /// Close a window, keeping its position for the next open.
    CloseWindow(WindowId),
    /// Hide an open window, leaving its taskbar entry.
    MinimizeWindow(WindowId),
    /// Flip the maximized flag of an open window.
    ToggleMaximize(WindowId),
    /// Restore and raise an open window.
    FocusWindow(WindowId),
    /// Move a window; emitted on every pointer move of a title-bar drag.
    UpdatePosition {
        /// Window being moved.
        id: WindowId,
        /// New top-left corner in viewport pixels.
        position: Position,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Switch compact (touch / narrow viewport) rendering on or off.
    SetCompactMode(bool),
    /// Leave the login screen with the given display name.
    SignIn {
        /// Name typed on the login screen.
        user_name: String,
    },
    /// Restart the simulated machine.
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window body.
    FocusWindowContent(WindowId),
    /// Reload the hosting page.
    ReloadPage,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Total over every action: operations that do not apply to the current state leave it unchanged.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(id) => {
            state.windows.open(id);
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowContent(id));
        }
        DesktopAction::CloseWindow(id) => state.windows.close(id),
        DesktopAction::MinimizeWindow(id) => state.windows.minimize(id),
        DesktopAction::ToggleMaximize(id) => state.windows.toggle_maximize(id),
        DesktopAction::FocusWindow(id) => {
            let was_minimized = state.windows.record(id).is_minimized;
            state.windows.focus(id);
            state.start_menu_open = false;
            if was_minimized {
                effects.push(RuntimeEffect::FocusWindowContent(id));
            }
        }
        DesktopAction::UpdatePosition { id, position } => {
            state.windows.update_position(id, position);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::SetCompactMode(compact) => {
            state.compact_mode = compact;
        }
        DesktopAction::SignIn { user_name } => {
            let user_name = user_name.trim();
            if !user_name.is_empty() {
                state.session = Some(DesktopSession {
                    user_name: user_name.to_string(),
                });
            }
        }
        DesktopAction::Restart => {
            state.start_menu_open = false;
            effects.push(RuntimeEffect::ReloadPage);
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::{window_visual_state, WindowVisualState};

    fn dispatch(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action)
    }

    fn open_ids(state: &DesktopState) -> Vec<WindowId> {
        state.windows.list_open().map(|record| record.id).collect()
    }

    fn visual(state: &DesktopState, id: WindowId) -> WindowVisualState {
        window_visual_state(state.windows.record(id), state.compact_mode)
    }

    #[test]
    fn open_window_focuses_content_and_closes_start_menu() {
        let mut state = DesktopState::default();
        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        let effects = dispatch(&mut state, DesktopAction::OpenWindow(WindowId::Settings));

        assert_eq!(effects, vec![RuntimeEffect::FocusWindowContent(WindowId::Settings)]);
        assert!(!state.start_menu_open);
        assert_eq!(state.focused_window_id(), Some(WindowId::Settings));
    }

    #[test]
    fn close_excludes_window_and_clears_flags() {
        let mut state = DesktopState::default();
        dispatch(&mut state, DesktopAction::OpenWindow(WindowId::Notepad));
        dispatch(&mut state, DesktopAction::ToggleMaximize(WindowId::Notepad));
        dispatch(&mut state, DesktopAction::MinimizeWindow(WindowId::Notepad));

        let effects = dispatch(&mut state, DesktopAction::CloseWindow(WindowId::Notepad));

        assert!(effects.is_empty());
        assert!(open_ids(&state).is_empty());
        let record = state.windows.record(WindowId::Notepad);
        assert!(!record.is_minimized);
        assert!(!record.is_maximized);
    }

    #[test]
    fn misuse_on_closed_windows_never_changes_state() {
        let mut state = DesktopState::default();
        let before = state.clone();
        for action in [
            DesktopAction::MinimizeWindow(WindowId::Game),
            DesktopAction::ToggleMaximize(WindowId::Game),
            DesktopAction::FocusWindow(WindowId::Game),
            DesktopAction::CloseWindow(WindowId::Game),
        ] {
            assert!(dispatch(&mut state, action).is_empty());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn focus_on_surface_does_not_steal_keyboard_focus() {
        let mut state = DesktopState::default();
        dispatch(&mut state, DesktopAction::OpenWindow(WindowId::Calculator));
        assert!(dispatch(&mut state, DesktopAction::FocusWindow(WindowId::Calculator)).is_empty());

        dispatch(&mut state, DesktopAction::MinimizeWindow(WindowId::Calculator));
        assert_eq!(
            dispatch(&mut state, DesktopAction::FocusWindow(WindowId::Calculator)),
            vec![RuntimeEffect::FocusWindowContent(WindowId::Calculator)]
        );
    }

    #[test]
    fn update_position_accepts_any_integers() {
        let mut state = DesktopState::default();
        dispatch(
            &mut state,
            DesktopAction::UpdatePosition {
                id: WindowId::Contact,
                position: Position::new(-9_999, 12_345),
            },
        );
        assert_eq!(
            state.windows.record(WindowId::Contact).position,
            Position::new(-9_999, 12_345)
        );
    }

    #[test]
    fn sign_in_trims_and_rejects_blank_names() {
        let mut state = DesktopState::default();
        dispatch(
            &mut state,
            DesktopAction::SignIn {
                user_name: "   ".to_string(),
            },
        );
        assert_eq!(state.user_name(), None);

        dispatch(
            &mut state,
            DesktopAction::SignIn {
                user_name: "  Ada  ".to_string(),
            },
        );
        assert_eq!(state.user_name(), Some("Ada"));
    }

    #[test]
    fn restart_requests_page_reload() {
        let mut state = DesktopState::default();
        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        assert_eq!(
            dispatch(&mut state, DesktopAction::Restart),
            vec![RuntimeEffect::ReloadPage]
        );
        assert!(!state.start_menu_open);
    }

    #[test]
    fn compact_mode_forces_fill_but_keeps_stored_flag() {
        let mut state = DesktopState::default();
        dispatch(&mut state, DesktopAction::OpenWindow(WindowId::About));
        dispatch(&mut state, DesktopAction::SetCompactMode(true));
        assert_eq!(visual(&state, WindowId::About), WindowVisualState::OpenMaximized);
        assert!(!state.windows.record(WindowId::About).is_maximized);

        dispatch(&mut state, DesktopAction::SetCompactMode(false));
        assert_eq!(visual(&state, WindowId::About), WindowVisualState::OpenNormal);
    }

    #[test]
    fn start_menu_toggles_and_closes() {
        let mut state = DesktopState::default();
        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        assert!(!state.start_menu_open);
        dispatch(&mut state, DesktopAction::ToggleStartMenu);
        dispatch(&mut state, DesktopAction::CloseStartMenu);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn taskbar_session_end_to_end() {
        let mut state = DesktopState::default();

        dispatch(&mut state, DesktopAction::OpenWindow(WindowId::About));
        dispatch(&mut state, DesktopAction::OpenWindow(WindowId::Projects));
        assert_eq!(state.focused_window_id(), Some(WindowId::Projects));

        // Taskbar click on "about".
        dispatch(&mut state, DesktopAction::FocusWindow(WindowId::About));
        assert_eq!(state.focused_window_id(), Some(WindowId::About));
        assert!(!state.windows.record(WindowId::About).is_minimized);

        dispatch(&mut state, DesktopAction::MinimizeWindow(WindowId::Projects));
        assert_eq!(visual(&state, WindowId::Projects), WindowVisualState::OpenMinimized);
        assert_eq!(open_ids(&state), vec![WindowId::About, WindowId::Projects]);

        dispatch(&mut state, DesktopAction::CloseWindow(WindowId::About));
        assert_eq!(visual(&state, WindowId::About), WindowVisualState::Closed);
        assert!(!state.windows.record(WindowId::About).is_minimized);
        assert_eq!(open_ids(&state), vec![WindowId::Projects]);
        assert_eq!(state.focused_window_id(), None);
    }
}
