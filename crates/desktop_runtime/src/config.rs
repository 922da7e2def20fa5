//! Presentational constants shared by the shell, windows and desktop icons.

use std::time::Duration;

/// Click-versus-drag thresholds shared by every draggable surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GesturePolicy {
    /// Pointer travel (in px, either axis) after which a press becomes a drag.
    pub drag_threshold_px: f64,
    /// Longest press (in ms) that still counts as a click.
    pub click_max_ms: u64,
}

impl GesturePolicy {
    /// Returns whether a pointer displacement exceeds the drag threshold on either axis.
    pub fn exceeds_drag_threshold(self, dx: f64, dy: f64) -> bool {
        dx.abs() > self.drag_threshold_px || dy.abs() > self.drag_threshold_px
    }
}

/// Shell-wide sizing and timing configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellConfig {
    pub default_window_width: i32,
    pub default_window_height: i32,
    pub min_window_width: i32,
    pub min_window_height: i32,
    /// Height reserved for the taskbar in desktop mode.
    pub taskbar_height_px: i32,
    /// Height reserved for the taskbar in compact mode, before the safe-area inset.
    pub compact_taskbar_height_px: i32,
    /// Viewports narrower than this switch the shell into compact mode.
    pub compact_breakpoint_px: f64,
    pub gesture: GesturePolicy,
    pub close_transition_ms: u64,
    pub open_animation_ms: u64,
    pub clock_tick_ms: u64,
    pub boot_tick_ms: u64,
    /// Largest progress increment applied on one boot tick.
    pub boot_max_step: f64,
    pub login_delay_ms: u64,
}

pub const DEFAULT_SHELL_CONFIG: ShellConfig = ShellConfig {
    default_window_width: 600,
    default_window_height: 450,
    min_window_width: 300,
    min_window_height: 200,
    taskbar_height_px: 56,
    compact_taskbar_height_px: 48,
    compact_breakpoint_px: 768.0,
    gesture: GesturePolicy {
        drag_threshold_px: 5.0,
        click_max_ms: 300,
    },
    close_transition_ms: 150,
    open_animation_ms: 250,
    clock_tick_ms: 1_000,
    boot_tick_ms: 200,
    boot_max_step: 15.0,
    login_delay_ms: 500,
};

impl Default for ShellConfig {
    fn default() -> Self {
        DEFAULT_SHELL_CONFIG
    }
}

impl ShellConfig {
    /// Compact mode applies to narrow viewports and coarse (touch) pointers.
    pub fn is_compact(&self, viewport_width: f64, coarse_pointer: bool) -> bool {
        coarse_pointer || viewport_width < self.compact_breakpoint_px
    }

    pub fn close_transition(&self) -> Duration {
        Duration::from_millis(self.close_transition_ms)
    }

    pub fn open_animation(&self) -> Duration {
        Duration::from_millis(self.open_animation_ms)
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }

    pub fn boot_tick(&self) -> Duration {
        Duration::from_millis(self.boot_tick_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_threshold_is_strict_on_either_axis() {
        let policy = DEFAULT_SHELL_CONFIG.gesture;
        assert!(!policy.exceeds_drag_threshold(5.0, -5.0));
        assert!(policy.exceeds_drag_threshold(5.5, 0.0));
        assert!(policy.exceeds_drag_threshold(0.0, -6.0));
    }

    #[test]
    fn compact_mode_follows_breakpoint_or_coarse_pointer() {
        let config = ShellConfig::default();
        assert!(config.is_compact(767.0, false));
        assert!(!config.is_compact(768.0, false));
        assert!(config.is_compact(1920.0, true));
    }
}
