//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{
    DesktopState, WindowBoundsPatch, WindowId, WindowPosition, WindowRecord, CASCADE_ORIGIN,
    CASCADE_STEP,
};

/// Initial position for a window opened while `open_count` windows already exist.
///
/// No wraparound or clamping: long cascades walk off-screen.
pub fn cascade_position(open_count: usize) -> WindowPosition {
    let n = i32::try_from(open_count).unwrap_or(i32::MAX);
    WindowPosition::new(
        CASCADE_ORIGIN
            .x
            .saturating_add(CASCADE_STEP.x.saturating_mul(n)),
        CASCADE_ORIGIN
            .y
            .saturating_add(CASCADE_STEP.y.saturating_mul(n)),
    )
}

pub fn find_window_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Merges `patch` into the window bounds. Sizes are kept at least 1x1.
pub fn apply_bounds_patch(window: &mut WindowRecord, patch: WindowBoundsPatch) {
    if let Some(position) = patch.position {
        window.position = position;
    }
    if let Some(size) = patch.size {
        window.size = size.clamped_min(1, 1);
    }
}

/// Focuses and raises `window_id`, ensuring it is the top/focused non-minimized window.
///
/// Returns `false` when the window does not exist.
pub fn focus_window_internal(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return false;
    };

    let already_focused_top = index + 1 == state.windows.len()
        && state
            .windows
            .get(index)
            .map(|w| w.is_focused && !w.minimized)
            .unwrap_or(false);
    if already_focused_top {
        return true;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    let mut window = state.windows.remove(index);
    window.is_focused = true;
    window.minimized = false;
    state.windows.push(window);
    normalize_window_stack(state);
    true
}

/// Normalizes z-index ordering and focus invariants for all managed windows.
///
/// Vector order is stack order (last is top). At most one window is focused, never a
/// minimized one; when none is, the topmost visible window takes focus.
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut has_focused = false;
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if window.minimized {
            window.is_focused = false;
        }
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }

    if !has_focused {
        if let Some(last_visible) = state.windows.iter_mut().rev().find(|w| !w.minimized) {
            last_visible.is_focused = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowSize;

    fn record(id: u64) -> WindowRecord {
        WindowRecord {
            id: WindowId(id),
            app_id: ApplicationId::new("editor"),
            title: format!("Window {id}"),
            position: cascade_position(0),
            size: WindowSize::default(),
            prior_bounds: None,
            z_index: 0,
            is_focused: false,
            minimized: false,
            maximized: false,
        }
    }

    #[test]
    fn cascade_steps_down_and_right_per_open_window() {
        assert_eq!(cascade_position(0), WindowPosition::new(100, 50));
        assert_eq!(cascade_position(1), WindowPosition::new(150, 80));
        assert_eq!(cascade_position(2), WindowPosition::new(200, 110));
        assert_eq!(cascade_position(40), WindowPosition::new(2100, 1250));
    }

    #[test]
    fn normalize_focuses_topmost_visible_window() {
        let mut state = DesktopState::default();
        state.windows = vec![record(1), record(2), record(3)];
        state.windows[2].minimized = true;

        normalize_window_stack(&mut state);

        assert_eq!(state.focused_window_id(), Some(WindowId(2)));
        let z: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
        assert_eq!(z, vec![1, 2, 3]);
    }

    #[test]
    fn focus_raises_and_unminimizes() {
        let mut state = DesktopState::default();
        state.windows = vec![record(1), record(2)];
        state.windows[0].minimized = true;
        normalize_window_stack(&mut state);

        assert!(focus_window_internal(&mut state, WindowId(1)));

        let top = state.windows.last().expect("top window");
        assert_eq!(top.id, WindowId(1));
        assert!(top.is_focused);
        assert!(!top.minimized);
        assert!(!focus_window_internal(&mut state, WindowId(99)));
    }

    #[test]
    fn bounds_patch_merges_fields_and_keeps_size_positive() {
        let mut window = record(1);
        apply_bounds_patch(
            &mut window,
            WindowBoundsPatch {
                position: None,
                size: Some(WindowSize::new(-5, 240)),
            },
        );
        assert_eq!(window.position, cascade_position(0));
        assert_eq!(window.size, WindowSize::new(1, 240));
    }
}
