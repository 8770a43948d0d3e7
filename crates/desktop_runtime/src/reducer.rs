//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.
//!
//! Every action referencing a window id or icon that no longer exists is a silent no-op: UI
//! event races (close-then-click, double close) must never disturb the session.

mod appearance;
mod launchers;

use desktop_app_contract::{ApplicationId, BackgroundKind, InstalledApp};

use crate::{
    model::{
        dragged_position, DesktopState, DragSession, IconDragSession, InteractionState,
        OpenWindowRequest, PointerPosition, Viewport, WindowBoundsPatch, WindowId, WindowPosition,
        WindowRecord, WindowSize,
    },
    window_manager::{
        apply_bounds_patch, cascade_position, find_window_mut, focus_window_internal,
        normalize_window_stack,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window at the next cascade slot.
    OpenWindow(OpenWindowRequest),
    /// Remove a window from the session.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise and focus a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Hide a window from the window layer; it stays on the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Clear the minimized flag and bring the window to the front.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Maximize into `viewport`, or return to the bounds captured before maximizing.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Current desktop viewport.
        viewport: Viewport,
    },
    /// Overwrite a window position.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner.
        position: WindowPosition,
    },
    /// Merge a partial bounds update into a window.
    UpdateBounds {
        /// Window to update.
        window_id: WindowId,
        /// Fields to overwrite.
        patch: WindowBoundsPatch,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Overwrite a desktop icon position.
    SetIconPosition {
        /// Icon display name.
        icon_name: String,
        /// New icon position.
        position: WindowPosition,
    },
    /// Begin dragging a desktop icon.
    BeginIconDrag {
        /// Icon display name.
        icon_name: String,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress icon drag.
    UpdateIconDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active icon drag.
    EndIconDrag,
    /// Replace the desktop background.
    SetBackground {
        /// Image reference, CSS color, or CSS gradient.
        value: String,
        /// Interpretation of `value`.
        kind: BackgroundKind,
    },
    /// Return to the built-in background.
    ResetBackground,
    /// Add a launcher to the installed list.
    InstallApp {
        /// Launcher entry to add.
        app: InstalledApp,
    },
    /// Remove a launcher from the installed list.
    RemoveApp {
        /// Registry key of the launcher to remove.
        app_id: ApplicationId,
    },
    /// Replace the installed list with the persisted copy loaded at boot.
    HydrateInstalledApps {
        /// Persisted launcher list.
        apps: Vec<InstalledApp>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Write the installed launcher list to the prefs store.
    PersistInstalledApps,
    /// Move keyboard focus into a window after it opens or is restored from the taskbar.
    FocusWindowInput(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This function is the sole writer of the window collection, icon layout, background, and
/// installed launcher list.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();

    if appearance::reduce_appearance_action(state, &action)
        || launchers::reduce_launcher_action(state, interaction, &action, &mut effects)
    {
        return effects;
    }

    match action {
        DesktopAction::OpenWindow(req) => {
            let window_id = next_window_id(state);
            let title = if req.title.trim().is_empty() {
                req.app_id.to_string()
            } else {
                req.title
            };
            state.windows.push(WindowRecord {
                id: window_id,
                position: cascade_position(state.windows.len()),
                size: WindowSize::default(),
                app_id: req.app_id,
                title,
                prior_bounds: None,
                z_index: 0,
                is_focused: false,
                minimized: false,
                maximized: false,
            });
            focus_window_internal(state, window_id);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            state.windows.retain(|w| w.id != window_id);
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            // Pointer-driven: the browser already placed keyboard focus on the clicked element.
            focus_window_internal(state, window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if let Some(window) = find_window_mut(state, window_id) {
                window.minimized = true;
                window.is_focused = false;
            }
        }
        DesktopAction::RestoreWindow { window_id } => {
            if focus_window_internal(state, window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ToggleMaximize {
            window_id,
            viewport,
        } => {
            if let Some(window) = find_window_mut(state, window_id) {
                if window.maximized {
                    if let Some(prior) = window.prior_bounds.take() {
                        window.set_bounds(prior);
                    }
                    window.maximized = false;
                } else {
                    window.prior_bounds = Some(window.bounds());
                    window.set_bounds(viewport.maximized_bounds());
                    window.maximized = true;
                }
            }
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            if let Some(window) = find_window_mut(state, window_id) {
                window.position = position;
            }
        }
        DesktopAction::UpdateBounds { window_id, patch } => {
            if let Some(window) = find_window_mut(state, window_id) {
                apply_bounds_patch(window, patch);
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(position_start) = state.window(window_id).map(|w| w.position) else {
                return effects;
            };
            focus_window_internal(state, window_id);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let position =
                    dragged_position(session.pointer_start, session.position_start, pointer);
                if let Some(window) = find_window_mut(state, session.window_id) {
                    window.position = position;
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::SetIconPosition {
            icon_name,
            position,
        } => {
            state.icon_layout.set_position(&icon_name, position);
        }
        DesktopAction::BeginIconDrag { icon_name, pointer } => {
            let position_start = state.icon_position(&icon_name);
            interaction.icon_dragging = Some(IconDragSession {
                icon_name,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::UpdateIconDrag { pointer } => {
            if let Some(session) = interaction.icon_dragging.as_ref() {
                let position =
                    dragged_position(session.pointer_start, session.position_start, pointer);
                state.icon_layout.set_position(&session.icon_name, position);
            }
        }
        DesktopAction::EndIconDrag => {
            interaction.icon_dragging = None;
        }
        DesktopAction::SetBackground { .. }
        | DesktopAction::ResetBackground
        | DesktopAction::InstallApp { .. }
        | DesktopAction::RemoveApp { .. }
        | DesktopAction::HydrateInstalledApps { .. } => {}
    }

    normalize_window_stack(state);
    effects
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowBounds, WindowPosition};

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, title: &str) -> WindowId {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new("editor", title)),
        );
        state.windows.last().expect("window").id
    }

    fn window(state: &DesktopState, window_id: WindowId) -> &WindowRecord {
        state.window(window_id).expect("window exists")
    }

    #[test]
    fn cascade_places_successive_windows_down_and_right() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "A");
        let b = open(&mut state, &mut interaction, "B");
        let c = open(&mut state, &mut interaction, "C");

        assert_eq!(window(&state, a).position, WindowPosition::new(100, 50));
        assert_eq!(window(&state, b).position, WindowPosition::new(150, 80));
        assert_eq!(window(&state, c).position, WindowPosition::new(200, 110));
        assert_eq!(window(&state, c).size, WindowSize::new(800, 600));
        assert_eq!(state.focused_window_id(), Some(c));
    }

    #[test]
    fn cascade_uses_current_open_count_after_closes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "A");
        open(&mut state, &mut interaction, "B");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: a },
        );
        let c = open(&mut state, &mut interaction, "C");

        assert_eq!(window(&state, c).position, WindowPosition::new(150, 80));
    }

    #[test]
    fn window_count_tracks_opens_minus_closes_and_ids_stay_unique() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let mut opened = Vec::new();
        for title in ["A", "B", "C", "D", "E"] {
            opened.push(open(&mut state, &mut interaction, title));
        }
        for window_id in [opened[1], opened[3]] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::CloseWindow { window_id },
            );
        }
        open(&mut state, &mut interaction, "F");

        assert_eq!(state.windows.len(), 4);
        let ids: HashSet<WindowId> = state.windows.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), state.windows.len());
    }

    #[test]
    fn double_close_is_idempotent() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "A");
        open(&mut state, &mut interaction, "B");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: a },
        );
        let after_first = state.clone();
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: a },
        );

        assert_eq!(state, after_first);
        assert!(effects.is_empty());
    }

    #[test]
    fn closing_unknown_window_leaves_collection_unchanged() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "A");
        let before = state.clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: WindowId(404),
            },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn operations_on_missing_ids_are_silent_no_ops() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "A");
        let before = state.clone();
        let missing = WindowId(77);

        for action in [
            DesktopAction::FocusWindow { window_id: missing },
            DesktopAction::MinimizeWindow { window_id: missing },
            DesktopAction::RestoreWindow { window_id: missing },
            DesktopAction::ToggleMaximize {
                window_id: missing,
                viewport: Viewport::default(),
            },
            DesktopAction::MoveWindow {
                window_id: missing,
                position: WindowPosition::new(1, 1),
            },
            DesktopAction::BeginMove {
                window_id: missing,
                pointer: PointerPosition::new(0, 0),
            },
        ] {
            assert!(reduce_desktop(&mut state, &mut interaction, action).is_empty());
        }

        assert_eq!(state, before);
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn toggle_maximize_twice_restores_exact_bounds() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "A");
        let viewport = Viewport::new(1024, 768, 48);
        let before = window(&state, win).bounds();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: win,
                viewport,
            },
        );
        let maximized = window(&state, win);
        assert!(maximized.maximized);
        assert_eq!(maximized.position, WindowPosition::new(0, 0));
        assert_eq!(maximized.size, WindowSize::new(1024, 720));
        assert_eq!(maximized.prior_bounds, Some(before));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: win,
                viewport,
            },
        );
        let restored = window(&state, win);
        assert!(!restored.maximized);
        assert_eq!(restored.bounds(), before);
    }

    #[test]
    fn rapid_toggles_apply_sequentially() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "A");
        let before = window(&state, win).bounds();

        for _ in 0..3 {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::ToggleMaximize {
                    window_id: win,
                    viewport: Viewport::default(),
                },
            );
        }
        assert!(window(&state, win).maximized);
        assert_eq!(window(&state, win).prior_bounds, Some(before));
    }

    #[test]
    fn minimize_then_restore_only_flips_minimized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "A");
        let before = window(&state, win).clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: win },
        );
        assert!(window(&state, win).minimized);
        assert_eq!(state.visible_windows().count(), 0);
        assert_eq!(state.focused_window_id(), None);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: win },
        );
        let after = window(&state, win);
        assert!(!after.minimized);
        assert_eq!(after.bounds(), before.bounds());
        assert_eq!(after.app_id, before.app_id);
        assert_eq!(after.title, before.title);
    }

    #[test]
    fn minimize_moves_focus_to_next_visible_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "A");
        let b = open(&mut state, &mut interaction, "B");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: b },
        );

        assert_eq!(state.focused_window_id(), Some(a));
    }

    #[test]
    fn restore_raises_window_to_top_of_stack() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "A");
        let b = open(&mut state, &mut interaction, "B");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: a },
        );
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: a },
        );

        assert_eq!(state.windows.last().map(|w| w.id), Some(a));
        assert!(window(&state, a).z_index > window(&state, b).z_index);
        assert!(effects.contains(&RuntimeEffect::FocusWindowInput(a)));
    }

    #[test]
    fn pointer_focus_raises_without_moving_keyboard_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "A");
        let b = open(&mut state, &mut interaction, "B");

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: a },
        );

        assert_eq!(state.focused_window_id(), Some(a));
        assert!(window(&state, a).z_index > window(&state, b).z_index);
        assert!(effects.is_empty());

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: b,
                pointer: PointerPosition::new(0, 0),
            },
        );
        assert_eq!(state.focused_window_id(), Some(b));
        assert!(effects.is_empty());
    }

    #[test]
    fn open_moves_keyboard_focus_into_new_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new("terminal", "Terminal")),
        );

        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(WindowId(1))]);
    }

    #[test]
    fn focusing_focused_window_emits_nothing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "A");
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: a },
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn drag_moves_window_by_pointer_delta_and_end_clears_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "A");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: PointerPosition::new(110, 60),
            },
        );
        for pointer in [PointerPosition::new(130, 70), PointerPosition::new(-500, -20)] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateMove { pointer },
            );
        }

        assert_eq!(window(&state, win).position, WindowPosition::new(-510, -30));
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition::new(0, 0),
            },
        );
        assert_eq!(window(&state, win).position, WindowPosition::new(-510, -30));
    }

    #[test]
    fn closing_dragged_window_cancels_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "A");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: PointerPosition::new(0, 0),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        );

        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn maximized_windows_can_still_be_moved() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "A");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: win,
                viewport: Viewport::default(),
            },
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: win,
                position: WindowPosition::new(12, 34),
            },
        );

        assert_eq!(window(&state, win).position, WindowPosition::new(12, 34));
        assert!(window(&state, win).maximized);
    }

    #[test]
    fn update_bounds_merges_partial_fields() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "A");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateBounds {
                window_id: win,
                patch: WindowBoundsPatch {
                    position: None,
                    size: Some(WindowSize::new(640, 480)),
                },
            },
        );

        assert_eq!(
            window(&state, win).bounds(),
            WindowBounds {
                position: WindowPosition::new(100, 50),
                size: WindowSize::new(640, 480),
            }
        );
    }

    #[test]
    fn blank_title_falls_back_to_app_id() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new("kali-terminal", "  ")),
        );

        assert_eq!(state.windows[0].title, "kali-terminal");
    }

    #[test]
    fn icon_drag_writes_position_from_default_slot() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginIconDrag {
                icon_name: "Terminal".to_string(),
                pointer: PointerPosition::new(30, 30),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateIconDrag {
                pointer: PointerPosition::new(230, 130),
            },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndIconDrag);

        assert_eq!(state.icon_position("Terminal"), WindowPosition::new(220, 120));
        assert_eq!(interaction.icon_dragging, None);
    }

    #[test]
    fn set_icon_position_round_trips() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetIconPosition {
                icon_name: "Calculator".to_string(),
                position: WindowPosition::new(10, 20),
            },
        );

        assert_eq!(state.icon_position("Calculator"), WindowPosition::new(10, 20));
    }
}
