//! Reducer helpers for desktop background transitions.

use crate::{
    model::{BackgroundState, DesktopState},
    reducer::DesktopAction,
};

/// Applies background actions. Returns `true` when `action` was handled here.
pub(super) fn reduce_appearance_action(state: &mut DesktopState, action: &DesktopAction) -> bool {
    match action {
        DesktopAction::SetBackground { value, kind } => {
            state.background = BackgroundState::new(value.clone(), *kind);
        }
        DesktopAction::ResetBackground => {
            state.background = BackgroundState::default();
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::BackgroundKind;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::InteractionState,
        reducer::{reduce_desktop, DesktopAction},
    };

    #[test]
    fn set_background_overwrites_previous_value() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetBackground {
                value: "#1a1a2e".to_string(),
                kind: BackgroundKind::Color,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetBackground {
                value: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)".to_string(),
                kind: BackgroundKind::Gradient,
            },
        );

        assert_eq!(
            state.background,
            BackgroundState::new(
                "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
                BackgroundKind::Gradient
            )
        );
    }

    #[test]
    fn background_changes_leave_windows_untouched() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(crate::model::OpenWindowRequest::new("editor", "Notes")),
        );
        let windows = state.windows.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetBackground {
                value: "/assets/wallpapers/mountains.jpg".to_string(),
                kind: BackgroundKind::Image,
            },
        );

        assert_eq!(state.windows, windows);
        assert!(effects.is_empty());
    }

    #[test]
    fn reset_returns_to_default_image() {
        let mut state = DesktopState::default();
        state.background = BackgroundState::new("#000000", BackgroundKind::Color);

        assert!(reduce_appearance_action(
            &mut state,
            &DesktopAction::ResetBackground
        ));
        assert_eq!(state.background, BackgroundState::default());
    }
}
