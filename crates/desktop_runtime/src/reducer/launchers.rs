//! Reducer helpers for the installed launcher list.

use crate::{
    model::{DesktopState, InteractionState},
    reducer::{DesktopAction, RuntimeEffect},
};

/// Applies installed-launcher actions. Returns `true` when `action` was handled here.
///
/// Icon positions are kept on removal, so a reinstalled launcher returns to its old spot.
pub(super) fn reduce_launcher_action(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> bool {
    match action {
        DesktopAction::InstallApp { app } => {
            if state
                .installed_apps
                .iter()
                .any(|installed| installed.app_id == app.app_id)
            {
                return true;
            }
            state.installed_apps.push(app.clone());
            effects.push(RuntimeEffect::PersistInstalledApps);
        }
        DesktopAction::RemoveApp { app_id } => {
            let Some(index) = state
                .installed_apps
                .iter()
                .position(|installed| &installed.app_id == app_id)
            else {
                return true;
            };
            let removed = state.installed_apps.remove(index);
            if interaction
                .icon_dragging
                .as_ref()
                .is_some_and(|session| session.icon_name == removed.display_name)
            {
                interaction.icon_dragging = None;
            }
            effects.push(RuntimeEffect::PersistInstalledApps);
        }
        DesktopAction::HydrateInstalledApps { apps } => {
            state.installed_apps.clear();
            for app in apps {
                if !state
                    .installed_apps
                    .iter()
                    .any(|installed| installed.app_id == app.app_id)
                {
                    state.installed_apps.push(app.clone());
                }
            }
        }
        _ => return false,
    }
    true
}
