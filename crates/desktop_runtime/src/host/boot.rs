use leptos::{create_effect, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let apps = persistence::load_installed_apps_or_default(host.prefs.as_ref()).await;
            dispatch.call(DesktopAction::HydrateInstalledApps { apps });
        });
    });
}
