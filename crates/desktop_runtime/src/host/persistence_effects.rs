use leptos::{logging, spawn_local, SignalWithUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_installed_apps(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let installed = runtime
        .state
        .with_untracked(|state| state.installed_apps.clone());
    spawn_local(async move {
        if let Err(err) =
            persistence::persist_installed_apps(host.prefs.as_ref(), &installed).await
        {
            logging::warn!("persist installed apps failed: {err}");
        }
    });
}
