use leptos::leptos_dom::helpers::IntervalHandle;

use super::*;
use crate::startup::{StartupProgress, STARTUP_COMPLETE_DELAY, STARTUP_TICK};

/// Boot splash. Calls `on_complete` once, shortly after progress reaches 100%.
#[component]
pub(super) fn StartupScreen(on_complete: Callback<()>) -> impl IntoView {
    let progress = create_rw_signal(StartupProgress::default());
    let interval = store_value(None::<IntervalHandle>);

    let tick = move || {
        let finished = progress.try_update(StartupProgress::advance).unwrap_or(false);
        if finished {
            if let Some(handle) = interval.get_value() {
                handle.clear();
            }
            set_timeout(move || on_complete.call(()), STARTUP_COMPLETE_DELAY);
        }
    };

    match set_interval_with_handle(tick, STARTUP_TICK) {
        Ok(handle) => {
            interval.set_value(Some(handle));
            on_cleanup(move || handle.clear());
        }
        Err(err) => {
            logging::warn!("startup timer unavailable, skipping splash: {err:?}");
            on_complete.call(());
        }
    }

    view! {
        <div
            class="startup-screen"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || progress.get().percent().to_string()
        >
            <div class="startup-logo" aria-hidden="true"></div>
            <h1 class="startup-title">"Web Desktop"</h1>
            <p class="startup-message">
                <span class="startup-spinner" aria-hidden="true"></span>
                {move || progress.get().message()}
            </p>
            <div class="startup-track">
                <div
                    class="startup-bar"
                    style=move || format!("width:{}%;", progress.get().percent())
                ></div>
            </div>
            <p class="startup-percent">
                {move || format!("{}% Complete", progress.get().percent())}
            </p>
        </div>
    }
}
