use std::time::Duration;

use super::*;
use crate::{
    apps::{launcher_entries, LauncherEntry},
    icons::{FluentIcon, IconName, IconSize},
    taskbar::{
        filter_launcher_entries, format_taskbar_clock, taskbar_buttons, LauncherMenuState,
        TaskbarClockSnapshot,
    },
};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let menu = create_rw_signal(LauncherMenuState::default());
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());
    let entries = store_value(launcher_entries());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if menu.with_untracked(|menu| menu.open) {
            menu.update(LauncherMenuState::close);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && menu.with_untracked(|menu| menu.open) {
            ev.prevent_default();
            menu.update(LauncherMenuState::close);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let filtered_entries = move || {
        let query = menu.with(|menu| menu.query.clone());
        entries.with_value(|entries| filter_launcher_entries(entries, &query))
    };
    let select_entry = move |entry: LauncherEntry| {
        let request = menu
            .try_update(|menu| menu.select(&entry))
            .unwrap_or_else(|| entry.open_request());
        runtime.dispatch_action(DesktopAction::OpenWindow(request));
    };

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <div class="taskbar-launcher" on:mousedown=move |ev| ev.stop_propagation()>
                <button
                    type="button"
                    class="taskbar-launcher-button"
                    aria-haspopup="menu"
                    aria-expanded=move || menu.with(|menu| menu.open.to_string())
                    on:click=move |_| menu.update(LauncherMenuState::toggle)
                >
                    <FluentIcon icon=IconName::Launcher size=IconSize::Sm />
                    <span>"Apps"</span>
                </button>
                <Show when=move || menu.with(|menu| menu.open) fallback=|| ()>
                    <div class="launcher-menu" role="menu">
                        <input
                            type="search"
                            class="launcher-search"
                            placeholder="Search apps"
                            aria-label="Search apps"
                            prop:value=move || menu.with(|menu| menu.query.clone())
                            on:input=move |ev| {
                                let query = event_target_value(&ev);
                                menu.update(|menu| menu.set_query(query));
                            }
                        />
                        <ul class="launcher-entries">
                            <For
                                each=filtered_entries
                                key=|entry| entry.app_id.to_string()
                                let:entry
                            >
                                {
                                    let icon = IconName::from_icon_id(&entry.icon_id);
                                    let label = entry.display_name.clone();
                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                role="menuitem"
                                                class="launcher-entry"
                                                on:click=move |_| select_entry(entry.clone())
                                            >
                                                <FluentIcon icon=icon size=IconSize::Sm />
                                                <span>{label}</span>
                                            </button>
                                        </li>
                                    }
                                }
                            </For>
                        </ul>
                    </div>
                </Show>
            </div>

            <div class="taskbar-windows" role="list">
                <For
                    each=move || state.with(taskbar_buttons)
                    key=|button| {
                        (button.window_id.0, button.title.clone(), button.minimized, button.focused)
                    }
                    let:button
                >
                    {
                        let window_id = button.window_id;
                        view! {
                            <button
                                type="button"
                                role="listitem"
                                class=button.class_name()
                                aria-pressed=button.focused.to_string()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::RestoreWindow {
                                        window_id,
                                    })
                                }
                            >
                                {button.title.clone()}
                            </button>
                        }
                    }
                </For>
            </div>

            <time class="taskbar-clock">{move || format_taskbar_clock(clock_now.get())}</time>
        </footer>
    }
}
