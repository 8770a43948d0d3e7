use desktop_app_contract::WindowControls;

use super::*;
use crate::{
    apps,
    host::window_dom_id,
    icons::{FluentIcon, IconName, IconSize},
    model::{WindowId, WindowRecord},
};

fn window_frame_style(win: &WindowRecord) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        win.position.x, win.position.y, win.size.width, win.size.height, win.z_index
    )
}

fn window_frame_class(win: &WindowRecord) -> String {
    let focused_class = if win.is_focused { " focused" } else { "" };
    let minimized_class = if win.minimized { " minimized" } else { "" };
    let maximized_class = if win.maximized { " maximized" } else { "" };
    format!("desktop-window{focused_class}{minimized_class}{maximized_class}")
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| runtime.state.with(|state| state.window(window_id).cloned()));

    let focus = move |_: web_sys::PointerEvent| {
        let should_focus = window.with(|w| w.as_ref().is_some_and(|w| !w.is_focused));
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let minimize = move || runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    let close = move || runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id,
            viewport: runtime.host.with_value(|host| host.desktop_viewport()),
        });
    };
    let controls = WindowControls {
        close: Callback::new(move |_| close()),
        minimize: Callback::new(move |_| minimize()),
        toggle_maximize: Callback::new(move |_| toggle_maximize()),
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    };
    let is_maximized = move || window.with(|w| w.as_ref().is_some_and(|w| w.maximized));
    let title = move || window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default());
    let frame_class =
        move || window.with(|w| w.as_ref().map(window_frame_class).unwrap_or_default());
    let frame_style =
        move || window.with(|w| w.as_ref().map(window_frame_style).unwrap_or_default());

    view! {
        <Show when=move || window.with(Option::is_some) fallback=|| ()>
            <section
                id=window_dom_id(window_id)
                class=frame_class
                style=frame_style
                hidden=move || window.with(|w| w.as_ref().is_some_and(|w| w.minimized))
                tabindex="-1"
                role="dialog"
                aria-label=title
                on:pointerdown=focus
            >
                <header
                    class="titlebar"
                    on:pointerdown=begin_move
                    on:dblclick=titlebar_double_click
                >
                    <span class="titlebar-title">{title}</span>
                    <div class="titlebar-controls">
                        <button
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                minimize();
                            }
                        >
                            <FluentIcon icon=IconName::WindowMinimize size=IconSize::Xs />
                        </button>
                        <button
                            aria-label=move || {
                                if is_maximized() { "Restore window" } else { "Maximize window" }
                            }
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                toggle_maximize();
                            }
                        >
                            {move || {
                                let icon = if is_maximized() {
                                    IconName::WindowRestore
                                } else {
                                    IconName::WindowMaximize
                                };
                                view! { <FluentIcon icon=icon size=IconSize::Xs /> }
                            }}
                        </button>
                        <button
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                close();
                            }
                        >
                            <FluentIcon icon=IconName::Dismiss size=IconSize::Xs />
                        </button>
                    </div>
                </header>
                <div class="window-body">
                    <WindowBody window_id=window_id controls=controls />
                </div>
            </section>
        </Show>
    }
}

/// Mounts app content once per window; frame updates never remount it.
#[component]
fn WindowBody(window_id: WindowId, controls: WindowControls) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let publisher = runtime.bus.with_value(|bus| bus.publisher());
    let contents = runtime
        .state
        .with_untracked(|state| state.window(window_id).cloned())
        .map(|win| {
            runtime.registry.with_value(|registry| {
                apps::render_window_contents(registry, &win, Some(controls), publisher)
            })
        })
        .unwrap_or_else(|| ().into_view());

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}
