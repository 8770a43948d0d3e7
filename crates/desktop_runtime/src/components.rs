//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod startup;
mod taskbar;
mod window;

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{
    desktop_icons::DesktopIconLayer, startup::StartupScreen, taskbar::Taskbar,
    window::DesktopWindow,
};
use crate::{model::PointerPosition, reducer::DesktopAction, wallpaper};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Full desktop surface: boot splash, then background, icons, window layer, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let background_style = move || {
        state.with(|desktop| {
            format!(
                "background: {};",
                wallpaper::css_background(&desktop.background)
            )
        })
    };
    let background_kind = move || state.with(|desktop| desktop.background.kind.token());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let (dragging, icon_dragging) = runtime.interaction.with_untracked(|interaction| {
            (
                interaction.dragging.is_some(),
                interaction.icon_dragging.is_some(),
            )
        });

        if dragging {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if icon_dragging {
            runtime.dispatch_action(DesktopAction::UpdateIconDrag { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);
    let host_strategy = runtime.host.with_value(|host| host.host_strategy_name());
    let booted = create_rw_signal(false);
    let finish_startup = Callback::new(move |_| booted.set(true));

    view! {
        <Show
            when=move || booted.get()
            fallback=move || view! { <StartupScreen on_complete=finish_startup /> }
        >
            <div
                id="desktop-shell-root"
                class="desktop-shell"
                tabindex="-1"
                data-host-strategy=host_strategy
                data-background-kind=background_kind
                style=background_style
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_end
                on:pointercancel=on_pointer_end
            >
                <DesktopIconLayer />

                <div class="desktop-window-layer">
                    <For
                        each=move || state.with(|desktop| {
                            desktop.windows.iter().map(|win| win.id).collect::<Vec<_>>()
                        })
                        key=|window_id| window_id.0
                        let:window_id
                    >
                        <DesktopWindow window_id=window_id />
                    </For>
                </div>

                <Taskbar />
            </div>
        </Show>
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Only the primary button of a mouse, or the primary touch/pen contact, starts a drag.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition::new(ev.client_x(), ev.client_y())
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let (dragging, icon_dragging) = runtime.interaction.with_untracked(|interaction| {
        (
            interaction.dragging.is_some(),
            interaction.icon_dragging.is_some(),
        )
    });
    if dragging {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if icon_dragging {
        runtime.dispatch_action(DesktopAction::EndIconDrag);
    }
}
