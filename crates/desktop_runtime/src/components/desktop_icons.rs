use desktop_app_contract::InstalledApp;

use super::*;
use crate::{
    icons::{FluentIcon, IconName, IconSize},
    model::OpenWindowRequest,
};

#[component]
pub(super) fn DesktopIconLayer() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="desktop-icon-layer" role="list" aria-label="Desktop">
            <For
                each=move || runtime.state.with(|state| state.installed_apps.clone())
                key=|app| app.app_id.to_string()
                let:app
            >
                <DesktopIcon app=app />
            </For>
        </div>
    }
}

#[component]
fn DesktopIcon(app: InstalledApp) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon_name = app.display_name.clone();
    let position = {
        let icon_name = icon_name.clone();
        create_memo(move |_| runtime.state.with(|state| state.icon_position(&icon_name)))
    };

    let begin_drag = {
        let icon_name = icon_name.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_pointer(&ev) {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.stop_propagation();
            runtime.dispatch_action(DesktopAction::BeginIconDrag {
                icon_name: icon_name.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let open = {
        let request = OpenWindowRequest::new(app.app_id.clone(), app.display_name.clone());
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::OpenWindow(request.clone()));
        }
    };

    view! {
        <div
            class="desktop-icon"
            role="listitem"
            tabindex="0"
            title=app.size_label.clone()
            style=move || {
                let position = position.get();
                format!("left:{}px;top:{}px;", position.x, position.y)
            }
            on:pointerdown=begin_drag
            on:dblclick=open
        >
            <span class="desktop-icon-glyph">
                <FluentIcon icon=IconName::from_icon_id(&app.icon_id) size=IconSize::Lg />
            </span>
            <span class="desktop-icon-label">{app.display_name.clone()}</span>
        </div>
    }
}
