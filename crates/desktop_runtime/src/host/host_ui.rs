#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::{Viewport, WindowId, TASKBAR_HEIGHT_PX};

/// DOM id of a window frame element.
pub(crate) fn window_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

pub(super) fn focus_window_input(window_id: WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Deferred so a freshly opened frame is in the DOM before the lookup.
        let callback = Closure::once_into_js(move || {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let target = document
                .get_element_by_id(&window_primary_input_dom_id(window_id.0))
                .or_else(|| document.get_element_by_id(&window_dom_id(window_id)));
            if let Some(element) = target.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

pub(super) fn desktop_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return Viewport::new(width, height, TASKBAR_HEIGHT_PX);
        }
    }

    Viewport::new(1024, 768, TASKBAR_HEIGHT_PX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_viewport_uses_reference_desktop_size() {
        let viewport = desktop_viewport();
        assert_eq!(viewport, Viewport::default());
        assert_eq!(viewport.maximized_bounds().size.height, 720);
    }

    #[test]
    fn window_dom_ids_are_stable() {
        assert_eq!(window_dom_id(WindowId(7)), "desktop-window-7");
    }
}
