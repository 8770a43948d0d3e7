use desktop_app_contract::{ApplicationId, BackgroundKind, InstalledApp};
use serde::{Deserialize, Serialize};

use crate::icon_layout::IconLayout;

pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
/// Position of the first window opened on an empty desktop.
pub const CASCADE_ORIGIN: WindowPosition = WindowPosition { x: 100, y: 50 };
/// Offset added per already-open window.
pub const CASCADE_STEP: WindowPosition = WindowPosition { x: 50, y: 30 };
pub const TASKBAR_HEIGHT_PX: i32 = 48;
pub const DEFAULT_BACKGROUND_IMAGE: &str = "/assets/wallpapers/default.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Clamps both dimensions to at least `min_w` x `min_h`.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            width: self.width.max(min_w),
            height: self.height.max(min_h),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowBounds {
    pub position: WindowPosition,
    pub size: WindowSize,
}

/// Partial bounds update; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowBoundsPatch {
    pub position: Option<WindowPosition>,
    pub size: Option<WindowSize>,
}

/// Screen area available to the window layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub taskbar_height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32, taskbar_height: i32) -> Self {
        Self {
            width,
            height,
            taskbar_height,
        }
    }

    /// Bounds a maximized window occupies: everything above the taskbar.
    pub fn maximized_bounds(self) -> WindowBounds {
        WindowBounds {
            position: WindowPosition::new(0, 0),
            size: WindowSize::new(self.width, self.height - self.taskbar_height).clamped_min(1, 1),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768, TASKBAR_HEIGHT_PX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    pub position: WindowPosition,
    pub size: WindowSize,
    /// Bounds captured when the window was last maximized.
    pub prior_bounds: Option<WindowBounds>,
    pub z_index: u32,
    pub is_focused: bool,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowRecord {
    pub fn bounds(&self) -> WindowBounds {
        WindowBounds {
            position: self.position,
            size: self.size,
        }
    }

    pub fn set_bounds(&mut self, bounds: WindowBounds) {
        self.position = bounds.position;
        self.size = bounds.size;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundState {
    pub value: String,
    pub kind: BackgroundKind,
}

impl BackgroundState {
    pub fn new(value: impl Into<String>, kind: BackgroundKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND_IMAGE, BackgroundKind::Image)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub windows: Vec<WindowRecord>,
    pub icon_layout: IconLayout,
    /// Launchers shown as desktop icons, in display order.
    pub installed_apps: Vec<InstalledApp>,
    pub background: BackgroundState,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            icon_layout: IconLayout::default(),
            installed_apps: Vec::new(),
            background: BackgroundState::default(),
        }
    }
}

impl DesktopState {
    pub fn with_installed_apps(installed_apps: Vec<InstalledApp>) -> Self {
        Self {
            installed_apps,
            ..Self::default()
        }
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    /// Windows that should be drawn in the window layer.
    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| !w.minimized)
    }

    /// Current position of a desktop icon, or its default grid slot.
    ///
    /// Names not in the installed list take the slot after the last installed icon.
    pub fn icon_position(&self, icon_name: &str) -> WindowPosition {
        let index = self
            .installed_apps
            .iter()
            .position(|app| app.display_name == icon_name)
            .unwrap_or(self.installed_apps.len());
        self.icon_layout.position(icon_name, index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenWindowRequest {
    pub app_id: ApplicationId,
    pub title: String,
}

impl OpenWindowRequest {
    pub fn new(app_id: impl Into<ApplicationId>, title: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDragSession {
    pub icon_name: String,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

/// Transient pointer-gesture state, separate from the desktop model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub icon_dragging: Option<IconDragSession>,
}

/// Applies the pointer delta since gesture start to the captured start position.
pub fn dragged_position(
    pointer_start: PointerPosition,
    position_start: WindowPosition,
    pointer: PointerPosition,
) -> WindowPosition {
    position_start.offset(pointer.x - pointer_start.x, pointer.y - pointer_start.y)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn maximized_bounds_exclude_taskbar() {
        let bounds = Viewport::new(1024, 768, 48).maximized_bounds();
        assert_eq!(bounds.position, WindowPosition::new(0, 0));
        assert_eq!(bounds.size, WindowSize::new(1024, 720));
    }

    #[test]
    fn maximized_bounds_keep_positive_size_on_tiny_viewports() {
        let bounds = Viewport::new(0, 30, 48).maximized_bounds();
        assert_eq!(bounds.size, WindowSize::new(1, 1));
    }

    #[test]
    fn dragged_position_applies_pointer_delta() {
        let moved = dragged_position(
            PointerPosition::new(110, 60),
            WindowPosition::new(100, 50),
            PointerPosition::new(90, 200),
        );
        assert_eq!(moved, WindowPosition::new(80, 190));
    }
}
