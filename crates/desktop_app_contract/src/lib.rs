//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! Apps never hold a reference to the window manager. They receive an [`AppMountContext`] with a
//! narrow [`SignalPublisher`] for desktop-level requests (open another app, change the wallpaper,
//! announce an install) and an optional [`WindowControls`] set for their own window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, rc::Rc};

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// DOM id an app puts on its primary text field so the desktop can focus it when the window
/// opens or is restored.
pub fn window_primary_input_dom_id(window_id: WindowRuntimeId) -> String {
    format!("desktop-window-{window_id}-primary-input")
}

/// String key into the app content registry.
///
/// Identifiers are opaque: any string is accepted so that collaborators may request apps the
/// registry does not know about (those windows render a "content not found" placeholder).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates an identifier from any string-like value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApplicationId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ApplicationId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// How a background value string is interpreted by the desktop renderer.
pub enum BackgroundKind {
    /// `value` is an image reference (URL or asset path).
    Image,
    /// `value` is a CSS solid color.
    Color,
    /// `value` is a CSS gradient expression.
    Gradient,
}

impl BackgroundKind {
    /// Classifies a raw background string by its syntactic shape.
    pub fn infer(value: &str) -> Self {
        let value = value.trim_start();
        if value.starts_with("linear-gradient")
            || value.starts_with("radial-gradient")
            || value.starts_with("conic-gradient")
        {
            Self::Gradient
        } else if value.starts_with('#') || value.starts_with("rgb") || value.starts_with("hsl") {
            Self::Color
        } else {
            Self::Image
        }
    }

    /// Returns a stable token for logging and data attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Color => "color",
            Self::Gradient => "gradient",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Launcher entry persisted in the installed-apps list.
pub struct InstalledApp {
    /// Registry key opened when the launcher is activated.
    pub app_id: ApplicationId,
    /// Label shown under the desktop icon and used as the window title.
    pub display_name: String,
    /// Icon token used by the desktop renderer.
    pub icon_id: String,
    /// Human-readable package size.
    #[serde(default)]
    pub size_label: String,
    /// Install timestamp in unix milliseconds.
    #[serde(default)]
    pub installed_at_unix_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
/// Desktop-level requests any collaborator may publish on the desktop bus.
pub enum DesktopSignal {
    /// Request a new window for `app_id`.
    OpenApp {
        /// Registry key of the app to open.
        app_id: ApplicationId,
        /// Window title; empty titles fall back to the app id.
        title: String,
    },
    /// Replace the desktop background.
    ChangeBackground {
        /// Image reference, CSS color, or CSS gradient.
        value: String,
        /// Interpretation of `value`.
        kind: BackgroundKind,
    },
    /// A package-manager style collaborator installed an app.
    AppInstalled(InstalledApp),
    /// A package-manager style collaborator removed an app.
    AppRemoved {
        /// Registry key of the removed app.
        app_id: ApplicationId,
    },
}

impl DesktopSignal {
    /// Builds an [`DesktopSignal::OpenApp`] request.
    pub fn open_app(app_id: impl Into<ApplicationId>, title: impl Into<String>) -> Self {
        Self::OpenApp {
            app_id: app_id.into(),
            title: title.into(),
        }
    }

    /// Builds a [`DesktopSignal::ChangeBackground`] request.
    pub fn change_background(value: impl Into<String>, kind: BackgroundKind) -> Self {
        Self::ChangeBackground {
            value: value.into(),
            kind,
        }
    }

    /// Returns a stable token naming the signal type.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::OpenApp { .. } => "open-app",
            Self::ChangeBackground { .. } => "change-background",
            Self::AppInstalled(_) => "app-installed",
            Self::AppRemoved { .. } => "app-removed",
        }
    }
}

#[derive(Clone)]
/// Fire-and-forget publish handle handed to collaborators.
pub struct SignalPublisher {
    publish_fn: Rc<dyn Fn(DesktopSignal)>,
}

impl SignalPublisher {
    /// Wraps a publish function.
    pub fn new(publish_fn: impl Fn(DesktopSignal) + 'static) -> Self {
        Self {
            publish_fn: Rc::new(publish_fn),
        }
    }

    /// Publisher that drops every signal; used for previews and tests.
    pub fn disconnected() -> Self {
        Self::new(|_| {})
    }

    /// Publishes a signal to the desktop.
    pub fn publish(&self, signal: DesktopSignal) {
        (self.publish_fn)(signal);
    }
}

impl fmt::Debug for SignalPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalPublisher").finish_non_exhaustive()
    }
}

#[derive(Clone, Copy)]
/// Window-level callbacks an app may use to control its own frame.
pub struct WindowControls {
    /// Closes the hosting window.
    pub close: Callback<()>,
    /// Minimizes the hosting window.
    pub minimize: Callback<()>,
    /// Toggles maximize on the hosting window.
    pub toggle_maximize: Callback<()>,
}

impl WindowControls {
    /// Requests that the hosting window close.
    pub fn close(&self) {
        self.close.call(());
    }

    /// Requests that the hosting window minimize.
    pub fn minimize(&self) {
        self.minimize.call(());
    }

    /// Requests that the hosting window toggle maximize.
    pub fn toggle_maximize(&self) {
        self.toggle_maximize.call(());
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Registry key the window was opened with.
    pub app_id: ApplicationId,
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Window title at open time.
    pub title: String,
    /// Callbacks for the hosting window; apps are free to ignore them.
    pub controls: Option<WindowControls>,
    /// Desktop bus publish handle.
    pub publisher: SignalPublisher,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
