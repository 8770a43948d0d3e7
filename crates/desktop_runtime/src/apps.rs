//! App catalog, launcher entries, and the window content registry.
//!
//! The catalog is generated at build time from `app_manifests/*.toml`. Window content is looked
//! up in an [`AppRegistry`] keyed by [`ApplicationId`]; a miss renders a placeholder instead of
//! failing the window.

mod placeholders;

use std::{collections::HashMap, sync::OnceLock};

use desktop_app_contract::{
    AppModule, AppMountContext, ApplicationId, InstalledApp, SignalPublisher, WindowControls,
};
use leptos::*;
use serde::Deserialize;

use crate::model::{OpenWindowRequest, WindowRecord};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One app manifest as emitted by the build script.
pub struct AppManifest {
    pub schema_version: u32,
    pub order: u32,
    pub app_id: String,
    pub display_name: String,
    pub icon_id: String,
    #[serde(default)]
    pub size_label: String,
    pub show_in_launcher: bool,
    pub show_on_desktop: bool,
}

impl AppManifest {
    pub fn application_id(&self) -> ApplicationId {
        ApplicationId::new(self.app_id.clone())
    }

    pub fn to_installed_app(&self) -> InstalledApp {
        InstalledApp {
            app_id: self.application_id(),
            display_name: self.display_name.clone(),
            icon_id: self.icon_id.clone(),
            size_label: self.size_label.clone(),
            installed_at_unix_ms: 0,
        }
    }

    pub fn open_request(&self) -> OpenWindowRequest {
        OpenWindowRequest::new(self.application_id(), self.display_name.clone())
    }
}

/// Returns the generated catalog JSON.
pub fn app_catalog_json() -> &'static str {
    APP_MANIFEST_CATALOG_JSON
}

/// Parsed app catalog, sorted by manifest order.
pub fn app_catalog() -> &'static [AppManifest] {
    static CATALOG: OnceLock<Vec<AppManifest>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(APP_MANIFEST_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("generated app catalog failed to parse: {err}");
            Vec::new()
        })
    })
}

pub fn app_manifest(app_id: &ApplicationId) -> Option<&'static AppManifest> {
    app_catalog()
        .iter()
        .find(|manifest| manifest.app_id == app_id.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Entry in the taskbar launcher menu.
pub struct LauncherEntry {
    pub app_id: ApplicationId,
    pub display_name: String,
    pub icon_id: String,
}

impl LauncherEntry {
    pub fn open_request(&self) -> OpenWindowRequest {
        OpenWindowRequest::new(self.app_id.clone(), self.display_name.clone())
    }
}

pub fn launcher_entries() -> Vec<LauncherEntry> {
    app_catalog()
        .iter()
        .filter(|manifest| manifest.show_in_launcher)
        .map(|manifest| LauncherEntry {
            app_id: manifest.application_id(),
            display_name: manifest.display_name.clone(),
            icon_id: manifest.icon_id.clone(),
        })
        .collect()
}

/// Desktop icons shown on first boot or when the persisted list is unusable.
pub fn default_installed_apps() -> Vec<InstalledApp> {
    app_catalog()
        .iter()
        .filter(|manifest| manifest.show_on_desktop)
        .map(AppManifest::to_installed_app)
        .collect()
}

#[derive(Debug, Clone, Default)]
/// Maps application ids to mountable window content.
pub struct AppRegistry {
    modules: HashMap<ApplicationId, AppModule>,
}

impl AppRegistry {
    /// Registry with every built-in collaborator.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.register(
            "calculator",
            AppModule::new(placeholders::mount_calculator_app),
        );
        registry.register("terminal", AppModule::new(placeholders::mount_terminal_app));
        registry.register("editor", AppModule::new(placeholders::mount_editor_app));
        registry.register("settings", AppModule::new(placeholders::mount_settings_app));
        registry.register("app-store", AppModule::new(placeholders::mount_app_store_app));
        registry
    }

    /// Adds or replaces the module for `app_id`.
    pub fn register(&mut self, app_id: impl Into<ApplicationId>, module: AppModule) {
        self.modules.insert(app_id.into(), module);
    }

    pub fn resolve(&self, app_id: &ApplicationId) -> Option<AppModule> {
        self.modules.get(app_id).copied()
    }

    pub fn contains(&self, app_id: &ApplicationId) -> bool {
        self.modules.contains_key(app_id)
    }
}

/// Mounts the content for `window`, or a placeholder when its app id is not registered.
pub fn render_window_contents(
    registry: &AppRegistry,
    window: &WindowRecord,
    controls: Option<WindowControls>,
    publisher: SignalPublisher,
) -> View {
    let Some(module) = registry.resolve(&window.app_id) else {
        logging::warn!("no content registered for app `{}`", window.app_id);
        return render_missing_content(&window.app_id);
    };

    module.mount(AppMountContext {
        app_id: window.app_id.clone(),
        window_id: window.id.0,
        title: window.title.clone(),
        controls,
        publisher,
    })
}

fn render_missing_content(app_id: &ApplicationId) -> View {
    let app_id = app_id.to_string();
    view! {
        <div class="app-shell app-missing-content" role="alert">
            <p><strong>"Content not found"</strong></p>
            <p>"No app is registered for "<code>{app_id}</code>"."</p>
        </div>
    }
    .into_view()
}
