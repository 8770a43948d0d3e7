//! Desktop session core: window manager reducer, launcher and file tree persistence, desktop bus,
//! and the Leptos shell that renders them.

pub mod app_bus;
pub mod apps;
pub mod components;
mod effect_executor;
pub mod file_tree;
pub mod host;
pub mod icon_layout;
pub mod icons;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod startup;
pub mod taskbar;
pub mod wallpaper;
pub mod window_manager;

pub use app_bus::{DesktopBus, SubscriptionId};
pub use apps::AppRegistry;
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use file_tree::{FileNode, FileNodeKind};
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{
    load_file_tree, load_file_tree_or_default, load_installed_apps,
    load_installed_apps_or_default, persist_file_tree, persist_installed_apps, PersistenceError,
    FILE_TREE_KEY, INSTALLED_APPS_KEY,
};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
