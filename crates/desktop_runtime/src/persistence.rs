//! Persistence of the installed launcher list and the mock file tree through the host
//! [`PrefsStore`].
//!
//! Only these two repositories survive a reload. Windows, icon positions, and the background are
//! session-only.

use desktop_app_contract::InstalledApp;
use leptos::logging;
use platform_host::{save_pref_with, unix_time_ms_now, PrefsStore};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{apps, file_tree::FileNode};

/// Preference key holding the installed launcher list as a JSON array.
pub const INSTALLED_APPS_KEY: &str = "desktop.installed_apps.v1";
/// Preference key holding the mock file tree as one JSON object.
pub const FILE_TREE_KEY: &str = "desktop.file_tree.v1";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("prefs store failed: {0}")]
    Store(String),
    #[error("stored value under `{key}` is malformed: {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

async fn load_json<T: DeserializeOwned>(
    store: &dyn PrefsStore,
    key: &'static str,
) -> Result<Option<T>, PersistenceError> {
    let Some(raw) = store
        .load_pref(key)
        .await
        .map_err(PersistenceError::Store)?
    else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PersistenceError::Decode { key, source })
}

/// Loads the persisted launcher list. `Ok(None)` means nothing was stored.
///
/// # Errors
///
/// Returns [`PersistenceError::Store`] when the store read fails and
/// [`PersistenceError::Decode`] when the stored JSON is not a launcher list.
pub async fn load_installed_apps(
    store: &dyn PrefsStore,
) -> Result<Option<Vec<InstalledApp>>, PersistenceError> {
    load_json(store, INSTALLED_APPS_KEY).await
}

/// Loads the persisted launcher list, falling back to the built-in defaults when the store is
/// empty, missing, or corrupt.
pub async fn load_installed_apps_or_default(store: &dyn PrefsStore) -> Vec<InstalledApp> {
    match load_installed_apps(store).await {
        Ok(Some(apps)) if !apps.is_empty() => apps,
        Ok(_) => apps::default_installed_apps(),
        Err(err) => {
            logging::warn!("installed apps load failed, using defaults: {err}");
            apps::default_installed_apps()
        }
    }
}

/// Writes the launcher list.
///
/// # Errors
///
/// Returns [`PersistenceError::Store`] when serialization or the store write fails.
pub async fn persist_installed_apps(
    store: &dyn PrefsStore,
    installed: &[InstalledApp],
) -> Result<(), PersistenceError> {
    save_pref_with(store, INSTALLED_APPS_KEY, &installed)
        .await
        .map_err(PersistenceError::Store)
}

/// Loads the stored file tree. `Ok(None)` means nothing was stored.
///
/// # Errors
///
/// Returns [`PersistenceError::Store`] when the store read fails and
/// [`PersistenceError::Decode`] when the stored JSON is not a file tree.
pub async fn load_file_tree(
    store: &dyn PrefsStore,
) -> Result<Option<FileNode>, PersistenceError> {
    load_json(store, FILE_TREE_KEY).await
}

/// Loads the stored file tree, falling back to [`FileNode::default_tree`] when the store is
/// empty or unreadable.
pub async fn load_file_tree_or_default(store: &dyn PrefsStore) -> FileNode {
    match load_file_tree(store).await {
        Ok(Some(tree)) if tree.is_folder() => tree,
        Ok(_) => FileNode::default_tree(unix_time_ms_now()),
        Err(err) => {
            logging::warn!("file tree load failed, using defaults: {err}");
            FileNode::default_tree(unix_time_ms_now())
        }
    }
}

/// Writes the whole file tree.
///
/// # Errors
///
/// Returns [`PersistenceError::Store`] when serialization or the store write fails.
pub async fn persist_file_tree(
    store: &dyn PrefsStore,
    tree: &FileNode,
) -> Result<(), PersistenceError> {
    save_pref_with(store, FILE_TREE_KEY, tree)
        .await
        .map_err(PersistenceError::Store)
}
