//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Only preference storage is needed by the desktop shell. On non-wasm targets the browser store
//! compiles to a stub so the runtime and its tests build natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the prefs adapter factory.
pub mod adapters;
pub mod storage;

pub use adapters::{
    host_strategy_name, prefs_store, selected_host_strategy, HostStrategy, PrefsStoreAdapter,
};
pub use storage::local_prefs::WebPrefsStore;
