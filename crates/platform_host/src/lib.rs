//! Host-neutral service contracts used by the desktop runtime and its browser adapter.
//!
//! The runtime only talks to a flat key/value preference store and a wall clock. Concrete
//! browser storage lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;
pub mod time;

pub use storage::prefs::{
    save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::unix_time_ms_now;
