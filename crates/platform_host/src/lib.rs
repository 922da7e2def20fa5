//! Typed host-domain contracts and shared models used by the desktop runtime and its apps.
//!
//! This crate is the API-first boundary for platform services: preference storage, contact
//! message dispatch, external document navigation, randomness, and time helpers. Concrete browser adapters
//! live in `platform_host_web`; the in-memory adapters here back host-side tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dispatch;
pub mod external_url;
pub mod host;
pub mod random;
pub mod storage;
pub mod time;

pub use dispatch::{
    ContactMessage, DispatchError, DispatchFuture, MemoryMessageDispatchService,
    MessageDispatchService, NoopMessageDispatchService,
};
pub use external_url::{
    ExternalUrlError, ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService,
    NoopExternalUrlService, UrlRequest,
};
pub use host::{HostServices, HostStrategy};
pub use random::random_unit;
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
    PrefsStoreFuture,
};
pub use time::{unix_time_ms_now, ClockSnapshot};
