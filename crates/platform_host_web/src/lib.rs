//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for preferences, contact message
//! dispatch, external document navigation, and document-level helpers. Non-wasm builds compile
//! against fallback shims so the workspace stays testable on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
mod bridge;
pub mod dispatch;
pub mod document;
pub mod external_url;
pub mod storage;

pub use adapters::{
    build_host_services, external_url_service, message_dispatch_service, prefs_store,
};
pub use dispatch::{WebMessageDispatchConfig, WebMessageDispatchService, DEFAULT_DISPATCH_ENDPOINT};
pub use external_url::WebExternalUrlService;
pub use storage::local_prefs::WebPrefsStore;
