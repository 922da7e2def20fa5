//! External URL host-service adapter for browser contexts.

use platform_host::{ExternalUrlError, ExternalUrlFuture, ExternalUrlService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter backed by the bridge interop layer.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), ExternalUrlError>> {
        Box::pin(async move {
            match bridge::open_url(url) {
                Ok(true) => Ok(()),
                Ok(false) => Err(ExternalUrlError::Blocked(url.to_string())),
                Err(_) => Err(ExternalUrlError::Unavailable),
            }
        })
    }

    fn download_url<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> ExternalUrlFuture<'a, Result<(), ExternalUrlError>> {
        Box::pin(async move {
            bridge::download_url(url, file_name).map_err(|_| ExternalUrlError::Unavailable)
        })
    }
}
