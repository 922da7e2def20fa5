//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use thiserror::Error;

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Failure opening or downloading a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalUrlError {
    /// No browsing context is available.
    #[error("external navigation is unavailable on this host")]
    Unavailable,
    /// The host refused the request (for example a blocked popup).
    #[error("external navigation was blocked: {0}")]
    Blocked(String),
}

/// Host service for opening documents outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens a URL in a new browsing context.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), ExternalUrlError>>;

    /// Saves the resource at `url` locally under `file_name`.
    fn download_url<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> ExternalUrlFuture<'a, Result<(), ExternalUrlError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), ExternalUrlError>> {
        Box::pin(async { Err(ExternalUrlError::Unavailable) })
    }

    fn download_url<'a>(
        &'a self,
        _url: &'a str,
        _file_name: &'a str,
    ) -> ExternalUrlFuture<'a, Result<(), ExternalUrlError>> {
        Box::pin(async { Err(ExternalUrlError::Unavailable) })
    }
}

/// Request captured by [`MemoryExternalUrlService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlRequest {
    /// `open_url` call.
    Open(String),
    /// `download_url` call.
    Download {
        /// Requested resource.
        url: String,
        /// Suggested file name.
        file_name: String,
    },
}

#[derive(Debug, Clone, Default)]
/// Recording external URL service for tests.
pub struct MemoryExternalUrlService {
    requests: Rc<RefCell<Vec<UrlRequest>>>,
}

impl MemoryExternalUrlService {
    /// Returns every request made so far.
    pub fn requests(&self) -> Vec<UrlRequest> {
        self.requests.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), ExternalUrlError>> {
        Box::pin(async move {
            self.requests
                .borrow_mut()
                .push(UrlRequest::Open(url.to_string()));
            Ok(())
        })
    }

    fn download_url<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> ExternalUrlFuture<'a, Result<(), ExternalUrlError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(UrlRequest::Download {
                url: url.to_string(),
                file_name: file_name.to_string(),
            });
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_service_records_open_and_download_in_order() {
        let service = MemoryExternalUrlService::default();
        block_on(service.open_url("/resume/resume.pdf")).expect("open");
        block_on(service.download_url("/resume/resume.pdf", "Resume.pdf")).expect("download");

        assert_eq!(
            service.requests(),
            vec![
                UrlRequest::Open("/resume/resume.pdf".to_string()),
                UrlRequest::Download {
                    url: "/resume/resume.pdf".to_string(),
                    file_name: "Resume.pdf".to_string(),
                },
            ]
        );
    }

    #[test]
    fn noop_service_reports_unavailable() {
        let service = NoopExternalUrlService;
        assert_eq!(
            block_on(service.open_url("https://example.com")),
            Err(ExternalUrlError::Unavailable)
        );
    }
}
