//! `fetch`-backed contact message dispatch.

use platform_host::{ContactMessage, DispatchError, DispatchFuture, MessageDispatchService};

use crate::bridge::{self, DispatchReply};

/// Default endpoint receiving contact form submissions.
pub const DEFAULT_DISPATCH_ENDPOINT: &str = "/functions/v1/send-email";

/// Configuration for [`WebMessageDispatchService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebMessageDispatchConfig {
    /// URL receiving a JSON `POST` of the message.
    pub endpoint: String,
}

impl Default for WebMessageDispatchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DISPATCH_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Browser dispatch adapter that posts the message as JSON to a configured endpoint.
pub struct WebMessageDispatchService {
    config: WebMessageDispatchConfig,
}

impl WebMessageDispatchService {
    /// Creates a dispatch service posting to `config.endpoint`.
    pub fn new(config: WebMessageDispatchConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &WebMessageDispatchConfig {
        &self.config
    }
}

impl MessageDispatchService for WebMessageDispatchService {
    fn send<'a>(
        &'a self,
        message: &'a ContactMessage,
    ) -> DispatchFuture<'a, Result<(), DispatchError>> {
        Box::pin(async move {
            let reply = bridge::send_message(&self.config.endpoint, message)
                .await
                .map_err(DispatchError::Network)?;
            dispatch_result_from_reply(reply)
        })
    }
}

fn dispatch_result_from_reply(reply: DispatchReply) -> Result<(), DispatchError> {
    if let Some(error) = reply.error.filter(|text| !text.trim().is_empty()) {
        return Err(DispatchError::Rejected(error));
    }
    if reply.ok {
        Ok(())
    } else {
        Err(DispatchError::Status(reply.status))
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn reply(ok: bool, status: u16, error: Option<&str>) -> DispatchReply {
        DispatchReply {
            ok,
            status,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn success_reply_without_error_is_ok() {
        assert_eq!(dispatch_result_from_reply(reply(true, 200, None)), Ok(()));
    }

    #[test]
    fn body_error_wins_even_with_success_status() {
        assert_eq!(
            dispatch_result_from_reply(reply(true, 200, Some("mailbox full"))),
            Err(DispatchError::Rejected("mailbox full".to_string()))
        );
    }

    #[test]
    fn failed_status_without_body_error_reports_status() {
        assert_eq!(
            dispatch_result_from_reply(reply(false, 500, Some(" "))),
            Err(DispatchError::Status(500))
        );
    }

    #[test]
    fn host_build_reports_network_failure() {
        let service = WebMessageDispatchService::default();
        assert_eq!(service.config().endpoint, DEFAULT_DISPATCH_ENDPOINT);

        let err = block_on(service.send(&ContactMessage::default())).expect_err("no fetch on host");
        assert!(matches!(err, DispatchError::Network(_)));
    }
}
