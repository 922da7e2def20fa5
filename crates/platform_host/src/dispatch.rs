//! Contact message hand-off contracts.
//!
//! The desktop never delivers mail itself. A [`MessageDispatchService`] forwards a validated
//! [`ContactMessage`] to whichever collaborator the host wires in.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`MessageDispatchService`].
pub type DispatchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Payload handed to the dispatch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender display name.
    pub name: String,
    /// Sender reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// Failure returned by a dispatch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The host has no dispatch channel.
    #[error("message dispatch is unavailable on this host")]
    Unavailable,
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The collaborator answered with a non-success status and no message.
    #[error("message dispatch failed with status {0}")]
    Status(u16),
    /// The collaborator reported its own failure text.
    #[error("{0}")]
    Rejected(String),
}

impl DispatchError {
    /// Returns collaborator-provided text suitable for a user-facing notification, if any.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Network(message) | Self::Rejected(message) if !message.trim().is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

/// Host service that forwards contact messages.
pub trait MessageDispatchService {
    /// Sends one message and resolves once the collaborator acknowledged or rejected it.
    fn send<'a>(&'a self, message: &'a ContactMessage)
        -> DispatchFuture<'a, Result<(), DispatchError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Dispatch service for hosts without a delivery channel.
pub struct NoopMessageDispatchService;

impl MessageDispatchService for NoopMessageDispatchService {
    fn send<'a>(
        &'a self,
        _message: &'a ContactMessage,
    ) -> DispatchFuture<'a, Result<(), DispatchError>> {
        Box::pin(async { Err(DispatchError::Unavailable) })
    }
}

#[derive(Debug, Clone, Default)]
/// Recording dispatch service for tests, optionally scripted to fail.
pub struct MemoryMessageDispatchService {
    sent: Rc<RefCell<Vec<ContactMessage>>>,
    failure: Rc<RefCell<Option<DispatchError>>>,
}

impl MemoryMessageDispatchService {
    /// Makes every following send fail with `error`.
    pub fn fail_with(&self, error: DispatchError) {
        *self.failure.borrow_mut() = Some(error);
    }

    /// Returns the messages accepted so far.
    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.borrow().clone()
    }
}

impl MessageDispatchService for MemoryMessageDispatchService {
    fn send<'a>(
        &'a self,
        message: &'a ContactMessage,
    ) -> DispatchFuture<'a, Result<(), DispatchError>> {
        Box::pin(async move {
            if let Some(error) = self.failure.borrow().clone() {
                return Err(error);
            }
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        })
    }
}
