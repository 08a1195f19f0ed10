//! Collaborator interface: connectors and sessions
//!
//! A [`Connector`] hands out sessions; a [`Session`] runs query text and
//! yields records. Pooling, credentials and transport security all live behind
//! these traits and are not graphlens' concern.

use crate::codes;
use crate::record::Record;
use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

/// Records of one query, in the order the database produced them
///
/// An `Err` item ends the stream; failures may surface after some records
/// were already delivered.
pub type RecordStream = BoxStream<'static, Result<Record, SessionError>>;

/// Failure reported by a connector or a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No connection has been established yet
    #[error("not connected")]
    NotConnected,

    /// The server could not be reached
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A well-formed error response from the server
    #[error("{code}: {message}")]
    Server { code: String, message: String },

    /// Any other driver fault
    #[error("{0}")]
    Driver(String),
}

impl SessionError {
    /// Create a server error
    pub fn server<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        SessionError::Server {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The server or driver error code, when one exists
    pub fn code(&self) -> Option<&str> {
        match self {
            SessionError::Server { code, .. } => Some(code.as_str()),
            SessionError::ServiceUnavailable(_) => Some(codes::SERVICE_UNAVAILABLE),
            SessionError::NotConnected | SessionError::Driver(_) => None,
        }
    }

    /// Returns true if the failure means there is no usable connection
    pub fn is_connection_fault(&self) -> bool {
        match self {
            SessionError::NotConnected | SessionError::ServiceUnavailable(_) => true,
            SessionError::Server { code, .. } => codes::is_transport(code),
            SessionError::Driver(_) => false,
        }
    }
}

/// A transport-level handle used to submit queries
///
/// Callers close each session exactly once; a session is never shared
/// between concurrent executions.
#[async_trait]
pub trait Session: Send {
    /// Submit query text verbatim and stream its records
    async fn run(&mut self, query: &str) -> Result<RecordStream, SessionError>;

    /// Release the session back to its connector
    async fn close(&mut self) -> Result<(), SessionError>;
}

/// Source of sessions
#[async_trait]
pub trait Connector: Send + Sync {
    type Session: Session;

    /// Acquire a fresh session
    async fn acquire_session(&self) -> Result<Self::Session, SessionError>;
}
