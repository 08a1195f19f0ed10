//! Error types for graphlens
//!
//! Two families reach the caller: connection failures (no usable session) and
//! query failures (the session existed but the query did not complete). Each
//! carries a short message that is safe to show to a user, plus an optional
//! underlying cause meant for diagnostic logging only.

use thiserror::Error;

/// Boxed underlying cause attached to an [`Error`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Sub-classification of a failed query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryErrorKind {
    /// The database rejected the query text as malformed
    Syntax,
    /// The session lost its authorization while the query ran
    Unauthorized,
    /// Any other well-formed error response from the database
    Database,
    /// A fault that did not come from a database error response
    Unclassified,
}

impl QueryErrorKind {
    /// Default display message for this kind
    pub fn default_message(self) -> &'static str {
        match self {
            QueryErrorKind::Syntax => "The query has a syntax error",
            QueryErrorKind::Unauthorized => {
                "The connection is no longer authorized to run queries"
            }
            QueryErrorKind::Database => "The database reported an error",
            QueryErrorKind::Unclassified => "The query failed unexpectedly",
        }
    }
}

/// The main error type for graphlens operations
#[derive(Error, Debug)]
pub enum Error {
    // ========== Connection Errors ==========
    #[error("{message}")]
    Connection {
        message: String,
        #[source]
        cause: Option<BoxError>,
    },

    // ========== Query Errors ==========
    #[error("{message}")]
    Query {
        kind: QueryErrorKind,
        message: String,
        #[source]
        cause: Option<BoxError>,
    },
}

/// Result type alias for graphlens operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a connection error without an underlying cause
    pub fn connection<M: Into<String>>(message: M) -> Self {
        Error::Connection {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a connection error wrapping an underlying cause
    pub fn connection_caused_by<M, E>(message: M, cause: E) -> Self
    where
        M: Into<String>,
        E: Into<BoxError>,
    {
        Error::Connection {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Create a query error using the kind's default message
    pub fn query(kind: QueryErrorKind) -> Self {
        Error::Query {
            kind,
            message: kind.default_message().to_string(),
            cause: None,
        }
    }

    /// Create a query error with an explicit message and cause
    pub fn query_caused_by<M, E>(kind: QueryErrorKind, message: M, cause: E) -> Self
    where
        M: Into<String>,
        E: Into<BoxError>,
    {
        Error::Query {
            kind,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Short message suitable for direct display
    pub fn message(&self) -> &str {
        match self {
            Error::Connection { message, .. } | Error::Query { message, .. } => message,
        }
    }

    /// Underlying cause, for diagnostics only
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::Connection { cause, .. } | Error::Query { cause, .. } => cause.as_deref(),
        }
    }

    /// Returns true if no usable session could be obtained or kept
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// Returns true if the query itself failed
    pub fn is_query(&self) -> bool {
        matches!(self, Error::Query { .. })
    }

    /// Query error kind, if this is a query error
    pub fn query_kind(&self) -> Option<QueryErrorKind> {
        match self {
            Error::Query { kind, .. } => Some(*kind),
            Error::Connection { .. } => None,
        }
    }
}
