//! Failure classification
//!
//! Maps collaborator failures onto the two error families callers see. The
//! original [`SessionError`] is always kept as the cause; the message is the
//! part that may be shown to a user.

use graphlens_core::{Error, QueryErrorKind};
use graphlens_protocol::{codes, SessionError};

/// Classify a failure to acquire a session
///
/// Always a connection error: without a session no query was attempted.
pub fn classify_acquire_failure(err: SessionError) -> Error {
    let message = match &err {
        SessionError::NotConnected => "Not connected to a graph database",
        SessionError::ServiceUnavailable(_) => "Unable to reach the graph database",
        SessionError::Server { code, .. } if codes::is_security(code) => {
            "The database rejected the supplied credentials"
        }
        SessionError::Server { .. } | SessionError::Driver(_) => {
            "Could not open a database session"
        }
    };
    Error::connection_caused_by(message, err)
}

/// Classify a failure raised while the query ran or its records streamed
pub fn classify_run_failure(err: SessionError) -> Error {
    if err.is_connection_fault() {
        let message = match &err {
            SessionError::NotConnected => "Not connected to a graph database",
            _ => "Lost the connection to the graph database",
        };
        return Error::connection_caused_by(message, err);
    }

    let kind = match &err {
        SessionError::Server { code, .. } if codes::is_syntax(code) => QueryErrorKind::Syntax,
        SessionError::Server { code, .. } if codes::is_security(code) => {
            QueryErrorKind::Unauthorized
        }
        SessionError::Server { .. } => QueryErrorKind::Database,
        _ => QueryErrorKind::Unclassified,
    };

    // Only generic database errors echo the server's text
    let message = match (&err, kind) {
        (SessionError::Server { message, .. }, QueryErrorKind::Database) => {
            format!("{}: {}", kind.default_message(), message)
        }
        _ => kind.default_message().to_string(),
    };

    Error::query_caused_by(kind, message, err)
}
