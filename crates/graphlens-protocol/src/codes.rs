//! Error codes reported by the database and by the driver

/// Malformed query text
pub const SYNTAX_ERROR: &str = "Neo.ClientError.Statement.SyntaxError";

/// Prefix shared by every authentication and authorization failure
pub const SECURITY_PREFIX: &str = "Neo.ClientError.Security.";

pub const UNAUTHORIZED: &str = "Neo.ClientError.Security.Unauthorized";
pub const AUTHORIZATION_EXPIRED: &str = "Neo.ClientError.Security.AuthorizationExpired";
pub const FORBIDDEN: &str = "Neo.ClientError.Security.Forbidden";

/// Driver-side: the server could not be reached
pub const SERVICE_UNAVAILABLE: &str = "ServiceUnavailable";

/// Driver-side: the session's connection was lost
pub const SESSION_EXPIRED: &str = "SessionExpired";

/// Returns true for codes of the syntax class
pub fn is_syntax(code: &str) -> bool {
    code.ends_with("SyntaxError")
}

/// Returns true for codes of the authentication/authorization class
pub fn is_security(code: &str) -> bool {
    code.starts_with(SECURITY_PREFIX)
}

/// Returns true for codes meaning the transport itself is gone
pub fn is_transport(code: &str) -> bool {
    matches!(code, SERVICE_UNAVAILABLE | SESSION_EXPIRED)
}
