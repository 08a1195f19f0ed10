//! graphlens Query Executor
//!
//! Drives one query from session acquisition to a finished [`QueryOutcome`]:
//! acquire a session, run the query, normalize every record, summarize, and
//! release the session on every exit path.
//!
//! Failures come back as [`graphlens_core::Error`], already classified into
//! connection and query errors.
//!
//! [`QueryOutcome`]: graphlens_core::QueryOutcome

pub mod config;
pub mod executor;
pub mod failure;

pub use config::ExecutorConfig;
pub use executor::{ExecutionState, QueryExecutor};
pub use failure::{classify_acquire_failure, classify_run_failure};
