//! graphlens - graph query results for embedded graph views
//!
//! This is the main library crate that re-exports all graphlens components.

pub use graphlens_core as core;
pub use graphlens_executor as executor;
pub use graphlens_normalize as normalize;
pub use graphlens_protocol as protocol;

// Re-export commonly used types
pub use graphlens_core::{
    Error, ExecutionSummary, GraphData, GraphNode, GraphRelationship, QueryErrorKind,
    QueryOutcome, Result, ScalarRow,
};

pub use graphlens_executor::{ExecutorConfig, QueryExecutor};
pub use graphlens_normalize::LargeIntegerPolicy;
pub use graphlens_protocol::{Connector, Record, Session, SessionError};
