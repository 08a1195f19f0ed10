//! graphlens Core Library
//!
//! This crate provides the canonical graph model produced by one query
//! execution, together with the error taxonomy shared by every other crate.
//!
//! # Modules
//!
//! - `types` - Canonical graph types (GraphNode, GraphRelationship, GraphData)
//! - `outcome` - Tabular rows, execution summary and the final QueryOutcome
//! - `error` - Error types and result aliases

pub mod error;
pub mod outcome;
pub mod types;

pub use error::{BoxError, Error, QueryErrorKind, Result};
pub use outcome::{ExecutionSummary, QueryOutcome, ScalarRow};
pub use types::{GraphData, GraphNode, GraphRelationship, Properties};
