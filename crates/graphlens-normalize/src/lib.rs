//! graphlens Normalization Engine
//!
//! Turns heterogeneous record field values into the canonical graph model
//! plus a tabular residue.
//!
//! # Overview
//!
//! - `classify` - decides whether a raw value is a node, relationship, path or scalar
//! - `coerce` - converts driver-native scalars (boxed integers, lists) into portable values
//! - `accumulator` - deduplicated node set and append-only relationship list
//! - `rows` - tabular projection of the non-graph fields of each record

pub mod accumulator;
pub mod classify;
pub mod coerce;
pub mod rows;

pub use accumulator::GraphAccumulator;
pub use classify::{classify, Entity, EntityKind, PathSegment};
pub use coerce::{boxed_integer, Coercer, LargeIntegerPolicy, MAX_SAFE_INTEGER};
pub use rows::RowBuilder;
