//! graphlens Protocol Interfaces
//!
//! Describes what graphlens needs from a graph database driver, and nothing
//! more: a way to acquire a session, run one query text on it as a stream of
//! records, and close it again.
//!
//! # Contents
//!
//! - **record**: one result record, an ordered map of field name to raw value
//! - **session**: the `Connector` and `Session` traits and their error type
//! - **codes**: driver and server error codes used for failure classification
//! - **memory**: a scripted in-memory connector for tests and offline runs

pub mod codes;
pub mod memory;
pub mod record;
pub mod session;

pub use memory::{Fixture, FixtureFailure, MemoryConnector, MemorySession};
pub use record::Record;
pub use session::{Connector, RecordStream, Session, SessionError};
