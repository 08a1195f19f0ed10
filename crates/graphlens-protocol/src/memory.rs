//! Scripted in-memory connector
//!
//! Replays a fixed list of records for every query and can be told to fail at
//! each step of the session lifecycle. It also counts acquired and closed
//! sessions, which is what lifecycle tests assert on.

use crate::record::Record;
use crate::session::{Connector, RecordStream, Session, SessionError};
use async_trait::async_trait;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// JSON form of a scripted response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    /// Records replayed for every query
    #[serde(default)]
    pub records: Vec<Record>,

    /// Failure injected into the record stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<FixtureFailure>,
}

/// A stream failure raised after `after` records were delivered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureFailure {
    #[serde(default)]
    pub after: usize,

    /// Server error code; without one the failure is a driver fault
    #[serde(default)]
    pub code: Option<String>,

    pub message: String,
}

impl FixtureFailure {
    fn to_error(&self) -> SessionError {
        match &self.code {
            Some(code) => SessionError::server(code.as_str(), self.message.as_str()),
            None => SessionError::Driver(self.message.clone()),
        }
    }
}

impl Fixture {
    /// Parse a fixture from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Load a fixture file
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[derive(Debug, Default)]
struct Stats {
    acquired: AtomicUsize,
    closed: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

/// Connector that serves scripted sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryConnector {
    records: Vec<Record>,
    stream_failure: Option<(usize, SessionError)>,
    acquire_error: Option<SessionError>,
    run_error: Option<SessionError>,
    close_error: Option<SessionError>,
    stats: Arc<Stats>,
}

impl MemoryConnector {
    /// Create a connector whose sessions return no records
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connector from a fixture
    pub fn from_fixture(fixture: Fixture) -> Self {
        let stream_failure = fixture
            .failure
            .as_ref()
            .map(|failure| (failure.after, failure.to_error()));

        Self {
            records: fixture.records,
            stream_failure,
            ..Self::default()
        }
    }

    /// Builder: replay these records for every query
    pub fn with_records<I: IntoIterator<Item = Record>>(mut self, records: I) -> Self {
        self.records = records.into_iter().collect();
        self
    }

    /// Builder: end every record stream with `error` after `after` records
    pub fn fail_after(mut self, after: usize, error: SessionError) -> Self {
        self.stream_failure = Some((after, error));
        self
    }

    /// Builder: refuse to hand out sessions with `error`
    pub fn fail_acquire(mut self, error: SessionError) -> Self {
        self.acquire_error = Some(error);
        self
    }

    /// Builder: report that no connection was ever established
    pub fn disconnected(self) -> Self {
        self.fail_acquire(SessionError::NotConnected)
    }

    /// Builder: report that the server cannot be reached
    pub fn unreachable<M: Into<String>>(self, message: M) -> Self {
        self.fail_acquire(SessionError::ServiceUnavailable(message.into()))
    }

    /// Builder: reject the query before any record is produced
    pub fn fail_run(mut self, error: SessionError) -> Self {
        self.run_error = Some(error);
        self
    }

    /// Builder: fail every close call with `error`
    pub fn fail_close(mut self, error: SessionError) -> Self {
        self.close_error = Some(error);
        self
    }

    /// Number of sessions handed out
    pub fn acquired_sessions(&self) -> usize {
        self.stats.acquired.load(Ordering::SeqCst)
    }

    /// Number of close calls received, across all sessions
    pub fn closed_sessions(&self) -> usize {
        self.stats.closed.load(Ordering::SeqCst)
    }

    /// Query texts submitted so far
    pub fn queries(&self) -> Vec<String> {
        self.stats
            .queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Connector for MemoryConnector {
    type Session = MemorySession;

    async fn acquire_session(&self) -> Result<MemorySession, SessionError> {
        if let Some(error) = &self.acquire_error {
            return Err(error.clone());
        }

        self.stats.acquired.fetch_add(1, Ordering::SeqCst);

        Ok(MemorySession {
            records: self.records.clone(),
            stream_failure: self.stream_failure.clone(),
            run_error: self.run_error.clone(),
            close_error: self.close_error.clone(),
            stats: Arc::clone(&self.stats),
            closed: false,
        })
    }
}

/// Session handed out by [`MemoryConnector`]
#[derive(Debug)]
pub struct MemorySession {
    records: Vec<Record>,
    stream_failure: Option<(usize, SessionError)>,
    run_error: Option<SessionError>,
    close_error: Option<SessionError>,
    stats: Arc<Stats>,
    closed: bool,
}

#[async_trait]
impl Session for MemorySession {
    async fn run(&mut self, query: &str) -> Result<RecordStream, SessionError> {
        if self.closed {
            return Err(SessionError::Driver("session is closed".to_string()));
        }

        self.stats
            .queries
            .lock()
            .map_err(|_| SessionError::Driver("query log lock poisoned".to_string()))?
            .push(query.to_string());

        if let Some(error) = &self.run_error {
            return Err(error.clone());
        }

        let items: Vec<Result<Record, SessionError>> = match &self.stream_failure {
            Some((after, error)) => self
                .records
                .iter()
                .take(*after)
                .cloned()
                .map(Ok)
                .chain(std::iter::once(Err(error.clone())))
                .collect(),
            None => self.records.iter().cloned().map(Ok).collect(),
        };

        debug!(records = self.records.len(), "Replaying scripted records");
        Ok(futures::stream::iter(items).boxed())
    }

    async fn close(&mut self) -> Result<(), SessionError> {
        self.stats.closed.fetch_add(1, Ordering::SeqCst);

        if self.closed {
            return Err(SessionError::Driver("session already closed".to_string()));
        }
        self.closed = true;

        match &self.close_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use serde_json::json;
    use std::io::Write;

    fn count_record(n: i64) -> Record {
        Record::new().with("count", json!(n))
    }

    #[tokio::test]
    async fn test_replays_records() {
        let connector = MemoryConnector::new().with_records([count_record(5), count_record(12)]);

        let mut session = connector.acquire_session().await.unwrap();
        let stream = session.run("MATCH (n) RETURN count(n) AS count").await.unwrap();
        let records: Vec<_> = stream.collect().await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].as_ref().unwrap().get("count"), Some(&json!(12)));
        assert_eq!(connector.queries(), vec!["MATCH (n) RETURN count(n) AS count"]);
        assert_eq!(connector.acquired_sessions(), 1);
    }

    #[tokio::test]
    async fn test_failure_after_records() {
        let connector = MemoryConnector::new()
            .with_records([count_record(1), count_record(2), count_record(3)])
            .fail_after(1, SessionError::server(codes::SYNTAX_ERROR, "bad"));

        let mut session = connector.acquire_session().await.unwrap();
        let items: Vec<_> = session.run("RETURN 1").await.unwrap().collect().await;

        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert_eq!(items[1].as_ref().unwrap_err().code(), Some(codes::SYNTAX_ERROR));
    }

    #[tokio::test]
    async fn test_close_is_counted() {
        let connector = MemoryConnector::new().fail_close(SessionError::Driver("gone".into()));

        let mut session = connector.acquire_session().await.unwrap();
        assert!(session.close().await.is_err());
        assert_eq!(connector.closed_sessions(), 1);

        // A second close is rejected but still counted
        assert!(session.close().await.is_err());
        assert_eq!(connector.closed_sessions(), 2);
        assert!(session.run("RETURN 1").await.is_err());
    }

    #[tokio::test]
    async fn test_acquire_failures() {
        let connector = MemoryConnector::new().disconnected();
        assert_eq!(
            connector.acquire_session().await.unwrap_err(),
            SessionError::NotConnected
        );

        let connector = MemoryConnector::new().unreachable("service unreachable");
        let err = connector.acquire_session().await.unwrap_err();
        assert!(err.is_connection_fault());
        assert_eq!(connector.acquired_sessions(), 0);
    }

    #[tokio::test]
    async fn test_load_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "records": [{{"count": 5}}, {{"count": 12}}],
                "failure": {{"after": 1, "code": "Neo.ClientError.Statement.SyntaxError", "message": "bad"}}
            }}"#
        )
        .unwrap();

        let fixture = Fixture::load(file.path()).unwrap();
        assert_eq!(fixture.records.len(), 2);

        let connector = MemoryConnector::from_fixture(fixture);
        let mut session = connector.acquire_session().await.unwrap();
        let items: Vec<_> = session.run("RETURN 1").await.unwrap().collect().await;
        assert_eq!(items.len(), 2);
        assert!(items[1].is_err());
    }

    #[test]
    fn test_invalid_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Fixture::load(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
