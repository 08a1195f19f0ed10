//! Query execution
//!
//! One call to [`QueryExecutor::execute`] walks the states
//! `Idle → Acquiring → Running → Draining → Released`, or ends in `Failed`.
//! The session is closed whenever one was acquired, whichever way the
//! execution ends. Close failures are logged and never returned, so they
//! cannot hide the primary error or a successful result.
//!
//! Records are processed strictly in stream order, and the fields of a record
//! in field order, so node first-seen order and relationship append order
//! are deterministic.

use crate::config::ExecutorConfig;
use crate::failure::{classify_acquire_failure, classify_run_failure};
use futures::StreamExt;
use graphlens_core::{QueryOutcome, Result, ScalarRow};
use graphlens_normalize::{classify, Coercer, Entity, GraphAccumulator, RowBuilder};
use graphlens_protocol::{Connector, Record, Session};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Lifecycle state of one execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionState {
    Idle,
    Acquiring,
    Running,
    Draining,
    Released,
    Failed,
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionState::Idle => "idle",
            ExecutionState::Acquiring => "acquiring",
            ExecutionState::Running => "running",
            ExecutionState::Draining => "draining",
            ExecutionState::Released => "released",
            ExecutionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Runs queries against sessions from a [`Connector`]
///
/// Executions share nothing but the connector and the configuration; each one
/// acquires its own session, so concurrent calls to `execute` are fine.
pub struct QueryExecutor<C> {
    connector: C,
    config: ExecutorConfig,
}

impl<C: Connector> QueryExecutor<C> {
    /// Create an executor with the default configuration
    pub fn new(connector: C) -> Self {
        Self::with_config(connector, ExecutorConfig::default())
    }

    pub fn with_config(connector: C, config: ExecutorConfig) -> Self {
        Self { connector, config }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Execute one query and normalize its result
    ///
    /// The query text is submitted verbatim. No retries are attempted.
    pub async fn execute(&self, query: &str) -> Result<QueryOutcome> {
        let span = info_span!("execute", execution_id = %Uuid::new_v4());
        self.execute_inner(query).instrument(span).await
    }

    async fn execute_inner(&self, query: &str) -> Result<QueryOutcome> {
        let mut execution = Execution::new(Coercer::new(self.config.large_integers));

        execution.enter(ExecutionState::Acquiring);
        let mut session = match self.connector.acquire_session().await {
            Ok(session) => session,
            Err(err) => {
                execution.enter(ExecutionState::Failed);
                return Err(classify_acquire_failure(err));
            }
        };

        let result = self.run(&mut session, &mut execution, query).await;

        // Every path that acquired a session passes through here
        if let Err(err) = session.close().await {
            warn!(error = %err, "Failed to close session");
        }

        match result {
            Ok(outcome) => {
                execution.enter(ExecutionState::Released);
                let summary = outcome.summary();
                info!(
                    nodes = summary.node_count,
                    relationships = summary.relationship_count,
                    rows = summary.row_count,
                    elapsed_ms = summary.execution_time_ms,
                    "Query executed"
                );
                Ok(outcome)
            }
            Err(err) => {
                execution.enter(ExecutionState::Failed);
                debug!(error = %err, cause = ?err.cause(), "Query failed");
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        session: &mut C::Session,
        execution: &mut Execution,
        query: &str,
    ) -> Result<QueryOutcome> {
        execution.enter(ExecutionState::Running);
        let start = Instant::now();

        let mut records = session.run(query).await.map_err(classify_run_failure)?;
        while let Some(item) = records.next().await {
            let record = item.map_err(classify_run_failure)?;
            execution.route(record);
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        execution.enter(ExecutionState::Draining);

        if elapsed_ms > self.config.slow_query_threshold_ms {
            warn!(
                elapsed_ms,
                threshold_ms = self.config.slow_query_threshold_ms,
                "Slow query"
            );
        }

        Ok(execution.drain(query, elapsed_ms))
    }
}

/// Per-execution state, discarded once the outcome is built
struct Execution {
    state: ExecutionState,
    coercer: Coercer,
    graph: GraphAccumulator,
    rows: RowBuilder,
}

impl Execution {
    fn new(coercer: Coercer) -> Self {
        Self {
            state: ExecutionState::Idle,
            coercer,
            graph: GraphAccumulator::new(),
            rows: RowBuilder::new(),
        }
    }

    fn enter(&mut self, next: ExecutionState) {
        debug!(from = %self.state, to = %next, "Execution state changed");
        self.state = next;
    }

    /// Route every field of a record to the graph or to the record's row
    fn route(&mut self, record: Record) {
        let mut scalars = ScalarRow::new();
        let mut had_graph_field = false;

        for (key, value) in record {
            match classify(value) {
                Entity::Node(node) => {
                    had_graph_field = true;
                    self.graph.add_node(node);
                }
                Entity::Relationship(rel) => {
                    had_graph_field = true;
                    self.graph.add_relationship(rel);
                }
                Entity::Path(segments) => {
                    had_graph_field = true;
                    self.graph.add_path(segments);
                }
                Entity::Scalar(value) => {
                    scalars.insert(key, self.coercer.coerce(value));
                }
            }
        }

        self.rows.add_record(scalars, had_graph_field);
    }

    fn drain(&mut self, query: &str, elapsed_ms: u64) -> QueryOutcome {
        let graph = std::mem::take(&mut self.graph).into_graph();
        let rows = std::mem::take(&mut self.rows).into_rows();
        QueryOutcome::new(query, graph, rows, elapsed_ms)
    }
}
