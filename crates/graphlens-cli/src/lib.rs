//! graphlens CLI
//!
//! Replays a recorded fixture through the query executor and renders the
//! resulting outcome as JSON, the form the graph renderer consumes.

pub mod config;

pub use config::CliConfig;

use anyhow::Context;
use graphlens_executor::QueryExecutor;
use graphlens_protocol::{Fixture, MemoryConnector};
use std::path::Path;
use tracing::info;

/// Execute `query` against the fixture at `fixture_path` and render the outcome
pub async fn run<P: AsRef<Path>>(fixture_path: P, query: &str, config: &CliConfig) -> anyhow::Result<String> {
    let path = fixture_path.as_ref();
    let fixture = Fixture::load(path)
        .with_context(|| format!("failed to load fixture {}", path.display()))?;
    info!("Loaded {} records from {:?}", fixture.records.len(), path);

    let executor = QueryExecutor::with_config(
        MemoryConnector::from_fixture(fixture),
        config.executor.clone(),
    );
    let outcome = executor.execute(query).await?;

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    Ok(rendered)
}
