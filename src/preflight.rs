//! Caller-side orchestration of the pre-flight checks. All user-visible
//! output lives here; the checker itself stays silent.

use crate::checker::{ConnectionChecker, DatabaseTarget, postgres::PgConnector};
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Serialize, Deserialize, Debug, Default)]
struct Preflight {
    runtime_ms: i64,
    time: String,
    data_index: String,
    jobs_service: String,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Run the connectivity checks: data-index first, then jobs-service,
/// stopping at the first failure. On success, print a one-line JSON
/// summary for the calling migration orchestrator.
///
/// # Errors
///
/// Returns the first connection failure, with the driver-level cause in
/// the error chain
pub async fn run(data_index: DatabaseTarget, jobs_service: DatabaseTarget) -> Result<()> {
    let started = Instant::now();
    let checker = ConnectionChecker::new(PgConnector, data_index, jobs_service);

    println!("{} - checking data-index database", timestamp());
    checker.check_data_index().await?;
    println!("{} - data-index database reachable", timestamp());

    println!("{} - checking jobs-service database", timestamp());
    checker.check_jobs_service().await?;
    println!("{} - jobs-service database reachable", timestamp());

    let report = Preflight {
        runtime_ms: i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX),
        time: timestamp(),
        data_index: "ok".into(),
        jobs_service: "ok".into(),
    };
    println!("{}", serde_json::to_string(&report)?);

    Ok(())
}
