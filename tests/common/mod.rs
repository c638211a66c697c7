#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use dbpreflight::checker::DatabaseTarget;
use std::env;

pub const DATA_INDEX_URL: &str = "postgres://localhost:5432/di";
pub const JOBS_SERVICE_URL: &str = "postgres://localhost:5432/js";

pub fn skip_if_no_postgres() -> bool {
    env::var("SKIP_POSTGRES_TESTS").is_ok()
}

pub fn target(name: &str, url: &str) -> DatabaseTarget {
    DatabaseTarget::new(name, url, "postgres", "postgres").expect("valid target")
}
