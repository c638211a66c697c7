//! PostgreSQL connector backed by sqlx.

use super::{Connection, Connector, DatabaseTarget};
use sqlx::{ConnectOptions, PgConnection, postgres::PgConnectOptions};

/// Opens one plain (non-pooled) connection per check. Driver options such
/// as `sslmode` or `connect_timeout` travel opaquely in the target URL;
/// the configured username and password always win over any credentials
/// embedded in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgConnector;

impl Connector for PgConnector {
    type Conn = PgConnection;

    async fn connect(&self, target: &DatabaseTarget) -> Result<PgConnection, sqlx::Error> {
        let options = target
            .url
            .parse::<PgConnectOptions>()?
            .username(&target.username)
            .password(&target.password);

        options.connect().await
    }
}

impl Connection for PgConnection {
    async fn close(self) -> Result<(), sqlx::Error> {
        sqlx::Connection::close(self).await
    }
}
