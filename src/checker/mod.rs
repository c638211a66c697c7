//! Pre-flight connectivity checks for the databases a migration touches.
//!
//! Each check opens one connection with the target's own credentials and
//! releases it before returning; nothing stays open between calls.

pub mod postgres;

use std::fmt;
use std::future::Future;
use thiserror::Error;

/// A named database endpoint with its own URL and credentials.
#[derive(Clone)]
pub struct DatabaseTarget {
    pub name: String,
    pub url: String,
    pub username: String,
    pub password: String,
}

impl DatabaseTarget {
    /// Build a target, enforcing that every field is populated. URL syntax
    /// is not validated here; the driver rejects malformed URLs at connect
    /// time.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is empty
    pub fn new(name: &str, url: &str, username: &str, password: &str) -> anyhow::Result<Self> {
        anyhow::ensure!(!name.is_empty(), "database name is required");
        anyhow::ensure!(!url.is_empty(), "connection URL is required for {name}");
        anyhow::ensure!(!username.is_empty(), "username is required for {name}");
        anyhow::ensure!(!password.is_empty(), "password is required for {name}");

        Ok(Self {
            name: name.into(),
            url: url.into(),
            username: username.into(),
            password: password.into(),
        })
    }
}

// Credentials must not leak through debug output
impl fmt::Debug for DatabaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseTarget")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// A connection attempt failed; the driver-level cause is carried unchanged.
#[derive(Debug, Error)]
#[error("connection check failed for database {name}")]
pub struct ConnectionError {
    /// Name of the target the failure is attributed to.
    pub name: String,
    #[source]
    pub source: sqlx::Error,
}

/// Opens one connection per call. Injected into [`ConnectionChecker`] at
/// construction so tests can substitute a fake without touching global
/// state.
pub trait Connector {
    type Conn: Connection;

    /// Attempt to open one connection to `target`.
    ///
    /// # Errors
    ///
    /// Returns the driver-level error when the connection cannot be
    /// established
    fn connect(
        &self,
        target: &DatabaseTarget,
    ) -> impl Future<Output = Result<Self::Conn, sqlx::Error>> + Send;
}

/// An open connection that can be released exactly once.
pub trait Connection {
    /// Release the connection.
    ///
    /// # Errors
    ///
    /// Returns the driver-level error if the close handshake fails; the
    /// connection is consumed either way
    fn close(self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

/// Verifies that the two databases a migration touches are reachable before
/// any migration work starts. Holds no connections; every check acquires
/// and releases its own.
pub struct ConnectionChecker<C> {
    connector: C,
    data_index: DatabaseTarget,
    jobs_service: DatabaseTarget,
}

impl<C: Connector> ConnectionChecker<C> {
    #[must_use]
    pub fn new(connector: C, data_index: DatabaseTarget, jobs_service: DatabaseTarget) -> Self {
        Self {
            connector,
            data_index,
            jobs_service,
        }
    }

    /// Open a connection to `target` and release it immediately. Each call
    /// is independent; nothing is retried and no state is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] naming the target and wrapping the
    /// driver-level failure (bad credentials, unreachable host, unknown
    /// database, timeout)
    pub async fn check_connection(&self, target: &DatabaseTarget) -> Result<(), ConnectionError> {
        let conn = self
            .connector
            .connect(target)
            .await
            .map_err(|source| ConnectionError {
                name: target.name.clone(),
                source,
            })?;

        // reachability is proven at this point; a close error does not
        // fail the check and the connection is consumed either way
        conn.close().await.ok();

        Ok(())
    }

    /// Check the data-index database.
    ///
    /// # Errors
    ///
    /// See [`Self::check_connection`]
    pub async fn check_data_index(&self) -> Result<(), ConnectionError> {
        self.check_connection(&self.data_index).await
    }

    /// Check the jobs-service database.
    ///
    /// # Errors
    ///
    /// See [`Self::check_connection`]
    pub async fn check_jobs_service(&self) -> Result<(), ConnectionError> {
        self.check_connection(&self.jobs_service).await
    }

    /// Check every configured database: data-index first, then
    /// jobs-service. Stops at the first failure; `Ok` only after both
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConnectionError`] encountered
    pub async fn check_all(&self) -> Result<(), ConnectionError> {
        self.check_data_index().await?;
        self.check_jobs_service().await?;

        Ok(())
    }
}
