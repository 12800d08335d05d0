//! Statement execution

use crate::config::DatabaseConfig;
use crate::database::decode;
use crate::database::guard::ensure_read_only;
use crate::database::types::{DatabaseType, QueryResult, Row};
use crate::database::validation::{normalize_url, redact_url};
use crate::error::{Text2SqlError, Text2SqlResult};
use async_trait::async_trait;
use futures::{Stream, TryStreamExt};
use sqlx::{Connection, Either, PgConnection, SqliteConnection};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Something that can run a SQL statement and hand back its rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Database: Send + Sync {
    /// Run `sql` verbatim and return every row it produced
    async fn execute(&self, sql: &str) -> Text2SqlResult<QueryResult>;
}

/// Database reached through a connection URI.
///
/// No connection is held between calls; each `execute` opens one, fetches
/// every row and closes it again. Input with several statements runs all of
/// them and returns the rows of the last one.
#[derive(Debug, Clone)]
pub struct SqlDatabase {
    url: String,
    database_type: DatabaseType,
    read_only: bool,
    connect_timeout: Duration,
}

impl SqlDatabase {
    /// Create a database handle from a connection URI.
    ///
    /// Only the URI's shape is checked here; nothing connects until
    /// [`Database::execute`] is called.
    pub fn new(url: impl AsRef<str>) -> Text2SqlResult<Self> {
        let (database_type, url) = normalize_url(url.as_ref())?;
        Ok(Self {
            url,
            database_type,
            read_only: false,
            connect_timeout: Duration::from_secs(crate::config::timeouts::database::CONNECT_SECS),
        })
    }

    /// Create a database handle from configuration
    pub fn from_config(config: &DatabaseConfig) -> Text2SqlResult<Self> {
        let url = config.url.as_deref().ok_or_else(|| {
            Text2SqlError::config_with_context(
                "No database URL configured",
                "set database.url or TEXT2SQL_DATABASE_URL",
            )
        })?;
        Ok(Self::new(url)?
            .with_read_only(config.read_only)
            .with_connect_timeout(config.connect_timeout()))
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Connection URI with any password masked
    pub fn display_url(&self) -> String {
        redact_url(&self.url)
    }

    async fn connect<C: Connection>(&self) -> Text2SqlResult<C> {
        let target = self.display_url();
        debug!("Connecting to {} database at {}", self.database_type, target);

        match tokio::time::timeout(self.connect_timeout, C::connect(&self.url)).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(Text2SqlError::connection_to(
                format!("Failed to connect: {}", e),
                target,
            )),
            Err(_) => Err(Text2SqlError::timeout(
                format!("connect to {}", target),
                self.connect_timeout.as_secs(),
            )),
        }
    }

    async fn execute_postgres(&self, sql: &str) -> Text2SqlResult<(Vec<String>, Vec<Row>)> {
        let mut conn: PgConnection = self.connect().await?;
        let rows = last_result_set(sqlx::raw_sql(sql).fetch_many(&mut conn))
            .await
            .map_err(|e| Text2SqlError::query_with_sql(e.to_string(), sql))?;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection cleanly: {}", e);
        }

        Ok((decode::column_names(&rows), decode::pg_rows(&rows)?))
    }

    async fn execute_sqlite(&self, sql: &str) -> Text2SqlResult<(Vec<String>, Vec<Row>)> {
        let mut conn: SqliteConnection = self.connect().await?;
        let rows = last_result_set(sqlx::raw_sql(sql).fetch_many(&mut conn))
            .await
            .map_err(|e| Text2SqlError::query_with_sql(e.to_string(), sql))?;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection cleanly: {}", e);
        }

        Ok((decode::column_names(&rows), decode::sqlite_rows(&rows)?))
    }
}

/// Drain a multi-statement result stream, keeping only the rows of the last
/// statement.
///
/// The driver yields each statement's rows followed by its completion
/// (`Either::Left`), so every completion closes one result set.
async fn last_result_set<S, Done, R>(mut stream: S) -> Result<Vec<R>, sqlx::Error>
where
    S: Stream<Item = Result<Either<Done, R>, sqlx::Error>> + Unpin,
{
    let mut current = Vec::new();
    let mut last = Vec::new();

    while let Some(step) = stream.try_next().await? {
        match step {
            Either::Left(_) => last = std::mem::take(&mut current),
            Either::Right(row) => current.push(row),
        }
    }

    // Rows with no trailing completion still belong to the last statement
    if !current.is_empty() {
        last = current;
    }
    Ok(last)
}

#[async_trait]
impl Database for SqlDatabase {
    async fn execute(&self, sql: &str) -> Text2SqlResult<QueryResult> {
        if self.read_only {
            ensure_read_only(sql, self.database_type)?;
        }

        let start_time = Instant::now();
        info!("Executing SQL on {}", self.database_type);
        debug!("SQL: {}", sql);

        let (columns, rows) = match self.database_type {
            DatabaseType::PostgreSql => self.execute_postgres(sql).await?,
            DatabaseType::Sqlite => self.execute_sqlite(sql).await?,
        };

        let execution_time_ms = start_time.elapsed().as_millis() as u64;
        debug!("Fetched {} rows in {}ms", rows.len(), execution_time_ms);

        Ok(QueryResult {
            columns,
            rows,
            execution_time_ms,
        })
    }
}
