//! Client for the reduction database.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use serviceclients_core::ServiceClient;
use serviceclients_domain::constants::{SERVICE_MYSQL, SQL_POOL_RECYCLE_SECS};
use serviceclients_domain::{ClientError, Result, SqlSettings};
use tracing::{debug, info, instrument, warn};

use super::entities::{
    DataLocationEntity, ExperimentEntity, InstrumentEntity, ReductionLocationEntity,
    ReductionRunEntity, RunVariableEntity, StatusEntity,
};
use super::reflection::{
    check_columns, introspect_columns, schema_mismatch, ReflectedEntity, ReflectedTable,
};
use crate::errors::to_client_error;

/// Single access point for the reduction database.
///
/// The connection pool is opened on first use and checked with `SELECT 1`.
/// Table accessors check the entity declarations against the live schema
/// once per connection.
pub struct SqlDatabaseClient {
    credentials: SqlSettings,
    connection_string: Option<String>,
    connection: Option<DatabaseConnection>,
    columns: HashMap<String, Vec<String>>,
}

impl SqlDatabaseClient {
    /// Client connecting to the MySQL URI built from `credentials`.
    pub fn new(credentials: SqlSettings) -> Self {
        Self { credentials, connection_string: None, connection: None, columns: HashMap::new() }
    }

    /// Use `url` instead of the MySQL URI built from the settings.
    pub fn with_connection_string(credentials: SqlSettings, url: impl Into<String>) -> Self {
        Self { connection_string: Some(url.into()), ..Self::new(credentials) }
    }

    #[cfg(test)]
    fn with_open_connection(credentials: SqlSettings, connection: DatabaseConnection) -> Self {
        Self { connection: Some(connection), ..Self::new(credentials) }
    }

    /// Settings the client was built from.
    pub fn credentials(&self) -> &SqlSettings {
        &self.credentials
    }

    /// The current connection, if any. Never opens one.
    pub fn get_connection(&self) -> Option<&DatabaseConnection> {
        self.connection.as_ref()
    }

    fn target(&self) -> String {
        match &self.connection_string {
            Some(raw) => match url::Url::parse(raw) {
                Ok(mut parsed) if parsed.password().is_some() => {
                    let _ = parsed.set_password(Some("***"));
                    parsed.to_string()
                }
                _ => raw.clone(),
            },
            None => self.credentials.redacted_connection_string(),
        }
    }

    async fn open(&self) -> Result<DatabaseConnection> {
        let url = self
            .connection_string
            .clone()
            .unwrap_or_else(|| self.credentials.full_connection_string());

        let mut options = ConnectOptions::new(url);
        options.max_lifetime(Duration::from_secs(SQL_POOL_RECYCLE_SECS)).sqlx_logging(false);

        Database::connect(options).await.map_err(to_client_error)
    }

    // ======================== Tables ============================== //

    /// `reduction_viewer_instrument`.
    pub async fn instrument(&mut self) -> Result<ReflectedTable<InstrumentEntity>> {
        self.reflect().await
    }

    /// `reduction_viewer_status`.
    pub async fn status(&mut self) -> Result<ReflectedTable<StatusEntity>> {
        self.reflect().await
    }

    /// `reduction_viewer_experiment`.
    pub async fn experiment(&mut self) -> Result<ReflectedTable<ExperimentEntity>> {
        self.reflect().await
    }

    /// `reduction_viewer_reductionrun`, checked together with the tables it references.
    pub async fn reduction_run(&mut self) -> Result<ReflectedTable<ReductionRunEntity>> {
        self.reflect().await
    }

    /// `reduction_viewer_datalocation`.
    pub async fn reduction_data_location(
        &mut self,
    ) -> Result<ReflectedTable<DataLocationEntity>> {
        self.reflect().await
    }

    /// `reduction_viewer_reductionlocation`.
    pub async fn reduction_location(&mut self) -> Result<ReflectedTable<ReductionLocationEntity>> {
        self.reflect().await
    }

    /// `reduction_variables_runvariable`.
    pub async fn run_variables(&mut self) -> Result<ReflectedTable<RunVariableEntity>> {
        self.reflect().await
    }

    /// Check `E` and the tables its foreign keys point at.
    async fn reflect<E: ReflectedEntity>(&mut self) -> Result<ReflectedTable<E>> {
        self.connect().await?;

        let table = E::table();
        let columns = self.table_columns(&table).await?;
        check_columns(&table, &E::declared_columns(), &columns)?;

        for fk in E::foreign_keys() {
            let target = self.table_columns(fk.table).await?;
            if !target.iter().any(|column| column == fk.references) {
                return Err(schema_mismatch(format!(
                    "{}.{} references {}.{}, which does not exist",
                    table, fk.column, fk.table, fk.references
                )));
            }
        }

        Ok(ReflectedTable::new(table, columns))
    }

    async fn table_columns(&mut self, table: &str) -> Result<Vec<String>> {
        if let Some(columns) = self.columns.get(table) {
            return Ok(columns.clone());
        }

        let conn = self.connection.as_ref().ok_or_else(|| ClientError::connection(SERVICE_MYSQL))?;
        let columns = introspect_columns(conn, table).await?;
        if columns.is_empty() {
            return Err(schema_mismatch(format!("table '{}' does not exist", table)));
        }

        debug!(table, columns = columns.len(), "reflected table");
        self.columns.insert(table.to_owned(), columns.clone());
        Ok(columns)
    }
}

#[async_trait]
impl ServiceClient for SqlDatabaseClient {
    type Connection = DatabaseConnection;

    fn service_name(&self) -> &'static str {
        SERVICE_MYSQL
    }

    #[instrument(skip(self))]
    async fn connect(&mut self) -> Result<&DatabaseConnection> {
        if self.connection.is_none() {
            debug!(database = %self.target(), "opening database connection");
            let conn = self.open().await?;
            self.connection = Some(conn);

            if let Err(err) = self.test_connection().await {
                warn!(error = %err, "database liveness check failed, dropping connection");
                if let Some(conn) = self.connection.take() {
                    if let Err(close_err) = conn.close().await {
                        warn!(error = %close_err, "database connection did not close cleanly");
                    }
                }
                self.columns.clear();
                return Err(err);
            }
            info!("database connection established");
        }

        self.connection.as_ref().ok_or_else(|| ClientError::connection(SERVICE_MYSQL))
    }

    #[instrument(skip(self))]
    async fn disconnect(&mut self) -> Result<()> {
        self.columns.clear();
        if let Some(conn) = self.connection.take() {
            conn.close().await.map_err(to_client_error)?;
            info!("database connection closed");
        }
        Ok(())
    }

    async fn test_connection(&self) -> Result<bool> {
        let conn = self.connection.as_ref().ok_or_else(|| ClientError::connection(SERVICE_MYSQL))?;
        let ping = Statement::from_string(conn.get_database_backend(), "SELECT 1");
        conn.query_all(ping).await.map_err(to_client_error)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{
        ColumnTrait, DatabaseBackend, DbErr, EntityTrait, MockDatabase, QueryFilter, RuntimeErr,
    };
    use serviceclients_domain::ClientSettings;
    use tempfile::TempDir;

    use super::*;
    use crate::database::entities::{instrument, reduction_run};

    const SCHEMA: &str = r#"
        CREATE TABLE reduction_viewer_instrument (
            id INTEGER PRIMARY KEY, name TEXT NOT NULL,
            is_active BOOLEAN NOT NULL, is_paused BOOLEAN NOT NULL);
        CREATE TABLE reduction_viewer_status (id INTEGER PRIMARY KEY, value TEXT NOT NULL);
        CREATE TABLE reduction_viewer_experiment (
            id INTEGER PRIMARY KEY, reference_number INTEGER NOT NULL);
        CREATE TABLE reduction_viewer_reductionrun (
            id INTEGER PRIMARY KEY, run_number INTEGER NOT NULL, run_name TEXT NOT NULL,
            run_version INTEGER NOT NULL, started_by INTEGER, admin_log TEXT NOT NULL,
            reduction_log TEXT NOT NULL, message TEXT, hidden_in_failviewer BOOLEAN NOT NULL,
            overwrite BOOLEAN, cancel BOOLEAN NOT NULL, created DATETIME NOT NULL,
            last_updated DATETIME NOT NULL, started DATETIME, finished DATETIME,
            retry_when DATETIME, script TEXT NOT NULL, experiment_id INTEGER NOT NULL,
            instrument_id INTEGER, status_id INTEGER NOT NULL);
        CREATE TABLE reduction_viewer_datalocation (
            id INTEGER PRIMARY KEY, file_path TEXT NOT NULL, reduction_run_id INTEGER NOT NULL);
        CREATE TABLE reduction_viewer_reductionlocation (
            id INTEGER PRIMARY KEY, file_path TEXT NOT NULL, reduction_run_id INTEGER NOT NULL);
        CREATE TABLE reduction_variables_runvariable (
            variable_ptr_id INTEGER PRIMARY KEY, reduction_run_id INTEGER NOT NULL);
    "#;

    fn settings() -> SqlSettings {
        SqlSettings::new(ClientSettings::new("user", "pass", "localhost", "3306"))
    }

    fn sqlite_client(dir: &TempDir) -> SqlDatabaseClient {
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("reduction.db").display());
        SqlDatabaseClient::with_connection_string(settings(), url)
    }

    async fn client_with_schema(dir: &TempDir) -> SqlDatabaseClient {
        let mut client = sqlite_client(dir);
        let conn = client.connect().await.expect("connect");
        conn.execute_unprepared(SCHEMA).await.expect("schema");
        client
    }

    #[tokio::test]
    async fn connect_checks_and_reuses_connection() {
        let dir = TempDir::new().unwrap();
        let mut client = sqlite_client(&dir);
        assert!(client.get_connection().is_none());

        client.connect().await.expect("first connect");
        assert!(client.get_connection().is_some());
        assert!(client.test_connection().await.unwrap());

        client.connect().await.expect("second connect reuses handle");
        assert!(client.get_connection().is_some());
    }

    #[tokio::test]
    async fn disconnect_then_connect_opens_fresh_connection() {
        let dir = TempDir::new().unwrap();
        let mut client = client_with_schema(&dir).await;
        client.status().await.expect("reflect status");

        client.disconnect().await.unwrap();
        assert!(client.get_connection().is_none());
        assert!(client.test_connection().await.unwrap_err().is_connection());

        client.connect().await.expect("reconnect");
        assert!(client.test_connection().await.unwrap());
        client.status().await.expect("reflect after reconnect");
    }

    #[tokio::test]
    async fn disconnect_without_connection_is_noop() {
        let mut client = SqlDatabaseClient::new(settings());
        client.disconnect().await.unwrap();
        assert!(client.get_connection().is_none());
    }

    #[tokio::test]
    async fn unreachable_database_is_connection_error() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("missing/dir/reduction.db").display());
        let mut client = SqlDatabaseClient::with_connection_string(settings(), url);

        let err = client.connect().await.unwrap_err();
        match err {
            ClientError::Connection(conn) => assert_eq!(conn.service(), "MySQL"),
            other => panic!("expected connection error, got {:?}", other),
        }
        assert!(client.get_connection().is_none());
    }

    #[tokio::test]
    async fn table_accessors_reflect_schema() {
        let dir = TempDir::new().unwrap();
        let mut client = client_with_schema(&dir).await;

        let runs = client.reduction_run().await.expect("reduction_run");
        assert_eq!(runs.table_name(), "reduction_viewer_reductionrun");
        assert_eq!(runs.columns().len(), 20);
        assert_eq!(runs.foreign_key("instrument_id").unwrap().table, "reduction_viewer_instrument");

        let locations = client.reduction_data_location().await.expect("data location");
        assert_eq!(locations.foreign_keys()[0].column, "reduction_run_id");
        assert_eq!(locations.foreign_keys()[0].table, "reduction_viewer_reductionrun");

        client.reduction_location().await.expect("reduction location");
        client.run_variables().await.expect("run variables");
        client.instrument().await.expect("instrument");
        client.experiment().await.expect("experiment");
    }

    #[tokio::test]
    async fn accessor_connects_on_demand() {
        let dir = TempDir::new().unwrap();
        client_with_schema(&dir).await.disconnect().await.unwrap();

        let mut client = sqlite_client(&dir);
        client.instrument().await.expect("instrument");
        assert!(client.get_connection().is_some());
    }

    #[tokio::test]
    async fn missing_table_is_schema_mismatch() {
        let dir = TempDir::new().unwrap();
        let mut client = sqlite_client(&dir);
        let err = client.status().await.unwrap_err();
        assert!(matches!(err, ClientError::Config(ref msg) if msg.contains("reduction_viewer_status")));
    }

    #[tokio::test]
    async fn missing_referenced_table_is_schema_mismatch() {
        let dir = TempDir::new().unwrap();
        let mut client = client_with_schema(&dir).await;
        let conn = client.get_connection().unwrap();
        conn.execute_unprepared("DROP TABLE reduction_viewer_experiment").await.unwrap();

        let err = client.reduction_run().await.unwrap_err();
        assert!(matches!(err, ClientError::Config(ref msg) if msg.contains("reduction_viewer_experiment")));
    }

    #[tokio::test]
    async fn query_errors_keep_driver_error() {
        let dir = TempDir::new().unwrap();
        let mut client = sqlite_client(&dir);
        let conn = client.connect().await.unwrap();

        let err = conn.execute_unprepared("SELEC 1").await.map_err(to_client_error).unwrap_err();
        match err {
            ClientError::Database(source) => assert!(source.downcast_ref::<sea_orm::DbErr>().is_some()),
            other => panic!("expected database error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failing_check_propagates_non_operational_error() {
        let conn = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_errors([DbErr::Custom("SELECT command denied to user".into())])
            .into_connection();
        let client = SqlDatabaseClient::with_open_connection(settings(), conn);

        match client.test_connection().await.unwrap_err() {
            ClientError::Database(source) => {
                let db_err = source.downcast_ref::<DbErr>().expect("DbErr source");
                assert!(db_err.to_string().contains("SELECT command denied"));
            }
            other => panic!("expected database error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failing_check_with_lost_connection_is_connection_error() {
        let conn = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_errors([DbErr::Conn(RuntimeErr::Internal("server has gone away".into()))])
            .into_connection();
        let client = SqlDatabaseClient::with_open_connection(settings(), conn);

        let err = client.test_connection().await.unwrap_err();
        assert!(err.is_connection());
        assert!(err.to_string().starts_with("Unable to connect to MySQL"));
    }

    #[tokio::test]
    async fn reflected_table_queries_rows() {
        let dir = TempDir::new().unwrap();
        let mut client = client_with_schema(&dir).await;
        let conn = client.get_connection().unwrap();
        conn.execute_unprepared(
            "INSERT INTO reduction_viewer_instrument (id, name, is_active, is_paused) \
             VALUES (1, 'WISH', 1, 0), (2, 'GEM', 0, 0)",
        )
        .await
        .unwrap();

        let instruments = client.instrument().await.unwrap();
        let conn = client.get_connection().unwrap();
        let active = instruments
            .find()
            .filter(instrument::Column::IsActive.eq(true))
            .all(conn)
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "WISH");

        let runs = reduction_run::Entity::find().all(conn).await.unwrap();
        assert!(runs.is_empty());
    }
}
