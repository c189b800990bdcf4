//! Runtime check of entity declarations against the live schema.

use std::collections::HashSet;
use std::marker::PhantomData;

use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityName, EntityTrait, IdenStatic,
    Iterable, Select, Statement,
};
use serviceclients_domain::{ClientError, Result};

use crate::errors::to_client_error;

/// A column holding the primary key of another table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    /// Column on the referencing table.
    pub column: &'static str,
    /// Referenced table.
    pub table: &'static str,
    /// Referenced column.
    pub references: &'static str,
}

impl ForeignKey {
    /// Declare that `column` references `table.references`.
    pub const fn new(column: &'static str, table: &'static str, references: &'static str) -> Self {
        Self { column, table, references }
    }
}

/// An entity whose declaration can be checked against the database.
pub trait ReflectedEntity: EntityTrait + Default {
    /// Foreign keys the live table must carry.
    fn foreign_keys() -> &'static [ForeignKey] {
        &[]
    }

    /// Declared table name.
    fn table() -> String {
        Self::default().table_name().to_owned()
    }

    /// Column names declared on the entity.
    fn declared_columns() -> Vec<String> {
        Self::Column::iter().map(|column| column.as_str().to_owned()).collect()
    }
}

/// Handle to a table whose declared columns and foreign keys were found in
/// the live schema.
#[derive(Debug)]
pub struct ReflectedTable<E: ReflectedEntity> {
    table: String,
    columns: Vec<String>,
    _entity: PhantomData<E>,
}

impl<E: ReflectedEntity> ReflectedTable<E> {
    pub(crate) fn new(table: String, columns: Vec<String>) -> Self {
        Self { table, columns, _entity: PhantomData }
    }

    /// Name of the live table.
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Columns present in the live table, in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Foreign keys declared on the entity.
    pub fn foreign_keys(&self) -> &'static [ForeignKey] {
        E::foreign_keys()
    }

    /// Foreign key held in `column`, if any.
    pub fn foreign_key(&self, column: &str) -> Option<&'static ForeignKey> {
        E::foreign_keys().iter().find(|fk| fk.column == column)
    }

    /// Query builder over the table.
    pub fn find(&self) -> Select<E> {
        E::find()
    }
}

/// Ensure every declared column exists in `live`.
pub(crate) fn check_columns(table: &str, declared: &[String], live: &[String]) -> Result<()> {
    let live: HashSet<&str> = live.iter().map(String::as_str).collect();
    let missing: Vec<&str> =
        declared.iter().map(String::as_str).filter(|column| !live.contains(column)).collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(schema_mismatch(format!("table '{}' has no column(s) {}", table, missing.join(", "))))
    }
}

pub(crate) fn schema_mismatch(detail: String) -> ClientError {
    ClientError::Config(format!("database schema mismatch: {}", detail))
}

/// Column names of `table`, in schema order; empty when the table is absent.
pub(crate) async fn introspect_columns(
    conn: &DatabaseConnection,
    table: &str,
) -> Result<Vec<String>> {
    let backend = conn.get_database_backend();
    let sql = match backend {
        DatabaseBackend::MySql => {
            "SELECT COLUMN_NAME AS name FROM information_schema.COLUMNS \
             WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? ORDER BY ORDINAL_POSITION"
        }
        DatabaseBackend::Postgres => {
            "SELECT column_name AS name FROM information_schema.columns \
             WHERE table_name = $1 ORDER BY ordinal_position"
        }
        DatabaseBackend::Sqlite => "SELECT name FROM pragma_table_info(?) ORDER BY cid",
    };
    let statement = Statement::from_sql_and_values(backend, sql, [table.into()]);
    let rows = conn.query_all(statement).await.map_err(to_client_error)?;
    rows.iter()
        .map(|row| row.try_get::<String>("", "name").map_err(to_client_error))
        .collect()
}
