//! Classification of database failures.
//!
//! Only failures that mean "the server cannot be reached or refused us" are
//! reported as connection errors; everything else keeps the driver error.

use sea_orm::sqlx::error::DatabaseError;
use sea_orm::sqlx::mysql::MySqlDatabaseError;
use sea_orm::sqlx::Error as SqlxError;
use sea_orm::{DbErr, RuntimeErr};

/// MySQL server and client error numbers that indicate connectivity or
/// authentication problems.
const MYSQL_CONNECTIVITY_ERRORS: &[u16] = &[
    1040, // too many connections
    1044, // access denied for user to database
    1045, // access denied for user (using password)
    1049, // unknown database
    1053, // server shutdown in progress
    1129, // host blocked
    1130, // host not allowed to connect
    2002, // cannot connect through socket
    2003, // cannot connect to server
    2005, // unknown server host
    2006, // server has gone away
    2013, // lost connection during query
    2055, // lost connection at system error
];

/// True when `err` is an operational (connectivity) failure.
pub fn is_operational(err: &DbErr) -> bool {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => true,
        DbErr::Exec(runtime) | DbErr::Query(runtime) => runtime_is_operational(runtime),
        _ => false,
    }
}

fn runtime_is_operational(err: &RuntimeErr) -> bool {
    match err {
        RuntimeErr::SqlxError(sqlx_err) => sqlx_is_operational(sqlx_err),
        #[allow(unreachable_patterns)]
        _ => false,
    }
}

fn sqlx_is_operational(err: &SqlxError) -> bool {
    match err {
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed => true,
        SqlxError::Database(db_err) => database_is_operational(db_err.as_ref()),
        _ => false,
    }
}

fn database_is_operational(err: &dyn DatabaseError) -> bool {
    if let Some(mysql) = err.try_downcast_ref::<MySqlDatabaseError>() {
        return MYSQL_CONNECTIVITY_ERRORS.contains(&mysql.number());
    }
    // SQLSTATE class 08: connection exception
    err.code().is_some_and(|code| code.starts_with("08"))
}

#[cfg(test)]
mod tests {
    use sea_orm::ConnAcquireErr;

    use super::*;

    fn sqlx(err: SqlxError) -> RuntimeErr {
        RuntimeErr::SqlxError(err.into())
    }

    #[test]
    fn connection_failures_are_operational() {
        assert!(is_operational(&DbErr::Conn(RuntimeErr::Internal("refused".into()))));
        assert!(is_operational(&DbErr::ConnectionAcquire(ConnAcquireErr::Timeout)));
        assert!(is_operational(&DbErr::Query(sqlx(SqlxError::PoolTimedOut))));
        assert!(is_operational(&DbErr::Exec(sqlx(SqlxError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset by peer",
        ))))));
    }

    #[test]
    fn query_failures_are_not_operational() {
        assert!(!is_operational(&DbErr::Query(RuntimeErr::Internal("syntax".into()))));
        assert!(!is_operational(&DbErr::Query(sqlx(SqlxError::RowNotFound))));
        assert!(!is_operational(&DbErr::RecordNotFound("run 42".into())));
        assert!(!is_operational(&DbErr::Custom("bad".into())));
    }
}
