//! Service constants
//!
//! Default values and fixed names shared by the settings types and clients.

// SQL
/// Schema used when the settings do not name one.
pub const DEFAULT_DATABASE_NAME: &str = "autoreduction";
/// Seconds a pooled MySQL connection may live before it is recycled.
pub const SQL_POOL_RECYCLE_SECS: u64 = 280;

// ICAT
/// ICAT authenticator plugin used when none is configured.
pub const DEFAULT_ICAT_AUTHENTICATION_TYPE: &str = "Simple";

// Message queue topics
/// Runs waiting to be reduced.
pub const QUEUE_REDUCTION_PENDING: &str = "/queue/ReductionPending";
/// New data files from the instruments.
pub const QUEUE_DATA_READY: &str = "/queue/DataReady";
/// Reductions picked up by a worker.
pub const QUEUE_REDUCTION_STARTED: &str = "/queue/ReductionStarted";
/// Reductions that finished.
pub const QUEUE_REDUCTION_COMPLETE: &str = "/queue/ReductionComplete";
/// Reductions that failed.
pub const QUEUE_REDUCTION_ERROR: &str = "/queue/ReductionError";
/// Reductions that were skipped.
pub const QUEUE_REDUCTION_SKIPPED: &str = "/queue/ReductionSkipped";

// Service names used in connection errors
/// Scheduling SOAP services.
pub const SERVICE_BUSINESS_APPLICATIONS: &str = "Cycle Ingestion";
/// SFTP server.
pub const SERVICE_SFTP: &str = "SFTP";
/// Reduction database.
pub const SERVICE_MYSQL: &str = "MySQL";

/// Reason passed to the scheduler when asking for maintenance periods.
pub const MAINTENANCE_REASON: &str = "Maintenance";
