//! Ports for the facility scheduling SOAP services.
//!
//! Remote faults surface as [`ClientError::Fault`](serviceclients_domain::ClientError::Fault);
//! the client decides which of them mean "cannot connect".

use async_trait::async_trait;
use serviceclients_domain::{Result, SoapRecord};

/// User Office Web Service: session management.
#[async_trait]
pub trait UserOfficeService: Send + Sync {
    /// Log in and return the session id.
    async fn login(&self, account: &str, password: &str) -> Result<String>;

    /// End the session.
    async fn logout(&self, session_id: &str) -> Result<()>;

    /// Cheap call that needs no session; used as the reachability check.
    async fn get_all_facility_names(&self) -> Result<Vec<SoapRecord>>;
}

/// Scheduler service: cycle and maintenance data.
#[async_trait]
pub trait SchedulerService: Send + Sync {
    /// Facilities visible to the session; also the scheduler check.
    async fn get_facility_list(&self, session_id: &str) -> Result<Vec<SoapRecord>>;

    /// Beam cycles with their start and end dates.
    async fn get_cycles(&self, session_id: &str) -> Result<Vec<SoapRecord>>;

    /// Offline periods recorded with the given reason.
    async fn get_offline_periods(&self, session_id: &str, reason: &str)
        -> Result<Vec<SoapRecord>>;
}

/// Creates service proxies from their WSDL locations.
#[async_trait]
pub trait SoapServiceFactory: Send + Sync {
    /// UOWS proxy type.
    type Uows: UserOfficeService;
    /// Scheduler proxy type.
    type Scheduler: SchedulerService;

    /// Proxy for the UOWS WSDL at `url`.
    async fn uows(&self, url: &str) -> Result<Self::Uows>;

    /// Proxy for the Scheduler WSDL at `url`.
    async fn scheduler(&self, url: &str) -> Result<Self::Scheduler>;
}
