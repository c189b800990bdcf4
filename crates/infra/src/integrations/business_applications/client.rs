//! Client for the facility scheduling SOAP services

use async_trait::async_trait;
use serviceclients_core::{SchedulerService, ServiceClient, SoapServiceFactory, UserOfficeService};
use serviceclients_domain::constants::{MAINTENANCE_REASON, SERVICE_BUSINESS_APPLICATIONS};
use serviceclients_domain::{
    BusinessApplicationsSettings, ClientError, Credentials, Result, SoapRecord,
};
use tracing::{debug, info, instrument, warn};

use crate::http::HttpClient;
use crate::soap::WsdlServiceFactory;

const UOWS: &str = "UOWS";
const SCHEDULER: &str = "Scheduler";

/// Holds a UOWS session and the two service proxies.
///
/// Proxies are created on demand from the configured WSDL URLs and kept for
/// the lifetime of the client; `disconnect` only ends the session.
pub struct BusinessApplicationsClient<F: SoapServiceFactory = WsdlServiceFactory> {
    credentials: BusinessApplicationsSettings,
    factory: F,
    uows_client: Option<F::Uows>,
    scheduler_client: Option<F::Scheduler>,
    session_id: Option<String>,
}

impl BusinessApplicationsClient<WsdlServiceFactory> {
    /// Create a client that discovers both services over HTTP.
    pub fn new(credentials: BusinessApplicationsSettings) -> Result<Self> {
        Ok(Self::with_http_client(credentials, HttpClient::new()?))
    }

    /// Create a client that discovers both services through `http`.
    pub fn with_http_client(credentials: BusinessApplicationsSettings, http: HttpClient) -> Self {
        Self::with_factory(credentials, WsdlServiceFactory::new(http))
    }
}

impl<F: SoapServiceFactory> BusinessApplicationsClient<F> {
    /// Create a client over any service factory.
    pub fn with_factory(credentials: BusinessApplicationsSettings, factory: F) -> Self {
        Self { credentials, factory, uows_client: None, scheduler_client: None, session_id: None }
    }

    /// Settings the client was built from.
    pub fn credentials(&self) -> &BusinessApplicationsSettings {
        &self.credentials
    }

    /// Cached session id, set by a successful `connect`.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// UOWS proxy, once `connect` has created it.
    pub fn uows_client(&self) -> Option<&F::Uows> {
        self.uows_client.as_ref()
    }

    /// Scheduler proxy, once `connect` has created it.
    pub fn scheduler_client(&self) -> Option<&F::Scheduler> {
        self.scheduler_client.as_ref()
    }

    /// Create the UOWS proxy from `uows_url` unless one exists.
    pub async fn create_uows_client(&mut self) -> Result<()> {
        if self.uows_client.is_none() {
            debug!(url = self.credentials.uows_url(), "creating UOWS client");
            self.uows_client = Some(self.factory.uows(self.credentials.uows_url()).await?);
        }
        Ok(())
    }

    /// Create the Scheduler proxy from `scheduler_url` unless one exists.
    pub async fn create_scheduler_client(&mut self) -> Result<()> {
        if self.scheduler_client.is_none() {
            debug!(url = self.credentials.scheduler_url(), "creating Scheduler client");
            self.scheduler_client =
                Some(self.factory.scheduler(self.credentials.scheduler_url()).await?);
        }
        Ok(())
    }

    /// Cycle records for the facility.
    pub async fn ingest_cycle_dates(&self) -> Result<Vec<SoapRecord>> {
        let (scheduler, session_id) = self.scheduler_session()?;
        scheduler.get_cycles(session_id).await
    }

    /// Offline periods flagged as maintenance.
    pub async fn ingest_maintenance_days(&self) -> Result<Vec<SoapRecord>> {
        let (scheduler, session_id) = self.scheduler_session()?;
        scheduler.get_offline_periods(session_id, MAINTENANCE_REASON).await
    }

    fn scheduler_session(&self) -> Result<(&F::Scheduler, &str)> {
        let scheduler =
            self.scheduler_client.as_ref().ok_or(ClientError::Uninitialised(SCHEDULER))?;
        let session_id = self
            .session_id
            .as_deref()
            .ok_or_else(|| ClientError::connection(SERVICE_BUSINESS_APPLICATIONS))?;
        Ok((scheduler, session_id))
    }
}

/// Faults from login and the scheduler check mean the credentials or
/// endpoints are wrong.
fn fault_to_connection(err: ClientError) -> ClientError {
    match err {
        ClientError::Fault { code, message } => {
            warn!(%code, %message, "remote fault from facility scheduling service");
            ClientError::connection(SERVICE_BUSINESS_APPLICATIONS)
        }
        other => other,
    }
}

#[async_trait]
impl<F: SoapServiceFactory> ServiceClient for BusinessApplicationsClient<F> {
    type Connection = str;

    fn service_name(&self) -> &'static str {
        SERVICE_BUSINESS_APPLICATIONS
    }

    #[instrument(skip(self))]
    async fn connect(&mut self) -> Result<&str> {
        self.create_uows_client().await?;

        if self.session_id.is_none() {
            let uows = self.uows_client.as_ref().ok_or(ClientError::Uninitialised(UOWS))?;
            let base = self.credentials.client_settings();
            let session_id = uows
                .login(base.username(), base.password().expose())
                .await
                .map_err(fault_to_connection)?;
            info!("logged in to User Office Web Service");
            self.session_id = Some(session_id);
        }

        self.create_scheduler_client().await?;

        self.session_id
            .as_deref()
            .ok_or_else(|| ClientError::connection(SERVICE_BUSINESS_APPLICATIONS))
    }

    #[instrument(skip(self))]
    async fn disconnect(&mut self) -> Result<()> {
        let uows = self.uows_client.as_ref().ok_or(ClientError::Uninitialised(UOWS))?;
        if let Some(session_id) = self.session_id.take() {
            uows.logout(&session_id).await?;
            info!("logged out of User Office Web Service");
        }
        Ok(())
    }

    async fn test_connection(&self) -> Result<bool> {
        let uows = self.uows_client.as_ref().ok_or(ClientError::Uninitialised(UOWS))?;
        uows.get_all_facility_names().await?;

        let scheduler =
            self.scheduler_client.as_ref().ok_or(ClientError::Uninitialised(SCHEDULER))?;
        let session_id = self
            .session_id
            .as_deref()
            .ok_or_else(|| ClientError::connection(SERVICE_BUSINESS_APPLICATIONS))?;
        scheduler.get_facility_list(session_id).await.map_err(fault_to_connection)?;
        Ok(true)
    }
}
