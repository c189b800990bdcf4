//! SOAP service proxies built from WSDL discovery.

use async_trait::async_trait;
use serviceclients_core::{SchedulerService, SoapServiceFactory, UserOfficeService};
use serviceclients_domain::{ClientError, Result, SoapRecord};
use tracing::debug;

use super::envelope::{build_request, parse_response, SoapResponse};
use super::wsdl::{parse_wsdl, WsdlDescription};
use crate::http::HttpClient;

/// A discovered SOAP service that can call operations by name.
#[derive(Clone)]
pub struct SoapService {
    http: HttpClient,
    description: WsdlDescription,
}

impl SoapService {
    /// Fetch and read the WSDL at `wsdl_url`.
    pub async fn discover(http: HttpClient, wsdl_url: &str) -> Result<Self> {
        debug!(url = wsdl_url, "fetching WSDL");
        let document = http.get_text(wsdl_url).await?;
        let description = parse_wsdl(&document, wsdl_url)?;
        debug!(
            endpoint = %description.endpoint,
            namespace = %description.target_namespace,
            "discovered SOAP service"
        );
        Ok(Self { http, description })
    }

    /// What discovery found in the WSDL.
    pub fn description(&self) -> &WsdlDescription {
        &self.description
    }

    /// Call `operation` with named parameters.
    ///
    /// A fault in the response body is returned as [`ClientError::Fault`]
    /// whatever the HTTP status.
    pub async fn call(&self, operation: &str, params: &[(&str, &str)]) -> Result<Vec<SoapRecord>> {
        let envelope = build_request(&self.description.target_namespace, operation, params);
        debug!(operation, endpoint = %self.description.endpoint, "calling SOAP operation");

        let (status, body) = self
            .http
            .post_soap(&self.description.endpoint, self.description.action(operation), envelope)
            .await?;

        match parse_response(&body) {
            Ok(SoapResponse::Fault { code, message }) => {
                debug!(operation, %code, "SOAP fault");
                Err(ClientError::Fault { code, message })
            }
            _ if status >= 400 => {
                Err(ClientError::Network(format!("HTTP {} from {}", status, operation)))
            }
            Ok(SoapResponse::Records(records)) => Ok(records),
            Err(err) => Err(err),
        }
    }

    async fn call_single(&self, operation: &str, params: &[(&str, &str)]) -> Result<String> {
        let records = self.call(operation, params).await?;
        records.first().and_then(|record| record.text.clone()).ok_or_else(|| {
            ClientError::Protocol(format!("{} returned no value", operation))
        })
    }
}

#[async_trait]
impl UserOfficeService for SoapService {
    async fn login(&self, account: &str, password: &str) -> Result<String> {
        self.call_single("login", &[("Account", account), ("Password", password)]).await
    }

    async fn logout(&self, session_id: &str) -> Result<()> {
        self.call("logout", &[("sessionId", session_id)]).await.map(|_| ())
    }

    async fn get_all_facility_names(&self) -> Result<Vec<SoapRecord>> {
        self.call("getAllFacilityNames", &[]).await
    }
}

#[async_trait]
impl SchedulerService for SoapService {
    async fn get_facility_list(&self, session_id: &str) -> Result<Vec<SoapRecord>> {
        self.call("getFacilityList", &[("sessionId", session_id)]).await
    }

    async fn get_cycles(&self, session_id: &str) -> Result<Vec<SoapRecord>> {
        self.call("getCycles", &[("sessionId", session_id)]).await
    }

    async fn get_offline_periods(
        &self,
        session_id: &str,
        reason: &str,
    ) -> Result<Vec<SoapRecord>> {
        self.call("getOfflinePeriods", &[("sessionId", session_id), ("reason", reason)]).await
    }
}

/// Builds [`SoapService`]s by fetching their WSDL over HTTP.
#[derive(Clone)]
pub struct WsdlServiceFactory {
    http: HttpClient,
}

impl WsdlServiceFactory {
    /// Factory fetching WSDLs with `http`.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl SoapServiceFactory for WsdlServiceFactory {
    type Uows = SoapService;
    type Scheduler = SoapService;

    async fn uows(&self, url: &str) -> Result<SoapService> {
        SoapService::discover(self.http.clone(), url).await
    }

    async fn scheduler(&self, url: &str) -> Result<SoapService> {
        SoapService::discover(self.http.clone(), url).await
    }
}
