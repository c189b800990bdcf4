//! Shared fixtures for the SOAP integration tests.

#![allow(dead_code, clippy::expect_used)]

use serviceclients_domain::{BusinessApplicationsSettings, ClientSettings};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const UOWS_NS: &str = "http://uows.example.org/";
pub const SCHEDULER_NS: &str = "http://scheduler.example.org/";
pub const SESSION_ID: &str = "f2c1a7e0-session";

/// WSDL describing `operations` with an endpoint at `endpoint`.
pub fn wsdl(namespace: &str, endpoint: &str, operations: &[&str]) -> String {
    let bindings: String = operations
        .iter()
        .map(|op| {
            format!(
                "<wsdl:operation name=\"{0}\"><soap:operation soapAction=\"urn:{0}\"/></wsdl:operation>",
                op
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<wsdl:definitions xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
    xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
    targetNamespace="{namespace}">
  <wsdl:binding name="Binding">{bindings}</wsdl:binding>
  <wsdl:service name="Service">
    <wsdl:port name="Port" binding="tns:Binding">
      <soap:address location="{endpoint}"/>
    </wsdl:port>
  </wsdl:service>
</wsdl:definitions>"#
    )
}

/// Successful response wrapping `inner` in `<{operation}Response>`.
pub fn response(operation: &str, inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body><ns2:{op}Response xmlns:ns2="urn:test">{inner}</ns2:{op}Response></soap:Body>
</soap:Envelope>"#,
        op = operation,
        inner = inner
    )
}

pub fn fault(code: &str, message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <soap:Fault><faultcode>{code}</faultcode><faultstring>{message}</faultstring></soap:Fault>
  </soap:Body>
</soap:Envelope>"#
    )
}

/// Serve both WSDL documents from `server`.
pub async fn mount_wsdls(server: &MockServer) {
    let uri = server.uri();
    Mock::given(method("GET"))
        .and(path("/uows.wsdl"))
        .respond_with(ResponseTemplate::new(200).set_body_string(wsdl(
            UOWS_NS,
            &format!("{}/uows", uri),
            &["login", "logout", "getAllFacilityNames"],
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/scheduler.wsdl"))
        .respond_with(ResponseTemplate::new(200).set_body_string(wsdl(
            SCHEDULER_NS,
            &format!("{}/scheduler", uri),
            &["getFacilityList", "getCycles", "getOfflinePeriods"],
        )))
        .mount(server)
        .await;
}

/// Answer `operation` posted to `endpoint` with `status` and `body`.
pub async fn mount_operation(
    server: &MockServer,
    endpoint: &str,
    operation: &str,
    status: u16,
    body: String,
) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_string_contains(format!("<ns:{}>", operation)))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub fn settings(server: &MockServer, password: &str) -> BusinessApplicationsSettings {
    let uri = server.uri();
    BusinessApplicationsSettings::new(
        ClientSettings::new("facility-user", password, "localhost", "443"),
        format!("{}/uows.wsdl", uri),
        format!("{}/scheduler.wsdl", uri),
    )
}
