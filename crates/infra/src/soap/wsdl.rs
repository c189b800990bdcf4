//! Minimal WSDL discovery: namespace, endpoint and SOAP actions.

use std::collections::BTreeMap;

use serviceclients_domain::{ClientError, Result, SoapRecord};
use url::Url;

use super::envelope::parse_document;

/// What a client needs from a WSDL document to call the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WsdlDescription {
    /// `targetNamespace` of the definitions, used for the body element.
    pub target_namespace: String,
    /// First `soap:address` location, or the WSDL URL without its query.
    pub endpoint: String,
    /// `soapAction` per operation name, where the binding declares one.
    pub actions: BTreeMap<String, String>,
}

impl WsdlDescription {
    /// `soapAction` for `operation`, empty when none is declared.
    pub fn action(&self, operation: &str) -> &str {
        self.actions.get(operation).map(String::as_str).unwrap_or("")
    }
}

/// Read a WSDL document fetched from `wsdl_url`.
pub fn parse_wsdl(xml: &str, wsdl_url: &str) -> Result<WsdlDescription> {
    let definitions = parse_document(xml)?;
    if definitions.name != "definitions" {
        return Err(ClientError::Protocol(format!(
            "expected WSDL definitions, found <{}>",
            definitions.name
        )));
    }

    let target_namespace = definitions
        .attributes
        .get("targetNamespace")
        .cloned()
        .ok_or_else(|| ClientError::Protocol("WSDL has no targetNamespace".to_string()))?;

    let endpoint = match find_address(&definitions) {
        Some(location) => location.to_string(),
        None => strip_query(wsdl_url)?,
    };

    let mut actions = BTreeMap::new();
    for binding in definitions.children.iter().filter(|c| c.name == "binding") {
        for operation in binding.children.iter().filter(|c| c.name == "operation") {
            let Some(name) = operation.attributes.get("name") else { continue };
            let action = operation
                .children
                .iter()
                .filter(|c| c.name == "operation")
                .find_map(|c| c.attributes.get("soapAction"));
            if let Some(action) = action {
                actions.entry(name.clone()).or_insert_with(|| action.clone());
            }
        }
    }

    Ok(WsdlDescription { target_namespace, endpoint, actions })
}

fn find_address(definitions: &SoapRecord) -> Option<&str> {
    definitions
        .children
        .iter()
        .filter(|c| c.name == "service")
        .flat_map(|service| service.children.iter().filter(|c| c.name == "port"))
        .flat_map(|port| port.children.iter().filter(|c| c.name == "address"))
        .find_map(|address| address.attributes.get("location"))
        .map(String::as_str)
}

fn strip_query(wsdl_url: &str) -> Result<String> {
    let mut url = Url::parse(wsdl_url)
        .map_err(|err| ClientError::Config(format!("invalid WSDL URL '{}': {}", wsdl_url, err)))?;
    url.set_query(None);
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WSDL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <wsdl:definitions xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
            xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
            targetNamespace="http://uows.example.org/">
          <wsdl:portType name="UserOfficeWebService">
            <wsdl:operation name="login"/>
          </wsdl:portType>
          <wsdl:binding name="UOWSBinding" type="tns:UserOfficeWebService">
            <soap:binding transport="http://schemas.xmlsoap.org/soap/http"/>
            <wsdl:operation name="login">
              <soap:operation soapAction="urn:login"/>
            </wsdl:operation>
            <wsdl:operation name="logout">
              <soap:operation soapAction=""/>
            </wsdl:operation>
          </wsdl:binding>
          <wsdl:service name="UserOfficeWebService">
            <wsdl:port name="UOWSPort" binding="tns:UOWSBinding">
              <soap:address location="https://uows.example.org/endpoint"/>
            </wsdl:port>
          </wsdl:service>
        </wsdl:definitions>"#;

    #[test]
    fn reads_namespace_endpoint_and_actions() {
        let description = parse_wsdl(WSDL, "https://uows.example.org/?wsdl").unwrap();
        assert_eq!(description.target_namespace, "http://uows.example.org/");
        assert_eq!(description.endpoint, "https://uows.example.org/endpoint");
        assert_eq!(description.action("login"), "urn:login");
        assert_eq!(description.action("logout"), "");
        assert_eq!(description.action("getAllFacilityNames"), "");
    }

    #[test]
    fn endpoint_falls_back_to_wsdl_url() {
        let wsdl = WSDL.replace(
            "<soap:address location=\"https://uows.example.org/endpoint\"/>",
            "",
        );
        let description = parse_wsdl(&wsdl, "https://uows.example.org/service?wsdl").unwrap();
        assert_eq!(description.endpoint, "https://uows.example.org/service");
    }

    #[test]
    fn rejects_non_wsdl_documents() {
        let err = parse_wsdl("<html><body/></html>", "https://example.org").unwrap_err();
        assert!(matches!(err, ClientError::Protocol(ref msg) if msg.contains("<html>")));
    }
}
