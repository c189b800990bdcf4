//! SOAP 1.1 envelopes: request encoding and response decoding.

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serviceclients_domain::{ClientError, Result, SoapRecord};

use crate::errors::InfraError;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Build a request envelope calling `operation` in `namespace` with the given
/// named parameters.
pub fn build_request(namespace: &str, operation: &str, params: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in params {
        body.push_str(&format!("<{0}>{1}</{0}>", name, escape(*value)));
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <soap:Envelope xmlns:soap=\"{env}\" xmlns:ns=\"{ns}\">\
         <soap:Body><ns:{op}>{body}</ns:{op}></soap:Body></soap:Envelope>",
        env = SOAP_ENV_NS,
        ns = escape(namespace),
        op = operation,
        body = body
    )
}

/// Decoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoapResponse {
    /// Children of the operation response element.
    Records(Vec<SoapRecord>),
    /// A `soap:Fault` with its `faultcode` and `faultstring`.
    Fault {
        /// `faultcode`, e.g. `soap:Server`.
        code: String,
        /// `faultstring`.
        message: String,
    },
}

impl SoapResponse {
    /// Records, or the fault as [`ClientError::Fault`].
    pub fn into_result(self) -> Result<Vec<SoapRecord>> {
        match self {
            SoapResponse::Records(records) => Ok(records),
            SoapResponse::Fault { code, message } => Err(ClientError::Fault { code, message }),
        }
    }
}

/// Decode a response envelope.
pub fn parse_response(xml: &str) -> Result<SoapResponse> {
    let envelope = parse_document(xml)?;
    let body = envelope
        .child("Body")
        .ok_or_else(|| ClientError::Protocol("SOAP envelope has no Body".to_string()))?;
    let payload = body
        .children
        .first()
        .ok_or_else(|| ClientError::Protocol("SOAP Body is empty".to_string()))?;

    if payload.name == "Fault" {
        return Ok(SoapResponse::Fault {
            code: payload.field("faultcode").unwrap_or_default().to_string(),
            message: payload.field("faultstring").unwrap_or_default().to_string(),
        });
    }

    Ok(SoapResponse::Records(payload.children.clone()))
}

/// Parse an XML document into a record tree rooted at the document element.
///
/// Element and attribute names lose their namespace prefixes; namespace
/// declarations are dropped.
pub fn parse_document(xml: &str) -> Result<SoapRecord> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<SoapRecord> = Vec::new();
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let record = open_element(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(record),
                    None => return Ok(record),
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(xml_error)?;
                append_text(&mut stack, &text);
            }
            Event::CData(data) => {
                let data = String::from_utf8_lossy(&data.into_inner()).into_owned();
                append_text(&mut stack, &data);
            }
            Event::End(_) => {
                let record = stack
                    .pop()
                    .ok_or_else(|| ClientError::Protocol("unbalanced XML end tag".to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(record),
                    None => return Ok(record),
                }
            }
            Event::Eof => {
                return Err(ClientError::Protocol("XML document ended early".to_string()))
            }
            _ => {}
        }
    }
}

fn open_element(start: &BytesStart<'_>) -> Result<SoapRecord> {
    let mut record = SoapRecord::new(String::from_utf8_lossy(start.local_name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(|err| ClientError::from(InfraError::from(err)))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let name = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value().map_err(xml_error)?.into_owned();
        record.attributes.insert(name, value);
    }
    Ok(record)
}

fn append_text(stack: &mut [SoapRecord], text: &str) {
    if let Some(current) = stack.last_mut() {
        current.text.get_or_insert_with(String::new).push_str(text);
    }
}

fn xml_error(err: quick_xml::Error) -> ClientError {
    InfraError::from(err).into()
}
