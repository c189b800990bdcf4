//! SOAP transport over HTTP

pub mod envelope;
pub mod service;
pub mod wsdl;

pub use service::{SoapService, WsdlServiceFactory};
pub use wsdl::WsdlDescription;
