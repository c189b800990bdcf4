//! Facility scheduling (Business Applications) integration.
//!
//! Wraps the User Office Web Service (sessions) and the Scheduler service
//! (cycles and maintenance periods).

pub mod client;

pub use client::BusinessApplicationsClient;
