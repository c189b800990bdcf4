//! HTTP client implementations

pub mod client;

pub use client::{HttpClient, HttpClientBuilder, DEFAULT_USER_AGENT};
