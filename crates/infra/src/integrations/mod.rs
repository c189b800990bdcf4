//! External service integrations

pub mod business_applications;
pub mod sftp;
