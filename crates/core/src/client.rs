//! Lifecycle contract shared by every service client.

use async_trait::async_trait;
use serviceclients_domain::Result;

/// A client holding credentials for one remote service.
///
/// Connections are created lazily: `connect` reuses an existing handle and
/// only opens a new one when none is held. `disconnect` always leaves the
/// client ready for a fresh `connect`.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// Handle returned by [`connect`](Self::connect).
    type Connection: ?Sized + Sync;

    /// Name used in connection errors, e.g. `"SFTP"`.
    fn service_name(&self) -> &'static str;

    /// Open (or reuse) the connection and return its handle.
    async fn connect(&mut self) -> Result<&Self::Connection>;

    /// Release the connection.
    async fn disconnect(&mut self) -> Result<()>;

    /// Check the connection, failing with a connection error naming
    /// [`service_name`](Self::service_name) when it is unusable.
    async fn test_connection(&self) -> Result<bool>;
}
