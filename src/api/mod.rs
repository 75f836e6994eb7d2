use crate::environment::Environment;
use crate::snapshot::{DashboardSnapshot, HealthStatus};

pub(crate) mod client;
pub use client::DashboardClient;
pub mod error;
pub use error::FetchError;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the current dashboard snapshot.
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, FetchError>;

    /// Query the reporting server's health route.
    async fn health(&self) -> Result<HealthStatus, FetchError>;
}
