// Source trait for dashboard data access
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::dashboard::Dashboard;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("dashboard not found: {0}")]
    NotFound(String),
    #[error("upstream source failure: {0}")]
    Upstream(#[from] anyhow::Error),
}

/// Identifier and display title for one available dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInfo {
    pub id: String,
    pub title: String,
}

#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// List the dashboards this source can serve.
    async fn list_dashboards(&self) -> Result<Vec<DashboardInfo>, SourceError>;

    /// Fetch one dashboard document by route id.
    async fn fetch_dashboard(&self, id: &str) -> Result<Dashboard, SourceError>;
}
