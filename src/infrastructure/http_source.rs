// HTTP dashboard source - Proxies dashboard documents from an upstream service
use anyhow::Context;
use async_trait::async_trait;

use crate::application::dashboard_source::{DashboardInfo, DashboardSource, SourceError};
use crate::domain::dashboard::Dashboard;

#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DashboardSource for HttpSource {
    async fn list_dashboards(&self) -> Result<Vec<DashboardInfo>, SourceError> {
        let url = format!("{}/dashboards", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to send dashboard list request to upstream")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Upstream(anyhow::anyhow!(
                "upstream list failed with status {status}: {body}"
            )));
        }

        Ok(response
            .json()
            .await
            .context("failed to parse upstream dashboard list")?)
    }

    async fn fetch_dashboard(&self, id: &str) -> Result<Dashboard, SourceError> {
        // The dashboard endpoint is a query, but the upstream contract is
        // POST with no required body.
        let url = format!("{}/dashboards/{}", self.base_url, id);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .context("failed to send dashboard request to upstream")?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Upstream(anyhow::anyhow!(
                "upstream dashboard fetch failed with status {status}: {body}"
            )));
        }

        let mut dashboard: Dashboard = response
            .json()
            .await
            .context("failed to parse upstream dashboard document")?;
        dashboard.id = id.to_string();
        Ok(dashboard)
    }
}
