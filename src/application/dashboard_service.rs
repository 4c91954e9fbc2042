// Dashboard service - Use cases for fetching and resolving dashboards
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::application::dashboard_source::{DashboardInfo, DashboardSource, SourceError};
use crate::application::widget_renderer::WidgetRenderer;
use crate::domain::dashboard::Dashboard;
use crate::domain::render::DashboardView;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
    renderer: WidgetRenderer,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DashboardSource>, renderer: WidgetRenderer) -> Self {
        Self { source, renderer }
    }

    pub async fn list_dashboards(&self) -> Result<Vec<DashboardInfo>, SourceError> {
        self.source.list_dashboards().await
    }

    /// Fetch the raw dashboard document, stamped with the fetch time.
    pub async fn get_dashboard(&self, id: &str) -> Result<Dashboard, SourceError> {
        let mut dashboard = self.source.fetch_dashboard(id).await?;
        dashboard.summary.insert(
            "lastUpdated".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        Ok(dashboard)
    }

    /// Fetch and resolve: the widget descriptors are replaced by render
    /// models, everything else passes through unchanged.
    pub async fn get_dashboard_view(&self, id: &str) -> Result<DashboardView, SourceError> {
        let dashboard = self.get_dashboard(id).await?;
        let widgets = self.renderer.render(&dashboard.widgets);
        Ok(DashboardView {
            title: dashboard.title,
            subtitle: dashboard.subtitle,
            summary: dashboard.summary,
            quick_actions: dashboard.quick_actions,
            alerts: dashboard.alerts,
            widgets,
        })
    }
}
