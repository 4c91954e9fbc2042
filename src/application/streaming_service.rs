// Streaming dashboard service - Progressive delivery of rendered widgets
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::application::dashboard_source::{DashboardSource, SourceError};
use crate::application::widget_renderer::WidgetRenderer;
use crate::domain::dashboard::{Alert, QuickAction};
use crate::domain::render::RenderedWidget;

/// Skeleton entry for one widget: enough for a client to reserve a panel
/// before the resolved body arrives.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSkeleton {
    pub key: String,
    pub title: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum StreamEvent {
    /// Dashboard chrome plus one skeleton per widget, sent first.
    #[serde(rename_all = "camelCase")]
    Skeleton {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        summary: Map<String, Value>,
        quick_actions: Vec<QuickAction>,
        alerts: Vec<Alert>,
        widgets: Vec<WidgetSkeleton>,
    },
    /// One resolved widget.
    Widget { widget: RenderedWidget },
    /// End of stream.
    #[serde(rename_all = "camelCase")]
    Complete {
        widget_count: usize,
        duration_ms: i64,
    },
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    source: Arc<dyn DashboardSource>,
    renderer: WidgetRenderer,
}

impl StreamingDashboardService {
    pub fn new(source: Arc<dyn DashboardSource>, renderer: WidgetRenderer) -> Self {
        Self { source, renderer }
    }

    /// Fetch a dashboard and emit it progressively: skeleton first, then one
    /// event per resolved widget, then a completion marker.
    pub async fn stream_dashboard(
        &self,
        id: &str,
    ) -> Result<mpsc::Receiver<StreamEvent>, SourceError> {
        let dashboard = self.source.fetch_dashboard(id).await?;
        let renderer = self.renderer.clone();
        let (tx, rx) = mpsc::channel(100);
        let start_time = Instant::now();

        tokio::spawn(async move {
            let skeletons: Vec<WidgetSkeleton> = dashboard
                .widgets
                .iter()
                .enumerate()
                .map(|(index, widget)| WidgetSkeleton {
                    key: widget.id.clone().unwrap_or_else(|| index.to_string()),
                    title: widget.title.clone(),
                    kind: widget.kind.as_str().to_string(),
                })
                .collect();

            let skeleton = StreamEvent::Skeleton {
                title: dashboard.title.clone(),
                subtitle: dashboard.subtitle.clone(),
                summary: dashboard.summary.clone(),
                quick_actions: dashboard.quick_actions.clone(),
                alerts: dashboard.alerts.clone(),
                widgets: skeletons,
            };
            let _ = tx.send(skeleton).await;

            let rendered = renderer.render(&dashboard.widgets);
            let widget_count = rendered.len();
            for widget in rendered {
                let _ = tx.send(StreamEvent::Widget { widget }).await;
            }

            let duration_ms = start_time.elapsed().as_millis() as i64;
            let _ = tx
                .send(StreamEvent::Complete {
                    widget_count,
                    duration_ms,
                })
                .await;
        });

        Ok(rx)
    }
}
