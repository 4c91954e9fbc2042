// Resolved render models produced by the widget renderer
use serde::Serialize;
use serde_json::{Map, Value};

use super::dashboard::{Alert, QuickAction};

/// One fully-resolved series of a bar/line/area chart. `values` is aligned
/// with the chart's category list; a record without a numeric value for this
/// series yields `None` at that position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub key: String,
    pub name: String,
    pub color: String,
    pub values: Vec<Option<f64>>,
}

/// One pie slice, with its share of the total pre-computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    /// `round(100 * value / total)`.
    pub percent: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub label: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricEntry {
    pub label: String,
    pub value: Value,
}

/// Body of a rendered widget, one variant per supported kind plus the two
/// degraded forms: `Raw` for unrecognized kinds, `Empty` for shape errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WidgetBody {
    Bar {
        categories: Vec<String>,
        series: Vec<ChartSeries>,
    },
    Pie {
        slices: Vec<PieSlice>,
    },
    Line {
        categories: Vec<String>,
        series: Vec<ChartSeries>,
    },
    Area {
        categories: Vec<String>,
        series: Vec<ChartSeries>,
    },
    List {
        rows: Vec<ListRow>,
    },
    Metrics {
        entries: Vec<MetricEntry>,
    },
    Raw {
        data: Value,
    },
    Empty {
        reason: String,
    },
}

/// A widget resolved for display: stable render-pass key, title, body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedWidget {
    pub key: String,
    pub title: String,
    #[serde(flatten)]
    pub body: WidgetBody,
}

/// A dashboard with its widget descriptors resolved into render models.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub summary: Map<String, Value>,
    pub quick_actions: Vec<QuickAction>,
    pub alerts: Vec<Alert>,
    pub widgets: Vec<RenderedWidget>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_serializes_with_kind_tag() {
        let widget = RenderedWidget {
            key: "0".to_string(),
            title: "Temperature Analysis".to_string(),
            body: WidgetBody::Metrics {
                entries: vec![MetricEntry {
                    label: "Heat Index".to_string(),
                    value: json!("37.5°C"),
                }],
            },
        };

        let value = serde_json::to_value(&widget).unwrap();
        assert_eq!(value["kind"], "metrics");
        assert_eq!(value["entries"][0]["label"], "Heat Index");
    }

    #[test]
    fn empty_body_carries_its_reason() {
        let value = serde_json::to_value(WidgetBody::Empty {
            reason: "widget data is empty".to_string(),
        })
        .unwrap();
        assert_eq!(value["kind"], "empty");
        assert_eq!(value["reason"], "widget data is empty");
    }
}
