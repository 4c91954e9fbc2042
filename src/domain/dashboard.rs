// Dashboard domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::widget::WidgetDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A suggested operator action surfaced on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl QuickAction {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            priority,
        }
    }
}

/// An equipment alert surfaced on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub equipment: String,
    pub severity: Severity,
}

impl Alert {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        equipment: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            equipment: equipment.into(),
            severity,
        }
    }
}

/// One assembled dashboard: chrome plus the ordered widget descriptor list.
/// Immutable input data for the renderer, never owned state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Route key for this dashboard. Not part of the wire document.
    #[serde(skip)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub summary: Map<String, Value>,
    #[serde(default)]
    pub quick_actions: Vec<QuickAction>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub widgets: Vec<WidgetDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_value(Severity::Critical).unwrap(),
            json!("critical")
        );
        assert_eq!(
            serde_json::from_value::<Priority>(json!("high")).unwrap(),
            Priority::High
        );
    }

    #[test]
    fn dashboard_id_stays_off_the_wire() {
        let dashboard = Dashboard {
            id: "energy-analysis".to_string(),
            title: "Facility Energy Analysis".to_string(),
            subtitle: None,
            summary: Map::new(),
            quick_actions: Vec::new(),
            alerts: Vec::new(),
            widgets: Vec::new(),
        };

        let value = serde_json::to_value(&dashboard).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["title"], "Facility Energy Analysis");
    }
}
