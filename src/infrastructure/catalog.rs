// Static dashboard catalog - In-memory dashboard definitions
use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::application::dashboard_source::{DashboardInfo, DashboardSource, SourceError};
use crate::domain::dashboard::{Alert, Dashboard, Priority, QuickAction, Severity};
use crate::domain::widget::{SeriesSpec, WidgetDescriptor, WidgetKind};

/// Serves a fixed set of dashboards assembled at startup. The default data
/// source when no upstream is configured.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    dashboards: Vec<Dashboard>,
}

impl StaticCatalog {
    pub fn new(dashboards: Vec<Dashboard>) -> Self {
        Self { dashboards }
    }

    pub fn with_builtin() -> Self {
        Self::new(vec![energy_analysis(), equipment_health()])
    }
}

#[async_trait]
impl DashboardSource for StaticCatalog {
    async fn list_dashboards(&self) -> Result<Vec<DashboardInfo>, SourceError> {
        Ok(self
            .dashboards
            .iter()
            .map(|d| DashboardInfo {
                id: d.id.clone(),
                title: d.title.clone(),
            })
            .collect())
    }

    async fn fetch_dashboard(&self, id: &str) -> Result<Dashboard, SourceError> {
        self.dashboards
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}

fn summary(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn energy_analysis() -> Dashboard {
    let widgets = vec![
        WidgetDescriptor {
            id: Some("current-conditions".to_string()),
            ..WidgetDescriptor::new(
                WidgetKind::Metrics,
                "Current Conditions",
                json!({
                    "Outdoor Temperature": "32.4°C",
                    "Heat Index": "37.5°C",
                    "Potential Energy Savings": "35%",
                    "UV Index": 7.5
                }),
            )
        },
        WidgetDescriptor {
            id: Some("equipment-status".to_string()),
            bars: vec![SeriesSpec::named("count", "Issues")],
            ..WidgetDescriptor::new(
                WidgetKind::Bar,
                "Equipment Status Overview",
                json!([
                    {"name": "Critical", "count": 1},
                    {"name": "High Priority", "count": 1},
                    {"name": "Medium Priority", "count": 2}
                ]),
            )
        },
        WidgetDescriptor {
            id: Some("temperature-trend".to_string()),
            x_key: Some("time".to_string()),
            lines: vec![SeriesSpec::named("value", "Temperature °C")],
            ..WidgetDescriptor::new(
                WidgetKind::Line,
                "Temperature Trend",
                json!([
                    {"time": "Now", "value": 25.5},
                    {"time": "Target", "value": 22.0},
                    {"time": "Critical", "value": 26.0}
                ]),
            )
        },
    ];

    Dashboard {
        id: "energy-analysis".to_string(),
        title: "Facility Energy Analysis".to_string(),
        subtitle: Some("2 Equipment Issues Detected • 32.4°C Outdoor Temperature".to_string()),
        summary: summary(&[
            ("totalEquipment", json!(2)),
            ("criticalIssues", json!(1)),
            ("energyRecommendations", json!(3)),
            ("maintenanceItems", json!(2)),
            ("outdoorTemp", json!("32.4°C")),
        ]),
        quick_actions: vec![
            QuickAction::new(
                "adjust-setpoint",
                "Adjust Setpoint",
                "Increase setpoint to 23-24°C for optimal efficiency",
                Priority::High,
            ),
            QuickAction::new(
                "remove-lock",
                "Remove Equipment Lock",
                "Remove unauthorized lock on unit ff0000000000e4a5",
                Priority::Medium,
            ),
            QuickAction::new(
                "calibrate-sensors",
                "Calibrate Sensors",
                "Calibrate temperature sensors across all units",
                Priority::Low,
            ),
        ],
        alerts: vec![
            Alert::new(
                "critical-temp-differential",
                "Critical Temperature Differential",
                "27.4°C temperature differential exceeding efficient operating range",
                "ff0000000000bc21",
                Severity::High,
            ),
            Alert::new(
                "locked-equipment",
                "Equipment Lock Detected",
                "Locked status preventing automated weather-responsive operation",
                "ff0000000000e4a5",
                Severity::Medium,
            ),
        ],
        widgets,
    }
}

fn equipment_health() -> Dashboard {
    let widgets = vec![
        WidgetDescriptor {
            id: Some("maintenance-activity".to_string()),
            bars: vec![
                SeriesSpec::named("preventive", "Preventive").with_color("#3b82f6"),
                SeriesSpec::named("corrective", "Corrective").with_color("#ef4444"),
            ],
            ..WidgetDescriptor::new(
                WidgetKind::Bar,
                "Maintenance Activity",
                json!([
                    {"name": "Jan", "preventive": 65, "corrective": 35},
                    {"name": "Feb", "preventive": 59, "corrective": 48},
                    {"name": "Mar", "preventive": 80, "corrective": 40},
                    {"name": "Apr", "preventive": 81, "corrective": 39},
                    {"name": "May", "preventive": 76, "corrective": 48},
                    {"name": "Jun", "preventive": 85, "corrective": 37}
                ]),
            )
        },
        WidgetDescriptor {
            id: Some("work-orders-by-type".to_string()),
            ..WidgetDescriptor::new(
                WidgetKind::Pie,
                "Work Orders by Type",
                json!([
                    {"name": "HVAC", "value": 24},
                    {"name": "Plumbing", "value": 18},
                    {"name": "Electrical", "value": 15},
                    {"name": "Structural", "value": 8},
                    {"name": "Other", "value": 12}
                ]),
            )
        },
        WidgetDescriptor {
            id: Some("maintenance-priority".to_string()),
            ..WidgetDescriptor::new(
                WidgetKind::List,
                "Maintenance Priority Queue",
                json!([
                    {"name": "ff0000000000e480", "value": "Critical"},
                    {"name": "ff0000000000bc21", "value": "High"},
                    {"name": "ff0000000000e4ac", "value": "Medium"},
                    {"name": "ff0000000000e4a5", "value": "Medium"}
                ]),
            )
        },
        WidgetDescriptor {
            id: Some("energy-usage".to_string()),
            areas: vec![SeriesSpec::named("kwh", "kWh")],
            ..WidgetDescriptor::new(
                WidgetKind::Area,
                "Energy Usage",
                json!([
                    {"name": "Jan", "kwh": 4200},
                    {"name": "Feb", "kwh": 3980},
                    {"name": "Mar", "kwh": 4310},
                    {"name": "Apr", "kwh": 4105},
                    {"name": "May", "kwh": 4480},
                    {"name": "Jun", "kwh": 4720}
                ]),
            )
        },
    ];

    Dashboard {
        id: "equipment-health".to_string(),
        title: "Equipment Health Dashboard".to_string(),
        subtitle: Some("Critical HVAC Issues Detected".to_string()),
        summary: summary(&[
            ("totalEquipment", json!(4)),
            ("criticalIssues", json!(2)),
            ("highPriorityActions", json!(2)),
            ("maintenanceItems", json!(4)),
            ("averageTemperature", json!("25.5°C")),
        ]),
        quick_actions: vec![
            QuickAction::new(
                "repair-ff0000000000e480",
                "Repair Cooling Equipment",
                "Schedule immediate repair for equipment ff0000000000e480",
                Priority::High,
            ),
            QuickAction::new(
                "adjust-ff0000000000bc21",
                "Adjust Temperature Settings",
                "Calibrate temperature settings for equipment ff0000000000bc21",
                Priority::High,
            ),
            QuickAction::new(
                "inspect-cooling",
                "Inspect Cooling Systems",
                "Optimize cooling performance for equipment ff0000000000e4ac",
                Priority::Medium,
            ),
            QuickAction::new(
                "verify-controls",
                "Verify Control Systems",
                "Check control operation for equipment ff0000000000e4a5",
                Priority::Medium,
            ),
        ],
        alerts: vec![
            Alert::new(
                "critical-hvac-failure",
                "Critical HVAC Failure",
                "Equipment ff0000000000e480 is Off while in cooling mode",
                "ff0000000000e480",
                Severity::Critical,
            ),
            Alert::new(
                "temperature-setting-issue",
                "Temperature Setting Issue",
                "Equipment ff0000000000bc21 temperature set to unsafe 5°C",
                "ff0000000000bc21",
                Severity::High,
            ),
            Alert::new(
                "high-temperature-warning",
                "High Temperature Warning",
                "Room temperature 25.5°C approaching upper limit",
                "ff0000000000e4ac",
                Severity::Medium,
            ),
        ],
        widgets,
    }
}
