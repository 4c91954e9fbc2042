// Widget descriptor domain model
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed vocabulary of widget kinds. Unrecognized tags are preserved
/// verbatim in `Unknown` so the renderer can fall back without losing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetKind {
    Bar,
    Pie,
    Line,
    Area,
    List,
    Metrics,
    Unknown(String),
}

impl From<String> for WidgetKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "bar" => WidgetKind::Bar,
            "pie" => WidgetKind::Pie,
            "line" => WidgetKind::Line,
            "area" => WidgetKind::Area,
            "list" => WidgetKind::List,
            "metrics" => WidgetKind::Metrics,
            _ => WidgetKind::Unknown(tag),
        }
    }
}

impl From<WidgetKind> for String {
    fn from(kind: WidgetKind) -> Self {
        kind.as_str().to_string()
    }
}

impl WidgetKind {
    pub fn as_str(&self) -> &str {
        match self {
            WidgetKind::Bar => "bar",
            WidgetKind::Pie => "pie",
            WidgetKind::Line => "line",
            WidgetKind::Area => "area",
            WidgetKind::List => "list",
            WidgetKind::Metrics => "metrics",
            WidgetKind::Unknown(tag) => tag,
        }
    }
}

impl Default for WidgetKind {
    fn default() -> Self {
        WidgetKind::Unknown(String::new())
    }
}

/// One plotted series within a multi-series chart: which field of each data
/// record to read, and optionally how to label and color it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SeriesSpec {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            color: None,
        }
    }

    pub fn named(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: Some(name.into()),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Declarative description of one dashboard panel.
///
/// `data` is polymorphic: an ordered array of records for chart and list
/// kinds, an object map for `metrics`. The field-name defaults (`"name"` for
/// the category axis, `"value"` for pie slices) are part of this contract,
/// overridable through `x_key` / `value_key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: WidgetKind,
    pub title: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bars: Vec<SeriesSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<SeriesSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<SeriesSpec>,
}

impl WidgetDescriptor {
    pub fn new(kind: WidgetKind, title: impl Into<String>, data: Value) -> Self {
        Self {
            kind,
            title: title.into(),
            data,
            ..Self::default()
        }
    }

    /// Category-axis field name, falling back to the `"name"` convention.
    pub fn x_key(&self) -> &str {
        self.x_key.as_deref().unwrap_or("name")
    }

    /// Slice-value field name, falling back to the `"value"` convention.
    pub fn value_key(&self) -> &str {
        self.value_key.as_deref().unwrap_or("value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_round_trips_known_tags() {
        for tag in ["bar", "pie", "line", "area", "list", "metrics"] {
            let kind = WidgetKind::from(tag.to_string());
            assert_eq!(kind.as_str(), tag);
            assert_ne!(kind, WidgetKind::Unknown(tag.to_string()));
        }
    }

    #[test]
    fn kind_preserves_unknown_tag() {
        let kind = WidgetKind::from("sparkline".to_string());
        assert_eq!(kind, WidgetKind::Unknown("sparkline".to_string()));
        assert_eq!(String::from(kind), "sparkline");
    }

    #[test]
    fn descriptor_deserializes_wire_shape() {
        let descriptor: WidgetDescriptor = serde_json::from_value(json!({
            "id": "equipment-status",
            "type": "bar",
            "title": "Equipment Status Overview",
            "data": [
                {"name": "Critical", "count": 1},
                {"name": "High", "count": 1}
            ],
            "xKey": "name",
            "bars": [{"key": "count"}]
        }))
        .unwrap();

        assert_eq!(descriptor.kind, WidgetKind::Bar);
        assert_eq!(descriptor.x_key(), "name");
        assert_eq!(descriptor.bars.len(), 1);
        assert_eq!(descriptor.bars[0].key, "count");
    }

    #[test]
    fn descriptor_without_type_gets_the_catch_all_kind() {
        let descriptor: WidgetDescriptor = serde_json::from_value(json!({
            "title": "Untyped",
            "data": {"foo": 1}
        }))
        .unwrap();
        assert!(matches!(descriptor.kind, WidgetKind::Unknown(_)));
    }

    #[test]
    fn descriptor_defaults_apply_when_fields_absent() {
        let descriptor: WidgetDescriptor = serde_json::from_value(json!({
            "type": "pie",
            "title": "Work Orders by Type",
            "data": [{"name": "HVAC", "value": 24}]
        }))
        .unwrap();

        assert_eq!(descriptor.id, None);
        assert_eq!(descriptor.x_key(), "name");
        assert_eq!(descriptor.value_key(), "value");
        assert!(descriptor.bars.is_empty());
    }
}
