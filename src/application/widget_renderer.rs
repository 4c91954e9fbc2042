// Widget renderer - resolves widget descriptors into render models
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::render::{
    ChartSeries, ListRow, MetricEntry, PieSlice, RenderedWidget, WidgetBody,
};
use crate::domain::widget::{SeriesSpec, WidgetDescriptor, WidgetKind};

/// Series color used when the palette itself is empty.
const FALLBACK_COLOR: &str = "#8884d8";

/// Why a widget's data did not match the shape its kind expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("widget data is empty")]
    EmptyData,
    #[error("widget data is not an array of records")]
    NotRecords,
    #[error("widget data is not an object map")]
    NotMap,
    #[error("record is missing field `{0}`")]
    MissingField(String),
    #[error("field `{0}` is not numeric")]
    NonNumeric(String),
    #[error("slice values sum to a non-positive total")]
    NonPositiveTotal,
}

/// Maps widget descriptors to resolved render models.
///
/// Pure: the output is a function of the descriptor list and the injected
/// palette only. A malformed descriptor degrades to an `Empty` placeholder
/// for that widget alone; an unrecognized kind falls back to a `Raw` body.
/// Neither aborts rendering of sibling widgets.
#[derive(Debug, Clone)]
pub struct WidgetRenderer {
    palette: Vec<String>,
}

impl WidgetRenderer {
    pub fn new(palette: Vec<String>) -> Self {
        Self { palette }
    }

    pub fn render(&self, widgets: &[WidgetDescriptor]) -> Vec<RenderedWidget> {
        widgets
            .iter()
            .enumerate()
            .map(|(index, widget)| self.render_widget(index, widget))
            .collect()
    }

    fn render_widget(&self, index: usize, widget: &WidgetDescriptor) -> RenderedWidget {
        // A descriptor without an id keys off its position. Stable within one
        // render pass only; reordering the input reorders the keys.
        let key = widget
            .id
            .clone()
            .unwrap_or_else(|| index.to_string());

        let result = match &widget.kind {
            WidgetKind::Bar => self
                .render_cartesian(widget, &widget.bars)
                .map(|(categories, series)| WidgetBody::Bar { categories, series }),
            WidgetKind::Line => self
                .render_cartesian(widget, &widget.lines)
                .map(|(categories, series)| WidgetBody::Line { categories, series }),
            WidgetKind::Area => self
                .render_cartesian(widget, &widget.areas)
                .map(|(categories, series)| WidgetBody::Area { categories, series }),
            WidgetKind::Pie => self.render_pie(widget).map(|slices| WidgetBody::Pie { slices }),
            WidgetKind::List => render_list(widget).map(|rows| WidgetBody::List { rows }),
            WidgetKind::Metrics => {
                render_metrics(widget).map(|entries| WidgetBody::Metrics { entries })
            }
            WidgetKind::Unknown(tag) => {
                tracing::debug!(widget = %key, tag = %tag, "unrecognized widget kind, rendering raw data");
                Ok(WidgetBody::Raw {
                    data: widget.data.clone(),
                })
            }
        };

        let body = result.unwrap_or_else(|err| {
            tracing::warn!(
                widget = %key,
                kind = widget.kind.as_str(),
                error = %err,
                "widget data failed shape validation"
            );
            WidgetBody::Empty {
                reason: err.to_string(),
            }
        });

        RenderedWidget {
            key,
            title: widget.title.clone(),
            body,
        }
    }

    /// Shared resolution for bar/line/area: one category per distinct value
    /// of the category-axis field, input order preserved, duplicates
    /// collapsing into the first occurrence. Series come only from the
    /// descriptor's explicit series list.
    fn render_cartesian(
        &self,
        widget: &WidgetDescriptor,
        specs: &[SeriesSpec],
    ) -> Result<(Vec<String>, Vec<ChartSeries>), ShapeError> {
        let records = records(&widget.data)?;
        if records.is_empty() {
            return Err(ShapeError::EmptyData);
        }
        let x_key = widget.x_key();

        let mut categories: Vec<String> = Vec::new();
        let mut rows: Vec<&Map<String, Value>> = Vec::new();
        for record in records {
            let record = record.as_object().ok_or(ShapeError::NotRecords)?;
            let label = record
                .get(x_key)
                .and_then(scalar_label)
                .ok_or_else(|| ShapeError::MissingField(x_key.to_string()))?;
            if !categories.contains(&label) {
                categories.push(label);
                rows.push(record);
            }
        }

        let series = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| ChartSeries {
                key: spec.key.clone(),
                name: spec.name.clone().unwrap_or_else(|| spec.key.clone()),
                color: self.color_for(spec.color.as_deref(), i),
                values: rows
                    .iter()
                    .map(|row| row.get(&spec.key).and_then(Value::as_f64))
                    .collect(),
            })
            .collect();

        Ok((categories, series))
    }

    fn render_pie(&self, widget: &WidgetDescriptor) -> Result<Vec<PieSlice>, ShapeError> {
        let records = records(&widget.data)?;
        if records.is_empty() {
            return Err(ShapeError::EmptyData);
        }
        let name_key = widget.x_key();
        let value_key = widget.value_key();

        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let record = record.as_object().ok_or(ShapeError::NotRecords)?;
            let name = record
                .get(name_key)
                .and_then(scalar_label)
                .ok_or_else(|| ShapeError::MissingField(name_key.to_string()))?;
            let value = record
                .get(value_key)
                .and_then(Value::as_f64)
                .ok_or_else(|| ShapeError::NonNumeric(value_key.to_string()))?;
            entries.push((name, value));
        }

        let total: f64 = entries.iter().map(|(_, value)| value).sum();
        if total <= 0.0 {
            return Err(ShapeError::NonPositiveTotal);
        }

        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, value))| PieSlice {
                name,
                value,
                percent: (100.0 * value / total).round(),
                color: self.color_for(None, i),
            })
            .collect())
    }

    fn color_for(&self, explicit: Option<&str>, index: usize) -> String {
        if let Some(color) = explicit {
            return color.to_string();
        }
        if self.palette.is_empty() {
            return FALLBACK_COLOR.to_string();
        }
        self.palette[index % self.palette.len()].clone()
    }
}

fn render_list(widget: &WidgetDescriptor) -> Result<Vec<ListRow>, ShapeError> {
    // An empty list renders as an empty container, not a placeholder.
    let records = records(&widget.data)?;
    let value_key = widget.value_key();

    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let record = record.as_object().ok_or(ShapeError::NotRecords)?;
        let label = record
            .get("name")
            .or_else(|| record.get("label"))
            .and_then(scalar_label)
            .ok_or_else(|| ShapeError::MissingField("name".to_string()))?;
        let value = record.get(value_key).cloned().unwrap_or(Value::Null);
        rows.push(ListRow { label, value });
    }
    Ok(rows)
}

fn render_metrics(widget: &WidgetDescriptor) -> Result<Vec<MetricEntry>, ShapeError> {
    let map = widget.data.as_object().ok_or(ShapeError::NotMap)?;
    if map.is_empty() {
        return Err(ShapeError::EmptyData);
    }
    Ok(map
        .iter()
        .map(|(label, value)| MetricEntry {
            label: label.clone(),
            value: value.clone(),
        })
        .collect())
}

fn records(data: &Value) -> Result<&[Value], ShapeError> {
    data.as_array()
        .map(Vec::as_slice)
        .ok_or(ShapeError::NotRecords)
}

fn scalar_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renderer() -> WidgetRenderer {
        WidgetRenderer::new(vec![
            "#0088FE".to_string(),
            "#00C49F".to_string(),
            "#FFBB28".to_string(),
        ])
    }

    fn descriptor(value: Value) -> WidgetDescriptor {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn bar_scenario_three_groups_one_series() {
        let widget = descriptor(json!({
            "type": "bar",
            "title": "Equipment Status",
            "data": [
                {"name": "Critical", "count": 1},
                {"name": "High", "count": 1},
                {"name": "Medium", "count": 2}
            ],
            "bars": [{"key": "count"}]
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::Bar { categories, series } => {
                assert_eq!(categories, &["Critical", "High", "Medium"]);
                assert_eq!(series.len(), 1);
                assert_eq!(series[0].values, vec![Some(1.0), Some(1.0), Some(2.0)]);
            }
            other => panic!("expected bar body, got {other:?}"),
        }
    }

    #[test]
    fn bar_collapses_duplicate_categories_preserving_order() {
        let widget = descriptor(json!({
            "type": "bar",
            "title": "Status",
            "data": [
                {"name": "B", "count": 2},
                {"name": "A", "count": 1},
                {"name": "B", "count": 9}
            ],
            "bars": [{"key": "count"}]
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::Bar { categories, series } => {
                assert_eq!(categories, &["B", "A"]);
                assert_eq!(series[0].values, vec![Some(2.0), Some(1.0)]);
            }
            other => panic!("expected bar body, got {other:?}"),
        }
    }

    #[test]
    fn bar_without_series_list_renders_no_series() {
        let widget = descriptor(json!({
            "type": "bar",
            "title": "Status",
            "data": [{"name": "A", "count": 1}]
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::Bar { categories, series } => {
                assert_eq!(categories.len(), 1);
                assert!(series.is_empty());
            }
            other => panic!("expected bar body, got {other:?}"),
        }
    }

    #[test]
    fn bar_with_record_missing_x_key_degrades_to_empty() {
        let widget = descriptor(json!({
            "type": "bar",
            "title": "Status",
            "data": [{"name": "A", "count": 1}, {"count": 2}],
            "bars": [{"key": "count"}]
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::Empty { reason } => {
                assert!(reason.contains("name"), "reason: {reason}");
            }
            other => panic!("expected empty body, got {other:?}"),
        }
    }

    #[test]
    fn pie_scenario_two_slices_25_75() {
        let widget = descriptor(json!({
            "type": "pie",
            "title": "Work Orders",
            "data": [{"name": "A", "value": 25}, {"name": "B", "value": 75}]
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::Pie { slices } => {
                assert_eq!(slices.len(), 2);
                assert_eq!(slices[0].percent, 25.0);
                assert_eq!(slices[1].percent, 75.0);
            }
            other => panic!("expected pie body, got {other:?}"),
        }
    }

    #[test]
    fn pie_percentages_sum_to_100_within_rounding() {
        let widget = descriptor(json!({
            "type": "pie",
            "title": "Work Orders by Type",
            "data": [
                {"name": "HVAC", "value": 24},
                {"name": "Plumbing", "value": 18},
                {"name": "Electrical", "value": 15},
                {"name": "Structural", "value": 8},
                {"name": "Other", "value": 12}
            ]
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::Pie { slices } => {
                let total = 24.0 + 18.0 + 15.0 + 8.0 + 12.0;
                for slice in slices {
                    assert_eq!(slice.percent, (100.0 * slice.value / total).round());
                }
                let sum: f64 = slices.iter().map(|s| s.percent).sum();
                assert!((sum - 100.0).abs() <= slices.len() as f64 / 2.0);
            }
            other => panic!("expected pie body, got {other:?}"),
        }
    }

    #[test]
    fn pie_with_zero_total_degrades_to_empty() {
        let widget = descriptor(json!({
            "type": "pie",
            "title": "Nothing",
            "data": [{"name": "A", "value": 0}, {"name": "B", "value": 0}]
        }));

        let rendered = renderer().render(&[widget]);
        assert!(matches!(rendered[0].body, WidgetBody::Empty { .. }));
    }

    #[test]
    fn metrics_one_entry_per_key() {
        let widget = descriptor(json!({
            "type": "metrics",
            "title": "Temperature Analysis",
            "data": {
                "Critical High Temp": "25.5°C",
                "Critical Low Temp": "5.0°C",
                "Equipment Affected": 3
            }
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::Metrics { entries } => {
                assert_eq!(entries.len(), 3);
                let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
                assert!(labels.contains(&"Equipment Affected"));
            }
            other => panic!("expected metrics body, got {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_falls_back_to_raw_without_affecting_siblings() {
        let unknown = descriptor(json!({
            "type": "unknown-type",
            "title": "Mystery",
            "data": {"foo": 1}
        }));
        let bar = descriptor(json!({
            "type": "bar",
            "title": "Status",
            "data": [{"name": "A", "count": 1}],
            "bars": [{"key": "count"}]
        }));

        let rendered = renderer().render(&[unknown, bar]);
        assert_eq!(rendered.len(), 2);
        match &rendered[0].body {
            WidgetBody::Raw { data } => assert_eq!(data, &json!({"foo": 1})),
            other => panic!("expected raw body, got {other:?}"),
        }
        assert!(matches!(rendered[1].body, WidgetBody::Bar { .. }));
    }

    #[test]
    fn empty_list_renders_empty_container() {
        let widget = descriptor(json!({
            "type": "list",
            "title": "Queue",
            "data": []
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::List { rows } => assert!(rows.is_empty()),
            other => panic!("expected list body, got {other:?}"),
        }
    }

    #[test]
    fn list_accepts_name_or_label_for_display() {
        let widget = descriptor(json!({
            "type": "list",
            "title": "Queue",
            "data": [
                {"name": "ff0000000000e480", "value": "Critical"},
                {"label": "ff0000000000bc21", "value": "High"}
            ]
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::List { rows } => {
                assert_eq!(rows[0].label, "ff0000000000e480");
                assert_eq!(rows[1].label, "ff0000000000bc21");
                assert_eq!(rows[1].value, json!("High"));
            }
            other => panic!("expected list body, got {other:?}"),
        }
    }

    #[test]
    fn empty_chart_data_degrades_to_empty() {
        for kind in ["bar", "line", "area", "pie"] {
            let widget = descriptor(json!({
                "type": kind,
                "title": "Empty",
                "data": []
            }));
            let rendered = renderer().render(&[widget]);
            assert!(
                matches!(rendered[0].body, WidgetBody::Empty { .. }),
                "kind {kind} should degrade"
            );
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let widgets = vec![
            descriptor(json!({
                "type": "pie",
                "title": "Work Orders",
                "data": [{"name": "A", "value": 25}, {"name": "B", "value": 75}]
            })),
            descriptor(json!({
                "type": "metrics",
                "title": "Stats",
                "data": {"Heat Index": 37.5}
            })),
        ];

        let renderer = renderer();
        assert_eq!(renderer.render(&widgets), renderer.render(&widgets));
    }

    #[test]
    fn missing_id_uses_positional_keys() {
        let first = descriptor(json!({
            "type": "metrics", "title": "First", "data": {"a": 1}
        }));
        let second = descriptor(json!({
            "type": "metrics", "title": "Second", "data": {"b": 2}
        }));

        let renderer = renderer();
        let forward = renderer.render(&[first.clone(), second.clone()]);
        assert_eq!(forward[0].key, "0");
        assert_eq!(forward[1].key, "1");

        // Reordering the input reassigns the fallback keys.
        let reversed = renderer.render(&[second, first]);
        assert_eq!(reversed[0].key, "0");
        assert_eq!(reversed[0].title, "Second");
    }

    #[test]
    fn explicit_series_color_wins_over_palette() {
        let widget = descriptor(json!({
            "type": "line",
            "title": "Trend",
            "xKey": "time",
            "data": [{"time": "Now", "value": 25.5}, {"time": "Target", "value": 22.0}],
            "lines": [
                {"key": "value", "name": "Temperature", "color": "#ef4444"},
                {"key": "value"}
            ]
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::Line { series, .. } => {
                assert_eq!(series[0].color, "#ef4444");
                assert_eq!(series[0].name, "Temperature");
                // Second series takes palette slot 1.
                assert_eq!(series[1].color, "#00C49F");
                assert_eq!(series[1].name, "value");
            }
            other => panic!("expected line body, got {other:?}"),
        }
    }

    #[test]
    fn palette_assignment_cycles() {
        let specs: Vec<Value> = (0..5).map(|i| json!({"key": format!("s{i}")})).collect();
        let widget = descriptor(json!({
            "type": "bar",
            "title": "Wide",
            "data": [{"name": "A", "s0": 1, "s1": 2, "s2": 3, "s3": 4, "s4": 5}],
            "bars": specs
        }));

        let rendered = renderer().render(&[widget]);
        match &rendered[0].body {
            WidgetBody::Bar { series, .. } => {
                assert_eq!(series[0].color, "#0088FE");
                assert_eq!(series[3].color, "#0088FE");
                assert_eq!(series[4].color, "#00C49F");
            }
            other => panic!("expected bar body, got {other:?}"),
        }
    }
}
