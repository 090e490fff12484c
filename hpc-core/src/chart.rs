//! Renderer-neutral line chart description.
//!
//! A `ChartSpec` is built by the flow presenters and handed to whatever
//! `registry::ChartBackend` draws it. `to_chartjs_config` emits the Chart.js
//! configuration object the browser backend passes to `new Chart(...)`.

use log::warn;
use serde_json::{json, Map, Value};

/// Visible x-axis tick labels are capped so 8760 hourly steps stay legible.
pub const MAX_X_TICKS: u32 = 12;

/// Which Y axis a series is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    /// `y`, drawn on the left with gridlines.
    Primary,
    /// `y1`, mirrored on the right without gridlines.
    Secondary,
}

impl AxisSide {
    pub fn id(&self) -> &'static str {
        match self {
            AxisSide::Primary => "y",
            AxisSide::Secondary => "y1",
        }
    }
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
    pub color: String,
    pub axis: AxisSide,
}

impl Series {
    pub fn new(label: &str, data: Vec<f64>, color: &str, axis: AxisSide) -> Self {
        Self {
            label: label.to_string(),
            data,
            color: color.to_string(),
            axis,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// X-axis labels, one per time step.
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub primary_title: Option<String>,
    pub secondary_title: Option<String>,
    pub max_x_ticks: u32,
}

impl ChartSpec {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            series: Vec::new(),
            primary_title: None,
            secondary_title: None,
            max_x_ticks: MAX_X_TICKS,
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_axis_titles(mut self, primary: &str, secondary: Option<&str>) -> Self {
        self.primary_title = Some(primary.to_string());
        self.secondary_title = secondary.map(str::to_string);
        self
    }

    /// A second Y axis is needed once any series uses a different unit.
    pub fn has_secondary_axis(&self) -> bool {
        self.series.iter().any(|s| s.axis == AxisSide::Secondary)
    }

    /// Whether every series has exactly one value per label.
    pub fn is_aligned(&self) -> bool {
        self.series.iter().all(|s| s.data.len() == self.labels.len())
    }

    /// Log series whose length does not match the labels. Rendering proceeds anyway.
    pub fn warn_if_misaligned(&self) {
        for s in self.series.iter().filter(|s| s.data.len() != self.labels.len()) {
            warn!(
                "series '{}' has {} values for {} time steps",
                s.label,
                s.data.len(),
                self.labels.len()
            );
        }
    }

    pub fn to_chartjs_config(&self) -> Value {
        let datasets: Vec<Value> = self
            .series
            .iter()
            .map(|s| {
                json!({
                    "label": s.label,
                    "data": s.data,
                    "borderColor": s.color,
                    "backgroundColor": s.color,
                    "borderWidth": 1,
                    "pointRadius": 0,
                    "yAxisID": s.axis.id(),
                })
            })
            .collect();

        let mut scales = Map::new();
        scales.insert(
            "x".into(),
            json!({
                "ticks": {
                    "autoSkip": true,
                    "maxTicksLimit": self.max_x_ticks,
                }
            }),
        );
        scales.insert(
            AxisSide::Primary.id().into(),
            axis_config("left", self.primary_title.as_deref(), true),
        );
        if self.has_secondary_axis() {
            scales.insert(
                AxisSide::Secondary.id().into(),
                axis_config("right", self.secondary_title.as_deref(), false),
            );
        }

        json!({
            "type": "line",
            "data": {
                "labels": self.labels,
                "datasets": datasets,
            },
            "options": {
                "animation": false,
                "responsive": true,
                "interaction": { "mode": "index", "intersect": false },
                "scales": Value::Object(scales),
            }
        })
    }
}

fn axis_config(position: &str, title: Option<&str>, draw_grid: bool) -> Value {
    let mut axis = json!({
        "type": "linear",
        "display": true,
        "position": position,
    });
    if !draw_grid {
        axis["grid"] = json!({ "drawOnChartArea": false });
    }
    if let Some(text) = title {
        axis["title"] = json!({ "display": true, "text": text });
    }
    axis
}
