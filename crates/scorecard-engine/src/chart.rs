//! Grouped bar chart of college metrics.
//!
//! The figure serializes to the JSON layout Plotly expects
//! (`{"data": [...], "layout": {...}}`) so any Plotly front end can draw it.

use serde::{Deserialize, Serialize};
use scorecard_types::{CollegeMetric, CollegeRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFigure {
    pub data: Vec<BarTrace>,
    pub layout: ChartLayout,
}

/// One college's bars across all metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: AxisTitle,
    pub barmode: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub text: String,
}

impl AxisTitle {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

pub fn comparison_chart(records: &[CollegeRecord]) -> ChartFigure {
    let labels: Vec<String> = CollegeMetric::ALL
        .iter()
        .map(|m| m.label().to_string())
        .collect();

    let data = records
        .iter()
        .map(|record| BarTrace {
            trace_type: "bar".to_string(),
            name: record.name.clone(),
            x: labels.clone(),
            y: CollegeMetric::ALL.iter().map(|m| record.metric(*m)).collect(),
        })
        .collect();

    ChartFigure {
        data,
        layout: ChartLayout {
            title: AxisTitle::new("College Comparison"),
            barmode: "group".to_string(),
            xaxis: Axis {
                title: AxisTitle::new("Metrics"),
            },
            yaxis: Axis {
                title: AxisTitle::new("Values"),
            },
            showlegend: true,
        },
    }
}
