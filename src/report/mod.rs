pub mod chart;
pub mod html;
pub mod json;
pub mod text;
pub mod write;

use serde::Serialize;

use crate::model::dataset::Dataset;
use crate::model::scenario::scenario_label;
use crate::model::score_type::ScoreType;

pub const RISK_COLOR: &str = "orchid";
pub const PROTECTIVE_COLOR: &str = "yellowgreen";

pub const HIGH_RISK_LABEL: &str = "High risk";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOption {
    pub value: i64,
    pub label: String,
}

pub fn scenario_options(dataset: &Dataset) -> Vec<ScenarioOption> {
    dataset
        .instances()
        .iter()
        .map(|&value| ScenarioOption {
            value,
            label: scenario_label(value),
        })
        .collect()
}

pub fn score_type_color(score_type: ScoreType) -> &'static str {
    match score_type {
        ScoreType::Risk => RISK_COLOR,
        ScoreType::Protective => PROTECTIVE_COLOR,
    }
}

pub fn prediction_color(predicted: &str) -> &'static str {
    if predicted == HIGH_RISK_LABEL {
        RISK_COLOR
    } else {
        PROTECTIVE_COLOR
    }
}

pub fn format_score(v: f64) -> String {
    format!("{:.4}", v)
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
