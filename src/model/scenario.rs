use serde::Serialize;

use crate::model::confidence::Confidence;
use crate::model::ranking::RankingMode;
use crate::model::score_type::ScoreType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFeature {
    pub feature: String,
    pub score: f64,
    pub score_type: ScoreType,
    pub value_label: String,
    pub long_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub predicted: Option<String>,
    pub confidence: Confidence,
    pub top_risk: Vec<RankedFeature>,
    pub top_protective: Vec<RankedFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioView {
    pub instance: i64,
    pub label: String,
    pub mode: RankingMode,
    pub features: Vec<RankedFeature>,
    pub summary: Option<ScenarioSummary>,
}

impl ScenarioView {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

pub fn scenario_label(instance: i64) -> String {
    format!("Scenario {}", instance.saturating_add(1))
}
