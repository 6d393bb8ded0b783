#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRecord {
    pub instance: i64,
    pub feature: String,
    pub score: f64,
    pub value_label: String,
    pub long_label: String,
    pub predicted: String,
    pub predicted_score: Option<f64>,
}

impl ScenarioRecord {
    pub fn has_feature(&self) -> bool {
        !self.feature.trim().is_empty()
    }
}
