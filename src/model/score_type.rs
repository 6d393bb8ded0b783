use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreType {
    Risk,
    Protective,
}

impl ScoreType {
    pub fn from_score(score: f64) -> Self {
        if score < 0.0 {
            ScoreType::Protective
        } else {
            ScoreType::Risk
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreType::Risk => "Risk",
            ScoreType::Protective => "Protective",
        }
    }
}
