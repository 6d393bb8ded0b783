use serde::Serialize;

/// Source values at or below this are probabilities; above it they are already percentages.
/// Exactly 1.0 therefore reads as 100%, not 1%.
pub const FRACTION_CEILING: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Percent(u8),
    Unavailable,
}

impl Confidence {
    pub fn from_predicted_score(raw: Option<f64>) -> Self {
        let Some(value) = raw else {
            return Confidence::Unavailable;
        };
        if !value.is_finite() || value < 0.0 {
            return Confidence::Unavailable;
        }
        let percent = if value <= FRACTION_CEILING {
            value * 100.0
        } else {
            value
        };
        let rounded = percent.round_ties_even();
        if rounded > 100.0 {
            return Confidence::Unavailable;
        }
        Confidence::Percent(rounded as u8)
    }

    pub fn percent(self) -> Option<u8> {
        match self {
            Confidence::Percent(p) => Some(p),
            Confidence::Unavailable => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/confidence.rs"]
mod tests;
