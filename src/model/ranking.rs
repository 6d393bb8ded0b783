use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RankingMode {
    /// Ten strongest features, blank names dropped, with prediction summary.
    TopTen,
    /// Every feature of the scenario, strongest risk first, no summary.
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone)]
pub struct RankingPolicy {
    pub feature_limit: Option<usize>,
    pub drop_blank_features: bool,
    pub order: ScoreOrder,
    pub summarize: bool,
    pub summary_limit: usize,
}

impl RankingPolicy {
    pub fn top_ten() -> Self {
        Self {
            feature_limit: Some(10),
            drop_blank_features: true,
            order: ScoreOrder::Ascending,
            summarize: true,
            summary_limit: 3,
        }
    }

    pub fn full() -> Self {
        Self {
            feature_limit: None,
            drop_blank_features: false,
            order: ScoreOrder::Descending,
            summarize: false,
            summary_limit: 0,
        }
    }
}

impl RankingMode {
    pub fn policy(self) -> RankingPolicy {
        match self {
            RankingMode::TopTen => RankingPolicy::top_ten(),
            RankingMode::Full => RankingPolicy::full(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RankingMode::TopTen => "top-ten",
            RankingMode::Full => "full",
        }
    }
}
