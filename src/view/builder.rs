use std::cmp::Ordering;

use crate::model::confidence::Confidence;
use crate::model::dataset::Dataset;
use crate::model::ranking::{RankingMode, RankingPolicy, ScoreOrder};
use crate::model::record::ScenarioRecord;
use crate::model::scenario::{RankedFeature, ScenarioSummary, ScenarioView, scenario_label};
use crate::model::score_type::ScoreType;

/// Builds the chart rows and summary for one scenario.
///
/// All sorts are stable, so equal scores keep input order. An unknown
/// `instance` yields an empty view rather than an error.
pub fn build_view(dataset: &Dataset, instance: i64, mode: RankingMode) -> ScenarioView {
    let policy = mode.policy();
    let rows = select_rows(dataset, instance, &policy);

    let features: Vec<RankedFeature> = rows.iter().map(|r| ranked(r)).collect();
    let summary = if policy.summarize {
        Some(summarize(rows.first().copied(), &features, policy.summary_limit))
    } else {
        None
    };

    ScenarioView {
        instance,
        label: scenario_label(instance),
        mode,
        features,
        summary,
    }
}

fn select_rows<'a>(
    dataset: &'a Dataset,
    instance: i64,
    policy: &RankingPolicy,
) -> Vec<&'a ScenarioRecord> {
    let mut rows: Vec<&ScenarioRecord> = dataset.records_for(instance).collect();

    if let Some(limit) = policy.feature_limit {
        rows.sort_by(|a, b| cmp_score(b.score.abs(), a.score.abs()));
        rows.truncate(limit);
    }
    if policy.drop_blank_features {
        rows.retain(|r| r.has_feature());
    }
    match policy.order {
        ScoreOrder::Ascending => rows.sort_by(|a, b| cmp_score(a.score, b.score)),
        ScoreOrder::Descending => rows.sort_by(|a, b| cmp_score(b.score, a.score)),
    }
    rows
}

fn ranked(record: &ScenarioRecord) -> RankedFeature {
    RankedFeature {
        feature: record.feature.clone(),
        score: record.score,
        score_type: ScoreType::from_score(record.score),
        value_label: record.value_label.clone(),
        long_label: record.long_label.clone(),
    }
}

fn summarize(
    first: Option<&ScenarioRecord>,
    features: &[RankedFeature],
    limit: usize,
) -> ScenarioSummary {
    let predicted = first
        .map(|r| r.predicted.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string);
    let confidence = Confidence::from_predicted_score(first.and_then(|r| r.predicted_score));

    let mut top_risk = of_type(features, ScoreType::Risk);
    top_risk.sort_by(|a, b| cmp_score(b.score, a.score));
    top_risk.truncate(limit);

    let mut top_protective = of_type(features, ScoreType::Protective);
    top_protective.sort_by(|a, b| cmp_score(a.score, b.score));
    top_protective.truncate(limit);

    ScenarioSummary {
        predicted,
        confidence,
        top_risk,
        top_protective,
    }
}

fn of_type(features: &[RankedFeature], score_type: ScoreType) -> Vec<RankedFeature> {
    features
        .iter()
        .filter(|f| f.score_type == score_type)
        .cloned()
        .collect()
}

fn cmp_score(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
#[path = "../../tests/src_inline/view/builder.rs"]
mod tests;
