use crate::model::scenario::{RankedFeature, ScenarioView};
use crate::report::chart::chart_title;
use crate::report::format_score;
use crate::report::html::NO_DATA_MESSAGE;

pub fn render_view_text(view: &ScenarioView) -> String {
    let mut out = String::new();

    out.push_str("Local Interpretation Report\n");
    out.push_str("===========================\n\n");
    out.push_str(&format!("{} (instance {})\n", view.label, view.instance));
    out.push_str(&format!("Ranking mode: {}\n\n", view.mode.as_str()));

    out.push_str(&format!("1. {}\n", chart_title(view)));
    if view.is_empty() {
        out.push_str(&format!("{}\n", NO_DATA_MESSAGE));
    }
    for f in &view.features {
        out.push_str(&format!(
            "{:>10}  {:<10}  {} ({})\n",
            format_score(f.score),
            f.score_type.as_str(),
            f.feature,
            f.value_label
        ));
    }
    out.push('\n');

    let Some(summary) = &view.summary else {
        return out;
    };
    if view.is_empty() {
        return out;
    }

    out.push_str("2. Model prediction\n");
    let predicted = summary.predicted.as_deref().unwrap_or("unknown");
    match summary.confidence.percent() {
        Some(p) => out.push_str(&format!(
            "The model prediction is {} with {}% confidence.\n\n",
            predicted, p
        )),
        None => out.push_str(&format!(
            "The model prediction is {}; confidence unavailable.\n\n",
            predicted
        )),
    }

    out.push_str("3. Top 3 risk factors\n");
    push_factor_lines(&mut out, &summary.top_risk);
    out.push('\n');

    out.push_str("4. Top 3 protective factors\n");
    push_factor_lines(&mut out, &summary.top_protective);

    out
}

fn push_factor_lines(out: &mut String, items: &[RankedFeature]) {
    if items.is_empty() {
        out.push_str("(none)\n");
    }
    for item in items {
        out.push_str(&format!("- {} for {}\n", item.long_label, item.value_label));
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
