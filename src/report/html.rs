use crate::model::dataset::Dataset;
use crate::model::scenario::{RankedFeature, ScenarioSummary, ScenarioView};
use crate::report::chart::render_bar_chart;
use crate::report::{
    PROTECTIVE_COLOR, RISK_COLOR, escape_html, prediction_color, scenario_options,
};

pub const PAGE_TITLE: &str = "Local Interpretation Dashboard";
pub const NO_DATA_MESSAGE: &str = "No data for this scenario.";

/// Full dashboard page with the dropdown preset to `view.instance`.
///
/// The dropdown's `change` handler fetches `/view/<instance>` and swaps the
/// returned fragment in, so chart and summary always update together. Without
/// scripting the surrounding form falls back to `/?scenario=<instance>`.
pub fn render_page(dataset: &Dataset, view: &ScenarioView) -> String {
    let mut options = String::new();
    for opt in scenario_options(dataset) {
        let selected = if opt.value == view.instance {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            opt.value,
            selected,
            escape_html(&opt.label)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<h1>{title}</h1>
<form method="get" action="/">
<select id="scenario-dropdown" name="scenario">{options}</select>
<noscript><button type="submit">Show</button></noscript>
</form>
<div id="scenario-view">{fragment}</div>
<script>{js}</script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        css = inline_css(),
        options = options,
        fragment = render_fragment(view),
        js = inline_javascript(),
    )
}

pub fn render_fragment(view: &ScenarioView) -> String {
    format!(
        "<div id=\"scenario-info\">{}</div><div id=\"factor-bar-chart\">{}</div>",
        render_info(view),
        render_bar_chart(view)
    )
}

pub fn render_info(view: &ScenarioView) -> String {
    let mut out = String::new();
    if view.is_empty() {
        out.push_str(&format!("<p class=\"no-data\">{}</p>", NO_DATA_MESSAGE));
    }
    match &view.summary {
        None => {
            out.push_str(&format!(
                "<p class=\"scenario-name\">{}</p>",
                escape_html(&view.label)
            ));
        }
        Some(summary) if !view.is_empty() => push_summary(&mut out, summary),
        Some(_) => {}
    }
    out
}

fn push_summary(out: &mut String, summary: &ScenarioSummary) {
    let predicted = summary.predicted.as_deref().unwrap_or("unknown");
    let predicted_html = format!(
        "<strong style=\"color: {}\">{}</strong>",
        prediction_color(predicted),
        escape_html(predicted)
    );
    let sentence = match summary.confidence.percent() {
        Some(p) => format!(
            "The model prediction is {} with <strong>{}%</strong> confidence.",
            predicted_html, p
        ),
        None => format!(
            "The model prediction is {}; confidence unavailable.",
            predicted_html
        ),
    };
    out.push_str(&format!("<p class=\"prediction\">{}</p>", sentence));

    push_factor_list(out, "Top 3 risk factors:", RISK_COLOR, &summary.top_risk);
    push_factor_list(
        out,
        "Top 3 protective factors:",
        PROTECTIVE_COLOR,
        &summary.top_protective,
    );
}

fn push_factor_list(out: &mut String, heading: &str, color: &str, items: &[RankedFeature]) {
    out.push_str(&format!(
        "<span class=\"factor-heading\" style=\"color: {}\">{}</span><ul>",
        color, heading
    ));
    for item in items {
        out.push_str(&format!(
            "<li><span class=\"long-label\" style=\"color: {color}\">{}</span><span class=\"joiner\"> for </span><span class=\"value-label\" style=\"color: {color}\">{}</span></li>",
            escape_html(&item.long_label),
            escape_html(&item.value_label),
        ));
    }
    out.push_str("</ul>");
}

fn inline_css() -> &'static str {
    "body{font-family:sans-serif;margin:24px;}\
     #scenario-dropdown{width:50%;font-size:16px;}\
     #scenario-info{line-height:2;margin:16px 0;}\
     .prediction{font-size:18px;}\
     .factor-heading{font-weight:bold;font-size:16px;}\
     .long-label{font-weight:bold;}\
     .joiner{color:#888;}\
     .value-label{font-style:italic;}\
     .no-data{color:#888;}"
}

fn inline_javascript() -> &'static str {
    r#"document.getElementById('scenario-dropdown').addEventListener('change', function (event) {
  var instance = event.target.value;
  fetch('/view/' + encodeURIComponent(instance))
    .then(function (response) { return response.ok ? response.text() : null; })
    .then(function (html) {
      if (html === null) { return; }
      document.getElementById('scenario-view').innerHTML = html;
      history.replaceState(null, '', '?scenario=' + encodeURIComponent(instance));
    });
});"#
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
