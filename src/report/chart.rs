//! Horizontal bar chart rendered as inline SVG.
//!
//! Bars stack bottom-to-top in view order, so a view sorted ascending shows the
//! strongest risk factor at the top and the strongest protective one at the bottom.

use std::fmt::Write;

use crate::model::ranking::RankingMode;
use crate::model::scenario::ScenarioView;
use crate::model::score_type::ScoreType;
use crate::report::{escape_html, score_type_color};

pub const CHART_WIDTH: f64 = 1100.0;
pub const CHART_HEIGHT: f64 = 600.0;

const PLOT_LEFT: f64 = 280.0;
const PLOT_RIGHT: f64 = 960.0;
const PLOT_TOP: f64 = 70.0;
const PLOT_BOTTOM: f64 = 530.0;
const X_TICKS: usize = 5;

pub fn chart_title(view: &ScenarioView) -> String {
    match view.mode {
        RankingMode::TopTen => format!("Top 10 Influential Factors for {}", view.label),
        RankingMode::Full => format!("Influential Factors for {}", view.label),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScoreAxis {
    lo: f64,
    hi: f64,
}

impl ScoreAxis {
    fn for_scores(scores: impl Iterator<Item = f64>) -> Self {
        let mut lo = 0.0f64;
        let mut hi = 0.0f64;
        for s in scores {
            lo = lo.min(s);
            hi = hi.max(s);
        }
        if hi - lo <= f64::EPSILON {
            return Self { lo: -1.0, hi: 1.0 };
        }
        let pad = (hi - lo) * 0.05;
        Self {
            lo: if lo < 0.0 { lo - pad } else { lo },
            hi: if hi > 0.0 { hi + pad } else { hi },
        }
    }

    fn x(&self, v: f64) -> f64 {
        PLOT_LEFT + (v - self.lo) / (self.hi - self.lo) * (PLOT_RIGHT - PLOT_LEFT)
    }
}

pub fn render_bar_chart(view: &ScenarioView) -> String {
    let axis = ScoreAxis::for_scores(view.features.iter().map(|f| f.score));
    let title = escape_html(&chart_title(view));
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="factor-chart" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{title}">"#,
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
    );
    out.push_str(r#"<rect x="0" y="0" width="100%" height="100%" fill="white"/>"#);
    let _ = write!(
        out,
        r#"<text class="chart-title" x="{:.1}" y="36" font-size="18">{}</text>"#,
        PLOT_LEFT, title
    );

    push_x_axis(&mut out, &axis);
    push_bars(&mut out, view, &axis);
    push_legend(&mut out, view);

    out.push_str("</svg>");
    out
}

fn push_x_axis(out: &mut String, axis: &ScoreAxis) {
    for k in 0..X_TICKS {
        let v = axis.lo + (axis.hi - axis.lo) * k as f64 / (X_TICKS - 1) as f64;
        let x = axis.x(v);
        let _ = write!(
            out,
            r##"<line x1="{x:.1}" y1="{bottom:.1}" x2="{x:.1}" y2="{tick:.1}" stroke="#444"/><text x="{x:.1}" y="{label:.1}" font-size="12" text-anchor="middle">{v:.2}</text>"##,
            bottom = PLOT_BOTTOM,
            tick = PLOT_BOTTOM + 6.0,
            label = PLOT_BOTTOM + 22.0,
        );
    }
    let _ = write!(
        out,
        r##"<line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="#444"/>"##,
        l = PLOT_LEFT,
        r = PLOT_RIGHT,
        b = PLOT_BOTTOM,
    );
    let zero = axis.x(0.0);
    let _ = write!(
        out,
        r##"<line class="zero-line" x1="{zero:.1}" y1="{t:.1}" x2="{zero:.1}" y2="{b:.1}" stroke="#888"/>"##,
        t = PLOT_TOP,
        b = PLOT_BOTTOM,
    );
    let _ = write!(
        out,
        r#"<text class="axis-title" x="{:.1}" y="{:.1}" font-size="14" text-anchor="middle">Impact</text>"#,
        (PLOT_LEFT + PLOT_RIGHT) / 2.0,
        PLOT_BOTTOM + 50.0
    );
    let mid_y = (PLOT_TOP + PLOT_BOTTOM) / 2.0;
    let _ = write!(
        out,
        r#"<text class="axis-title" x="24" y="{mid_y:.1}" font-size="14" text-anchor="middle" transform="rotate(-90 24 {mid_y:.1})">Factors</text>"#,
    );
}

fn push_bars(out: &mut String, view: &ScenarioView, axis: &ScoreAxis) {
    if view.features.is_empty() {
        return;
    }
    let band = (PLOT_BOTTOM - PLOT_TOP) / view.features.len() as f64;
    let zero = axis.x(0.0);

    for (i, f) in view.features.iter().enumerate() {
        let slot_top = PLOT_BOTTOM - (i as f64 + 1.0) * band;
        let mid = slot_top + band / 2.0;
        let end = axis.x(f.score);
        let (left, width) = if end < zero {
            (end, zero - end)
        } else {
            (zero, end - zero)
        };
        let class = match f.score_type {
            ScoreType::Risk => "bar bar-risk",
            ScoreType::Protective => "bar bar-protective",
        };
        let feature = escape_html(&f.feature);

        let _ = write!(
            out,
            r#"<rect class="{class}" x="{left:.1}" y="{y:.1}" width="{width:.1}" height="{h:.1}" fill="{fill}"><title>{feature}: {score}</title></rect>"#,
            y = slot_top + band * 0.15,
            h = band * 0.7,
            fill = score_type_color(f.score_type),
            score = crate::report::format_score(f.score),
        );
        let _ = write!(
            out,
            r#"<text class="feature-label" x="{x:.1}" y="{mid:.1}" font-size="12" text-anchor="end" dominant-baseline="middle">{feature}</text>"#,
            x = PLOT_LEFT - 8.0,
        );
        let (text_x, anchor) = if f.score < 0.0 {
            (end - 4.0, "end")
        } else {
            (end + 4.0, "start")
        };
        let _ = write!(
            out,
            r#"<text class="value-label" x="{text_x:.1}" y="{mid:.1}" font-size="11" text-anchor="{anchor}" dominant-baseline="middle">{}</text>"#,
            escape_html(&f.value_label),
        );
    }
}

fn push_legend(out: &mut String, view: &ScenarioView) {
    let mut seen: Vec<ScoreType> = Vec::new();
    for f in &view.features {
        if !seen.contains(&f.score_type) {
            seen.push(f.score_type);
        }
    }
    if seen.is_empty() {
        return;
    }
    let x = PLOT_RIGHT + 30.0;
    let _ = write!(
        out,
        r#"<text class="legend-title" x="{x:.1}" y="{y:.1}" font-size="14">Type</text>"#,
        y = PLOT_TOP + 10.0,
    );
    for (i, score_type) in seen.iter().enumerate() {
        let y = PLOT_TOP + 30.0 + i as f64 * 22.0;
        let _ = write!(
            out,
            r#"<rect class="legend-swatch" x="{x:.1}" y="{y:.1}" width="14" height="14" fill="{}"/><text x="{tx:.1}" y="{ty:.1}" font-size="12">{}</text>"#,
            score_type_color(*score_type),
            score_type.as_str(),
            tx = x + 20.0,
            ty = y + 12.0,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/chart.rs"]
mod tests;
