use crate::model::scenario::ScenarioView;

pub fn render_view_json(view: &ScenarioView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}
