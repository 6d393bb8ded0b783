use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::model::dataset::Dataset;
use crate::model::ranking::RankingMode;
use crate::report::html::render_page;
use crate::report::json::render_view_json;
use crate::report::text::render_view_text;
use crate::view::build_view;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_reports(
    dataset: &Dataset,
    mode: RankingMode,
    out_dir: &Path,
    only: Option<i64>,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;

    let instances: Vec<i64> = match only {
        Some(instance) => {
            if !dataset.contains(instance) {
                warn!("scenario {} not present in input; writing an empty report", instance);
            }
            vec![instance]
        }
        None => dataset.instances().to_vec(),
    };

    let mut written = Vec::with_capacity(instances.len() * 2 + 1);
    for &instance in &instances {
        let view = build_view(dataset, instance, mode);

        let json_path = out_dir.join(format!("scenario_{}.json", instance));
        write_text(&json_path, &render_view_json(&view)?)?;
        written.push(json_path);

        let text_path = out_dir.join(format!("scenario_{}.txt", instance));
        write_text(&text_path, &render_view_text(&view))?;
        written.push(text_path);
    }

    if let Some(&first) = instances.first() {
        let view = build_view(dataset, first, mode);
        let index_path = out_dir.join("index.html");
        write_text(&index_path, &render_page(dataset, &view))?;
        written.push(index_path);
    }

    info!(
        "wrote {} report files to {}",
        written.len(),
        out_dir.display()
    );
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/write.rs"]
mod tests;
