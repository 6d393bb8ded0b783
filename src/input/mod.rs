use std::io::BufRead;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

pub mod fields;
pub mod reader;

use fields::split_fields;
use reader::open_maybe_gz;

use crate::model::dataset::Dataset;
use crate::model::record::ScenarioRecord;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "instance",
    "feature",
    "score",
    "value_label",
    "long_label",
    "predicted",
    "predicted_score",
];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("header line is not valid CSV")]
    MalformedHeader,
    #[error("missing column `{0}` in header")]
    MissingColumn(&'static str),
    #[error("input contains no usable rows")]
    Empty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_skipped: usize,
}

#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    instance: usize,
    feature: usize,
    score: usize,
    value_label: usize,
    long_label: usize,
    predicted: usize,
    predicted_score: usize,
    width: usize,
}

impl ColumnMap {
    fn from_header(header: &[String]) -> Result<Self, InputError> {
        let names: Vec<String> = header
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_ascii_lowercase())
            .collect();
        let mut idx = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = names
                .iter()
                .position(|n| n == name)
                .ok_or(InputError::MissingColumn(name))?;
        }
        let [
            instance,
            feature,
            score,
            value_label,
            long_label,
            predicted,
            predicted_score,
        ] = idx;
        Ok(Self {
            instance,
            feature,
            score,
            value_label,
            long_label,
            predicted,
            predicted_score,
            width: names.len(),
        })
    }
}

pub fn load_dataset(path: &Path) -> Result<Dataset, InputError> {
    let reader = open_maybe_gz(path)?;
    let (records, stats) = read_records(reader)?;
    info!(
        "read {} rows from {}: {} kept, {} skipped",
        stats.rows_read,
        path.display(),
        stats.rows_kept,
        stats.rows_skipped
    );
    let dataset = Dataset::from_records(records);
    info!(
        "{} records across {} scenarios",
        dataset.len(),
        dataset.instances().len()
    );
    Ok(dataset)
}

pub fn read_records<R: BufRead>(
    mut reader: R,
) -> Result<(Vec<ScenarioRecord>, LoadStats), InputError> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut columns: Option<ColumnMap> = None;
    let mut records = Vec::new();
    let mut stats = LoadStats::default();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let decoded = std::str::from_utf8(&buf);
        let line = match decoded {
            Ok(text) => text.trim_end_matches(['\r', '\n']),
            Err(_) if columns.is_none() => return Err(InputError::MalformedHeader),
            Err(err) => {
                stats.rows_read += 1;
                stats.rows_skipped += 1;
                warn!("skipping line {}: invalid UTF-8 ({})", line_no, err);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some(map) = columns else {
            let header = split_fields(line).map_err(|_| InputError::MalformedHeader)?;
            let map = ColumnMap::from_header(&header)?;
            debug!("header columns: {}", header.join(","));
            columns = Some(map);
            continue;
        };

        stats.rows_read += 1;
        match parse_row(line, &map) {
            Ok(record) => {
                records.push(record);
                stats.rows_kept += 1;
            }
            Err(reason) => {
                warn!("skipping line {}: {}", line_no, reason);
                stats.rows_skipped += 1;
            }
        }
    }

    if records.is_empty() {
        return Err(InputError::Empty);
    }
    Ok((records, stats))
}

fn parse_row(line: &str, map: &ColumnMap) -> Result<ScenarioRecord, String> {
    let fields = split_fields(line).map_err(str::to_string)?;
    if fields.len() != map.width {
        return Err(format!(
            "expected {} fields, found {}",
            map.width,
            fields.len()
        ));
    }

    let instance = parse_instance(&fields[map.instance])
        .ok_or_else(|| format!("invalid instance `{}`", fields[map.instance]))?;
    let score = fields[map.score]
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid score `{}`", fields[map.score]))?;
    let predicted_score = fields[map.predicted_score].trim().parse::<f64>().ok();

    Ok(ScenarioRecord {
        instance,
        feature: fields[map.feature].clone(),
        score,
        value_label: fields[map.value_label].clone(),
        long_label: fields[map.long_label].clone(),
        predicted: fields[map.predicted].clone(),
        predicted_score,
    })
}

fn parse_instance(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
