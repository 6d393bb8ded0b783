use std::collections::HashMap;

use crate::model::record::ScenarioRecord;

#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<ScenarioRecord>,
    instances: Vec<i64>,
    rows_by_instance: HashMap<i64, Vec<usize>>,
}

impl Dataset {
    pub fn from_records(records: Vec<ScenarioRecord>) -> Self {
        let mut instances = Vec::new();
        let mut rows_by_instance: HashMap<i64, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            let rows = rows_by_instance.entry(record.instance).or_default();
            if rows.is_empty() {
                instances.push(record.instance);
            }
            rows.push(idx);
        }
        Self {
            records,
            instances,
            rows_by_instance,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn instances(&self) -> &[i64] {
        &self.instances
    }

    pub fn first_instance(&self) -> Option<i64> {
        self.instances.first().copied()
    }

    pub fn contains(&self, instance: i64) -> bool {
        self.rows_by_instance.contains_key(&instance)
    }

    pub fn records_for(&self, instance: i64) -> impl Iterator<Item = &ScenarioRecord> + '_ {
        self.rows_by_instance
            .get(&instance)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.records[idx])
    }
}
