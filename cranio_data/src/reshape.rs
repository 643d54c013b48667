use crate::table::MeasurementTable;

/// One (group, size) pair of the long table. Sizes are integers after the
/// reshape: the wide table stores floats only to carry missingness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub group: String,
    pub size: i64,
}

/// The unpivoted table used for group-wise plotting. No row has a missing
/// size and every group label names a wide column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongTable {
    rows: Vec<Observation>,
}

impl LongTable {
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct group labels in first-seen order.
    pub fn groups(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !out.contains(&row.group.as_str()) {
                out.push(&row.group);
            }
        }
        out
    }

    /// All sizes recorded for `group`, in row order, as floats for the
    /// statistics and plotting layers.
    pub fn group_sizes(&self, group: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|r| r.group == group)
            .map(|r| r.size as f64)
            .collect()
    }
}

/// Unpivot a wide table into (group, size) rows: one row per non-missing
/// cell, group label taken from the column name, groups concatenated in
/// column order.
pub fn melt(table: &MeasurementTable) -> LongTable {
    let mut rows = Vec::new();
    for column in table.columns() {
        for value in column.values.iter().flatten() {
            rows.push(Observation {
                group: column.name.clone(),
                size: *value as i64,
            });
        }
    }
    LongTable { rows }
}
