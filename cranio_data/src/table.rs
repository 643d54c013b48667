use std::fmt::Write as _;

/// A single named column of measurements. Missing cells are `None`; values
/// are held as `f64` so a column can carry missingness without a separate
/// mask, mirroring the source file format.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The column's values with missing cells dropped, in row order.
    pub fn non_missing(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }

    pub fn count_non_missing(&self) -> usize {
        self.values.iter().flatten().count()
    }
}

/// The wide measurement table: one column per population, columns may differ
/// in (non-missing) length. Built once by the loader and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementTable {
    columns: Vec<Column>,
}

impl MeasurementTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by header name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of stored rows (length of the longest column, missing cells
    /// included).
    pub fn n_rows(&self) -> usize {
        self.columns.iter().map(|c| c.values.len()).max().unwrap_or(0)
    }

    /// A plain-text preview of the first `n` rows, headers included.
    pub fn head(&self, n: usize) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.name.len().max(9))
            .collect();

        let mut out = String::new();
        for (col, w) in self.columns.iter().zip(&widths) {
            let _ = write!(out, "{:>w$}  ", col.name, w = w);
        }
        out.push('\n');

        for row in 0..n.min(self.n_rows()) {
            for (col, w) in self.columns.iter().zip(&widths) {
                match col.values.get(row).copied().flatten() {
                    Some(v) => {
                        let _ = write!(out, "{:>w$}  ", v, w = w);
                    }
                    None => {
                        let _ = write!(out, "{:>w$}  ", "", w = w);
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}
