use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::table::{Column, MeasurementTable};

/// Errors raised while reading a measurement file. All of these are fatal:
/// nothing is returned past the first bad token, so no partial table can
/// leak into the analysis.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("input file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed header: {0}")]
    Header(String),

    #[error("line {line}, column '{column}': '{value}' is not a number")]
    Parse {
        line: usize,
        column: String,
        value: String,
    },

    #[error("line {line}: expected at most {expected} fields, got {got}")]
    Row {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("column '{0}' not present in the table")]
    MissingColumn(String),
}

impl MeasurementTable {
    /// Like [`MeasurementTable::column`] but failing with
    /// [`DataError::MissingColumn`], for callers that need the column.
    pub fn require_column(&self, name: &str) -> Result<&Column, DataError> {
        self.column(name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }
}

/// Read a comma-separated measurement file into a [`MeasurementTable`].
///
/// The first line is a header naming the columns; selection downstream is by
/// name, never by position. An empty cell is a missing value (the shorter
/// population is padded with them in the source format). Any non-empty cell
/// that does not parse as a number aborts the load.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<MeasurementTable, DataError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let names = validate_header(&headers)?;
    let mut columns: Vec<Column> = names
        .into_iter()
        .map(|n| Column::new(n, Vec::new()))
        .collect();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = idx + 2; // 1-based, after the header
        if record.len() > columns.len() {
            let extras_blank = record.iter().skip(columns.len()).all(|c| c.is_empty());
            if !extras_blank {
                return Err(DataError::Row {
                    line,
                    expected: columns.len(),
                    got: record.len(),
                });
            }
        }
        for (i, column) in columns.iter_mut().enumerate() {
            let cell = record.get(i).unwrap_or("");
            if cell.is_empty() {
                column.values.push(None);
            } else {
                let value = cell.parse::<f64>().map_err(|_| DataError::Parse {
                    line,
                    column: column.name.clone(),
                    value: cell.to_string(),
                })?;
                column.values.push(Some(value));
            }
        }
    }

    let table = MeasurementTable::new(columns);
    debug!(
        "loaded {} columns x {} rows from '{}'",
        table.n_columns(),
        table.n_rows(),
        path.display()
    );
    Ok(table)
}

fn validate_header(headers: &csv::StringRecord) -> Result<Vec<String>, DataError> {
    if headers.is_empty() {
        return Err(DataError::Header("empty header row".to_string()));
    }
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(headers.len());
    for name in headers.iter() {
        if name.is_empty() {
            return Err(DataError::Header("unnamed column".to_string()));
        }
        if !seen.insert(name) {
            return Err(DataError::Header(format!("duplicate column '{name}'")));
        }
        names.push(name.to_string());
    }
    Ok(names)
}
