//! Tabular primitives for the cranio toolkit.
//!
//! The crate covers the data end of the pipeline: reading a delimited
//! measurement file into a [`MeasurementTable`] (one named column per
//! population, empty cells marking missing values) and unpivoting that wide
//! table into a [`LongTable`] of (group, size) observations for group-wise
//! plotting.
//!
//! Loading and selecting columns:
//! ```ignore
//! use cranio_data::{load_csv, melt};
//! let table = load_csv("data/skulls.csv")?;
//! let etruscans = table.require_column("Etruscans")?.non_missing();
//! let long = melt(&table);
//! assert_eq!(long.len(), table.columns().iter().map(|c| c.count_non_missing()).sum());
//! ```

mod load;
mod reshape;
mod table;

pub use load::*;
pub use reshape::*;
pub use table::*;
