//! Rendering backends for the cranio toolkit.
//!
//! Two ways to look at the same distributions: [`histogram_ascii`] for a
//! quick terminal readout, and the plotters-based PNG charts
//! ([`histogram_png`], [`boxplot_png`], [`probplot_png`]) for figures.
//! Rendering failures never carry statistical meaning; they surface as
//! [`PlotError`] and leave the numbers untouched.

mod ascii;
mod chart;

pub use ascii::*;
pub use chart::*;
