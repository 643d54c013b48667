use std::path::Path;

use log::debug;
use plotters::prelude::*;
use thiserror::Error;

use crate::ascii::{bin_edges, bin_series};

/// Errors that can occur while rendering a chart. Purely cosmetic from the
/// analysis's point of view: a failed render never invalidates the numbers.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// A named sample of measurements to plot.
#[derive(Debug, Clone)]
pub struct GroupSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl GroupSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// One panel of a normal probability plot: precomputed Q-Q points and the
/// fitted line. See `cranio_stats::probplot_points` for the computation.
#[derive(Debug, Clone)]
pub struct ProbPlotPanel {
    pub title: String,
    /// (theoretical quantile, ordered sample value) pairs, ascending.
    pub points: Vec<(f64, f64)>,
    pub slope: f64,
    pub intercept: f64,
}

fn check_groups(groups: &[GroupSeries]) -> Result<()> {
    if groups.is_empty() {
        return Err(PlotError::InvalidData("no groups to plot".to_string()));
    }
    for g in groups {
        if g.values.is_empty() {
            return Err(PlotError::InvalidData(format!(
                "group '{}' has no values",
                g.label
            )));
        }
    }
    Ok(())
}

/// Render one histogram per group, faceted side by side, `bins` equal-width
/// bins per group, as a single PNG.
pub fn histogram_png(groups: &[GroupSeries], bins: usize, output_path: &Path) -> Result<()> {
    check_groups(groups)?;
    if bins == 0 {
        return Err(PlotError::InvalidData("bins must be positive".to_string()));
    }

    let root = BitMapBackend::new(output_path, (560 * groups.len() as u32, 480))
        .into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let panels = root.split_evenly((1, groups.len()));

    for (area, group) in panels.iter().zip(groups) {
        let edges = bin_edges(&group.values, bins);
        let counts = bin_series(&group.values, &edges);
        if counts.is_empty() {
            return Err(PlotError::InvalidData(format!(
                "group '{}' produced no bins",
                group.label
            )));
        }
        let y_max = counts.iter().max().copied().unwrap_or(0) as u32 + 1;
        let (x_lo, x_hi) = (edges[0], *edges.last().unwrap());

        let mut chart = ChartBuilder::on(area)
            .caption(&group.label, ("sans-serif", 28))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_lo..x_hi, 0u32..y_max)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("size")
            .y_desc("count")
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series(counts.iter().enumerate().map(|(i, &c)| {
                Rectangle::new(
                    [(edges[i], 0u32), (edges[i + 1], c as u32)],
                    BLUE.mix(0.45).filled(),
                )
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    debug!("wrote histogram chart to '{}'", output_path.display());
    Ok(())
}

/// Render the size distribution per group as horizontal box-and-whisker
/// plots on a single axes, one row per group label.
pub fn boxplot_png(groups: &[GroupSeries], output_path: &Path) -> Result<()> {
    check_groups(groups)?;

    let root = BitMapBackend::new(output_path, (900, 160 + 120 * groups.len() as u32))
        .into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let all_min = groups
        .iter()
        .flat_map(|g| g.values.iter().cloned())
        .fold(f64::INFINITY, f64::min);
    let all_max = groups
        .iter()
        .flat_map(|g| g.values.iter().cloned())
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = ((all_max - all_min) * 0.05).max(1.0);
    let (x_lo, x_hi) = ((all_min - pad) as f32, (all_max + pad) as f32);

    let quartiles: Vec<Quartiles> = groups.iter().map(|g| Quartiles::new(&g.values)).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("size by group", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(
            x_lo..x_hi,
            // integer ranges are end-inclusive, so n groups span 0..n-1
            (0u32..groups.len() as u32 - 1).into_segmented(),
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("size")
        .y_label_formatter(&|v| match v {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => groups
                .get(*i as usize)
                .map(|g| g.label.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(quartiles.iter().enumerate().map(|(i, q)| {
            Boxplot::new_horizontal(SegmentValue::CenterOf(i as u32), q)
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    debug!("wrote box plot to '{}'", output_path.display());
    Ok(())
}

/// Render normal probability plots side by side, one panel per group, each
/// titled with its group name, sample points plus the fitted line.
pub fn probplot_png(panels: &[ProbPlotPanel], output_path: &Path) -> Result<()> {
    if panels.is_empty() {
        return Err(PlotError::InvalidData("no panels to plot".to_string()));
    }
    for p in panels {
        if p.points.is_empty() {
            return Err(PlotError::InvalidData(format!(
                "panel '{}' has no points",
                p.title
            )));
        }
    }

    let root = BitMapBackend::new(output_path, (560 * panels.len() as u32, 480))
        .into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let areas = root.split_evenly((1, panels.len()));

    for (area, panel) in areas.iter().zip(panels) {
        let x_lo = panel.points.first().map(|p| p.0).unwrap_or(-1.0);
        let x_hi = panel.points.last().map(|p| p.0).unwrap_or(1.0);
        let y_lo = panel
            .points
            .iter()
            .map(|p| p.1)
            .fold(f64::INFINITY, f64::min);
        let y_hi = panel
            .points
            .iter()
            .map(|p| p.1)
            .fold(f64::NEG_INFINITY, f64::max);
        let x_pad = ((x_hi - x_lo) * 0.05).max(0.1);
        let y_pad = ((y_hi - y_lo) * 0.05).max(0.5);

        let mut chart = ChartBuilder::on(area)
            .caption(
                format!("Probability plot = {}", panel.title),
                ("sans-serif", 24),
            )
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(55)
            .build_cartesian_2d(x_lo - x_pad..x_hi + x_pad, y_lo - y_pad..y_hi + y_pad)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("theoretical quantiles")
            .y_desc("ordered values")
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        if panel.slope.is_finite() && panel.intercept.is_finite() {
            let line = [x_lo - x_pad, x_hi + x_pad]
                .map(|x| (x, panel.intercept + panel.slope * x));
            chart
                .draw_series(LineSeries::new(line, &RED))
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }

        chart
            .draw_series(
                panel
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    debug!(
        "wrote probability plot to '{}'",
        output_path.display()
    );
    Ok(())
}
