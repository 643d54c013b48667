use statrs::distribution::{ContinuousCDF, Normal};

/// Support for a normal probability (Q-Q) plot: the ordered sample paired
/// with theoretical standard-normal quantiles, plus the least-squares line
/// through the points.
#[derive(Debug, Clone)]
pub struct ProbPlot {
    /// (theoretical quantile, ordered sample value) pairs, ascending.
    pub points: Vec<(f64, f64)>,
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation of the points; near 1 for normal-looking data.
    pub r: f64,
}

/// Compute Q-Q points for a sample against the standard normal, using
/// Filliben's plotting positions for the order statistics. Fewer than two
/// points leave the fitted line undefined (NaN).
pub fn probplot_points(xs: &[f64]) -> ProbPlot {
    let n = xs.len();
    if n == 0 {
        return ProbPlot {
            points: Vec::new(),
            slope: f64::NAN,
            intercept: f64::NAN,
            r: f64::NAN,
        };
    }

    let mut ordered = xs.to_vec();
    ordered.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let normal = Normal::new(0.0, 1.0).unwrap();
    let nf = n as f64;
    let points: Vec<(f64, f64)> = ordered
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let rank = i + 1;
            let p = if rank == 1 {
                1.0 - 0.5f64.powf(1.0 / nf)
            } else if rank == n {
                0.5f64.powf(1.0 / nf)
            } else {
                ((rank as f64) - 0.3175) / (nf + 0.365)
            };
            (normal.inverse_cdf(p), y)
        })
        .collect();

    let (slope, intercept, r) = fit_line(&points);
    ProbPlot {
        points,
        slope,
        intercept,
        r,
    }
}

fn fit_line(points: &[(f64, f64)]) -> (f64, f64, f64) {
    let n = points.len() as f64;
    if points.len() < 2 {
        return (f64::NAN, f64::NAN, f64::NAN);
    }
    let mx = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let my = points.iter().map(|(_, y)| y).sum::<f64>() / n;
    let sxx = points.iter().map(|(x, _)| (x - mx).powi(2)).sum::<f64>();
    let syy = points.iter().map(|(_, y)| (y - my).powi(2)).sum::<f64>();
    let sxy = points
        .iter()
        .map(|(x, y)| (x - mx) * (y - my))
        .sum::<f64>();
    if sxx == 0.0 || syy == 0.0 {
        return (f64::NAN, f64::NAN, f64::NAN);
    }
    let slope = sxy / sxx;
    let intercept = my - slope * mx;
    let r = sxy / (sxx * syy).sqrt();
    (slope, intercept, r)
}
