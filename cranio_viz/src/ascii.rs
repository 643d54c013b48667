/// Equal-width bin edges spanning the sample's range. A constant sample
/// gets one bin padded half a unit either side so it can still be drawn.
pub fn bin_edges(xs: &[f64], bins: usize) -> Vec<f64> {
    if xs.is_empty() || bins == 0 {
        return vec![];
    }
    let min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return vec![];
    }
    if min == max {
        return vec![min - 0.5, max + 0.5];
    }
    let width = (max - min) / (bins as f64);
    let mut edges: Vec<f64> = (0..=bins).map(|i| min + width * (i as f64)).collect();
    // pin the last edge so the maximum always lands in the final bin
    edges[bins] = max;
    edges
}

/// Count samples per bin. Bins are half-open [lo, hi) except the last,
/// which also takes values equal to its upper edge.
pub fn bin_series(xs: &[f64], bin_edges: &[f64]) -> Vec<usize> {
    if bin_edges.len() < 2 {
        return vec![];
    }
    let last = bin_edges.len() - 2;
    let mut counts = vec![0usize; bin_edges.len() - 1];
    for &x in xs {
        for i in 0..=last {
            if x >= bin_edges[i] && x < bin_edges[i + 1] {
                counts[i] += 1;
                break;
            }
            if i == last && x == bin_edges[i + 1] {
                counts[i] += 1;
            }
        }
    }
    counts
}

/// One text line per bin: the bin interval, a bar scaled to `max_width`
/// characters, and the raw count.
pub fn histogram_ascii(xs: &[f64], bin_edges: &[f64], max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    let counts = bin_series(xs, bin_edges);
    if counts.is_empty() {
        return Vec::new();
    }

    let max_count = *counts.iter().max().unwrap_or(&0);
    let mut lines = Vec::with_capacity(counts.len());
    for (i, &c) in counts.iter().enumerate() {
        let bar_len = if max_count == 0 {
            0
        } else {
            (c * max_width) / max_count
        };
        let mut line = format!("[{:>7.1},{:>7.1}): ", bin_edges[i], bin_edges[i + 1]);
        line.push_str(&"#".repeat(bar_len));
        line.push_str(&format!(" ({c})"));
        lines.push(line);
    }
    lines
}
