use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use cranio_data::{load_csv, melt, Column, MeasurementTable};
use cranio_stats::{
    describe, permutation_test_diff_means, probplot_points, t_interval_mean, variance_exceeds,
    welch_t_test, ColumnSummary, WelchTTest,
};
use cranio_viz::{
    bin_edges, boxplot_png, histogram_ascii, histogram_png, probplot_png, GroupSeries,
    ProbPlotPanel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    fn from_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cranio",
    version,
    about = "Two-sample analysis of skull-breadth measurements",
    long_about = "cranio loads a delimited table of skull-breadth measurements,\n\
        summarizes each population, renders distribution charts, and compares\n\
        the population means with Welch's two-sample t-test.\n\n\
        EXAMPLES:\n\
        \n  cranio data/skulls.csv                      Full analysis of a file\n\
        \n  cranio describe data/skulls.csv             Descriptive summaries only\n\
        \n  cranio plot data/skulls.csv --out-dir out   Write histogram/box/Q-Q charts\n\
        \n  cranio test data/skulls.csv --json          Inferential results as JSON"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the full pipeline: preview, describe, charts, inference
    Analyze(AnalyzeArgs),
    /// Print per-column descriptive summaries
    Describe(DescribeArgs),
    /// Render the distribution charts as PNG files
    Plot(PlotArgs),
    /// Run the inferential stage only
    Test(TestArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Path to the measurement csv
    input: PathBuf,

    /// Comma-separated pair of group columns (default: first two columns)
    #[arg(short, long)]
    groups: Option<String>,

    /// Directory for the rendered charts; omitted = no files written
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Histogram bin count
    #[arg(long, default_value_t = 10)]
    bins: usize,

    /// Emit the report as JSON instead of text
    #[arg(short, long)]
    json: bool,
}

#[derive(Debug, Args)]
struct DescribeArgs {
    /// Path to the measurement csv
    input: PathBuf,

    /// Emit the summaries as JSON instead of text
    #[arg(short, long)]
    json: bool,
}

#[derive(Debug, Args)]
struct PlotArgs {
    /// Path to the measurement csv
    input: PathBuf,

    /// Comma-separated pair of group columns (default: first two columns)
    #[arg(short, long)]
    groups: Option<String>,

    /// Directory the PNG files are written into
    #[arg(long)]
    out_dir: PathBuf,

    /// Histogram bin count
    #[arg(long, default_value_t = 10)]
    bins: usize,
}

#[derive(Debug, Args)]
struct TestArgs {
    /// Path to the measurement csv
    input: PathBuf,

    /// Comma-separated pair of group columns (default: first two columns)
    #[arg(short, long)]
    groups: Option<String>,

    /// Also run a permutation test with this many shuffles
    #[arg(long, value_name = "N")]
    permutation: Option<usize>,

    /// Emit the results as JSON instead of text
    #[arg(short, long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GroupReport {
    group: String,
    summary: ColumnSummary,
    interval95: (f64, f64),
}

#[derive(Debug, Serialize)]
struct TestReport {
    group_a: String,
    group_b: String,
    variance_a_exceeds_b: bool,
    welch: WelchTTest,
    #[serde(skip_serializing_if = "Option::is_none")]
    permutation_p: Option<f64>,
}

#[derive(Debug, Serialize)]
struct AnalysisReport {
    source: String,
    rows: usize,
    groups: Vec<GroupReport>,
    test: TestReport,
}

#[derive(Debug, Serialize)]
struct DescribeReport {
    source: String,
    columns: Vec<ColumnEntry>,
}

#[derive(Debug, Serialize)]
struct ColumnEntry {
    column: String,
    summary: ColumnSummary,
}

#[derive(Debug, Tabled)]
struct DescribeRow {
    column: String,
    count: usize,
    mean: String,
    std: String,
    min: String,
    #[tabled(rename = "25%")]
    q25: String,
    #[tabled(rename = "50%")]
    median: String,
    #[tabled(rename = "75%")]
    q75: String,
    max: String,
}

impl DescribeRow {
    fn from_summary(column: &str, s: &ColumnSummary) -> Self {
        let f = |v: f64| format!("{v:.3}");
        Self {
            column: column.to_string(),
            count: s.count,
            mean: f(s.mean),
            std: f(s.std),
            min: f(s.min),
            q25: f(s.q25),
            median: f(s.median),
            q75: f(s.q75),
            max: f(s.max),
        }
    }
}

fn selected_groups<'a>(
    table: &'a MeasurementTable,
    spec: &Option<String>,
) -> Result<(&'a Column, &'a Column), String> {
    match spec {
        Some(s) => {
            let names: Vec<&str> = s.split(',').map(str::trim).filter(|p| !p.is_empty()).collect();
            if names.len() != 2 {
                return Err(format!(
                    "--groups needs exactly two comma-separated column names, got '{s}'"
                ));
            }
            let a = table
                .column(names[0])
                .ok_or_else(|| format!("column '{}' not present in the table", names[0]))?;
            let b = table
                .column(names[1])
                .ok_or_else(|| format!("column '{}' not present in the table", names[1]))?;
            Ok((a, b))
        }
        None => {
            let cols = table.columns();
            if cols.len() < 2 {
                return Err(format!(
                    "need at least two columns to compare, file has {}",
                    cols.len()
                ));
            }
            Ok((&cols[0], &cols[1]))
        }
    }
}

fn describe_table(table: &MeasurementTable) -> String {
    let rows: Vec<DescribeRow> = table
        .columns()
        .iter()
        .map(|c| DescribeRow::from_summary(&c.name, &describe(&c.non_missing())))
        .collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

fn build_test_report(
    a: &Column,
    b: &Column,
    permutation: Option<usize>,
) -> TestReport {
    let va = a.non_missing();
    let vb = b.non_missing();
    TestReport {
        group_a: a.name.clone(),
        group_b: b.name.clone(),
        variance_a_exceeds_b: variance_exceeds(&va, &vb),
        welch: welch_t_test(&va, &vb),
        permutation_p: permutation.map(|n| permutation_test_diff_means(&va, &vb, n)),
    }
}

fn print_test_report(a: &Column, b: &Column, report: &TestReport, permutation: Option<usize>) {
    let (lo_a, hi_a) = t_interval_mean(&a.non_missing(), 0.95);
    let (lo_b, hi_b) = t_interval_mean(&b.non_missing(), 0.95);

    println!(
        "var({}) > var({}): {}",
        report.group_a, report.group_b, report.variance_a_exceeds_b
    );
    println!(
        "95% t-interval for mean({}): ({lo_a:.4}, {hi_a:.4})",
        report.group_a
    );
    println!(
        "95% t-interval for mean({}): ({lo_b:.4}, {hi_b:.4})",
        report.group_b
    );
    println!(
        "Welch two-sample t-test ({} vs {}): t = {:.4}, df = {:.2}, p = {:.4e}",
        report.group_a, report.group_b, report.welch.t_stat, report.welch.df, report.welch.p_value
    );
    if let (Some(n), Some(p)) = (permutation, report.permutation_p) {
        println!("permutation test ({n} shuffles): p = {p:.4}");
    }
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{s}");
            0
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            2
        }
    }
}

fn render_charts(
    table: &MeasurementTable,
    a: &Column,
    b: &Column,
    bins: usize,
    out_dir: &Path,
) -> i32 {
    if let Err(e) = fs::create_dir_all(out_dir) {
        eprintln!(
            "error: failed to create output directory '{}': {e}",
            out_dir.display()
        );
        return 2;
    }

    let long = melt(table);
    let series: Vec<GroupSeries> = [a, b]
        .iter()
        .map(|c| GroupSeries::new(c.name.clone(), long.group_sizes(&c.name)))
        .collect();

    let hist = out_dir.join("histogram.png");
    if let Err(e) = histogram_png(&series, bins, &hist) {
        eprintln!("error: failed to render histogram: {e}");
        return 2;
    }
    info!("wrote '{}'", hist.display());

    let boxp = out_dir.join("boxplot.png");
    if let Err(e) = boxplot_png(&series, &boxp) {
        eprintln!("error: failed to render box plot: {e}");
        return 2;
    }
    info!("wrote '{}'", boxp.display());

    let panels: Vec<ProbPlotPanel> = [a, b]
        .iter()
        .map(|c| {
            let pp = probplot_points(&c.non_missing());
            ProbPlotPanel {
                title: c.name.clone(),
                points: pp.points,
                slope: pp.slope,
                intercept: pp.intercept,
            }
        })
        .collect();
    let prob = out_dir.join("probplot.png");
    if let Err(e) = probplot_png(&panels, &prob) {
        eprintln!("error: failed to render probability plot: {e}");
        return 2;
    }
    info!("wrote '{}'", prob.display());

    println!(
        "charts written to '{}': histogram.png, boxplot.png, probplot.png",
        out_dir.display()
    );
    0
}

fn run_analyze(args: &AnalyzeArgs) -> i32 {
    let table = match load_csv(&args.input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let (a, b) = match selected_groups(&table, &args.groups) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let mode = OutputMode::from_flag(args.json);
    match mode {
        OutputMode::Text => {
            println!("{}", table.head(5));
            println!("{}", describe_table(&table));

            let long = melt(&table);
            for name in [&a.name, &b.name] {
                let values = long.group_sizes(name);
                let edges = bin_edges(&values, args.bins);
                println!("\n{name}:");
                for line in histogram_ascii(&values, &edges, 40) {
                    println!("  {line}");
                }
            }
            println!();

            let report = build_test_report(a, b, None);
            print_test_report(a, b, &report, None);
        }
        OutputMode::Json => {
            let report = AnalysisReport {
                source: args.input.display().to_string(),
                rows: table.n_rows(),
                groups: [a, b]
                    .iter()
                    .map(|c| {
                        let values = c.non_missing();
                        GroupReport {
                            group: c.name.clone(),
                            summary: describe(&values),
                            interval95: t_interval_mean(&values, 0.95),
                        }
                    })
                    .collect(),
                test: build_test_report(a, b, None),
            };
            let code = print_json(&report);
            if code != 0 {
                return code;
            }
        }
    }

    // charts render only after the numbers are out
    if let Some(out_dir) = &args.out_dir {
        return render_charts(&table, a, b, args.bins, out_dir);
    }
    0
}

fn run_describe(args: &DescribeArgs) -> i32 {
    let table = match load_csv(&args.input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    match OutputMode::from_flag(args.json) {
        OutputMode::Text => {
            println!("{}", describe_table(&table));
            0
        }
        OutputMode::Json => {
            let report = DescribeReport {
                source: args.input.display().to_string(),
                columns: table
                    .columns()
                    .iter()
                    .map(|c| ColumnEntry {
                        column: c.name.clone(),
                        summary: describe(&c.non_missing()),
                    })
                    .collect(),
            };
            print_json(&report)
        }
    }
}

fn run_plot(args: &PlotArgs) -> i32 {
    let table = match load_csv(&args.input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let (a, b) = match selected_groups(&table, &args.groups) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    render_charts(&table, a, b, args.bins, &args.out_dir)
}

fn run_test(args: &TestArgs) -> i32 {
    let table = match load_csv(&args.input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let (a, b) = match selected_groups(&table, &args.groups) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let report = build_test_report(a, b, args.permutation);
    match OutputMode::from_flag(args.json) {
        OutputMode::Text => {
            print_test_report(a, b, &report, args.permutation);
            0
        }
        OutputMode::Json => print_json(&report),
    }
}

/// A bare file path is shorthand for `analyze <path>`.
fn normalize_cli_args(args: Vec<OsString>) -> Vec<OsString> {
    if args.len() <= 1 {
        return args;
    }
    let first = args[1].to_string_lossy();
    let is_known_subcommand = matches!(
        first.as_ref(),
        "analyze" | "describe" | "plot" | "test" | "help" | "--help" | "-h" | "--version" | "-V"
    );
    if is_known_subcommand || first.starts_with('-') {
        return args;
    }

    let mut out: Vec<OsString> = Vec::with_capacity(args.len() + 1);
    out.push(args[0].clone());
    out.push(OsString::from("analyze"));
    out.extend(args.into_iter().skip(1));
    out
}

fn normalized_cli_args() -> Vec<OsString> {
    normalize_cli_args(std::env::args_os().collect())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run_cli() -> i32 {
    let cli = Cli::parse_from(normalized_cli_args());
    init_logging(cli.verbose);

    match &cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Describe(args) => run_describe(args),
        Command::Plot(args) => run_plot(args),
        Command::Test(args) => run_test(args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
