use clap::Parser;
use macropulse::preferences::parse_weight_override;
use macropulse::{OutputFormat, Overrides, PreferenceStore, RunOptions, init_logging, run};
use macropulse_core::questions::QuestionId;
use macropulse_core::{ScenarioId, WeightCategory};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "macropulse")]
#[command(about = "Macro indicator dashboard: composite score, regime and scenarios")]
struct Args {
    /// Path to the data directory (default: ~/.macropulse/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Directory of <series>.json files (default: <data-dir>/series)
    #[arg(short, long)]
    series_dir: Option<PathBuf>,

    /// Directory consulted when a series file is missing or unusable
    #[arg(long)]
    fallback_dir: Option<PathBuf>,

    /// Weight override as name=value, e.g. growth=1.5 (repeatable)
    #[arg(short, long = "weight", value_parser = parse_weight_override)]
    weights: Vec<(WeightCategory, f64)>,

    /// Enable a scenario, e.g. oil_shock (repeatable)
    #[arg(long = "scenario")]
    scenarios: Vec<ScenarioId>,

    /// Disable a scenario, including one saved earlier (repeatable)
    #[arg(long = "no-scenario")]
    no_scenarios: Vec<ScenarioId>,

    /// Switch off every saved scenario before applying --scenario
    #[arg(long)]
    clear_scenarios: bool,

    /// Add a deep dive for one question, e.g. inflation_trend
    #[arg(short, long)]
    question: Option<QuestionId>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Number of drivers to list
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Persist the effective weights and scenarios
    #[arg(long)]
    save_preferences: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(PreferenceStore::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let series_dir = args.series_dir.unwrap_or_else(|| data_dir.join("series"));
    let mut options = RunOptions::new(series_dir);
    if let Some(fallback) = args.fallback_dir {
        options.sources = options.sources.with_fallback(fallback);
    }
    options.overrides = Overrides {
        weights: args.weights,
        enable: args.scenarios,
        disable: args.no_scenarios,
        clear_scenarios: args.clear_scenarios,
    };
    options.question = args.question;
    options.format = args.format;
    options.top = args.top;
    options.save_preferences = args.save_preferences;

    let store = PreferenceStore::new(data_dir);
    let report = run(&store, &options)?;
    print!("{report}");

    tracing::info!("Refresh complete");
    Ok(())
}
