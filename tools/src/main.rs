//! projection-runner: headless runner for the longevity what-if projection.
//!
//! Usage:
//!   projection-runner --seed 12345 --years 50
//!   projection-runner --config scenario.json --black-swan-event-type pandemic --format json
//!   projection-runner --config scenario.json --format csv --output records.csv

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use longevity_core::{
    report, AdaptationRate, BlackSwanKind, Projection, SimulationConfig,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "projection-runner",
    version,
    about = "Project population, longevity and workforce metrics year by year",
    allow_negative_numbers = true
)]
struct Cli {
    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Master seed for the breakthrough draw.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long)]
    population: Option<f64>,
    #[arg(long)]
    life_expectancy: Option<f64>,
    #[arg(long)]
    retirement_age: Option<f64>,
    /// Percent chance per year, 0..=100.
    #[arg(long)]
    longevity_breakthrough_probability: Option<f64>,
    /// Years added to life expectancy by the breakthrough.
    #[arg(long)]
    longevity_breakthrough_impact: Option<f64>,
    #[arg(long)]
    healthcare_expenditure_per_capita: Option<f64>,
    #[arg(long)]
    years: Option<u32>,
    /// Annual growth in percent.
    #[arg(long)]
    economic_growth_rate: Option<f64>,
    /// low | medium | high
    #[arg(long)]
    societal_adaptation_rate: Option<AdaptationRate>,
    #[arg(long)]
    workforce_adaptation_rate: Option<AdaptationRate>,
    #[arg(long)]
    infrastructure_readiness: Option<AdaptationRate>,
    #[arg(long)]
    legal_framework_adaptation: Option<AdaptationRate>,
    /// none | pandemic | worldWar | economicCollapse | ai_singularity | climate_disaster
    #[arg(long)]
    black_swan_event_type: Option<BlackSwanKind>,
    #[arg(long)]
    black_swan_event_year: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Record table followed by the narrative insights.
    Text,
    /// Config, records and structured insights.
    Json,
    /// Records only.
    Csv,
}

#[derive(Serialize)]
struct RunReport<'a> {
    config: &'a SimulationConfig,
    #[serde(flatten)]
    projection: &'a Projection,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    log::info!(
        "running projection: seed={} years=0..={} black_swan={}@{}",
        cli.seed,
        config.years,
        config.black_swan_event_type,
        config.black_swan_event_year
    );
    let projection = longevity_core::run(config.clone(), cli.seed)?;

    let rendered = match cli.format {
        OutputFormat::Text => render_text(&config, &projection, cli.seed),
        OutputFormat::Json => {
            let report = RunReport { config: &config, projection: &projection };
            serde_json::to_string_pretty(&report)? + "\n"
        }
        OutputFormat::Csv => render_csv(&projection)?,
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Cannot write {}", path.display()))?;
            log::info!("wrote {} records to {}", projection.records.len(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Start from the config file (or defaults) and apply flag overrides.
fn build_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    override_with(&mut config.population, cli.population);
    override_with(&mut config.life_expectancy, cli.life_expectancy);
    override_with(&mut config.retirement_age, cli.retirement_age);
    override_with(
        &mut config.longevity_breakthrough_probability,
        cli.longevity_breakthrough_probability,
    );
    override_with(
        &mut config.longevity_breakthrough_impact,
        cli.longevity_breakthrough_impact,
    );
    override_with(
        &mut config.healthcare_expenditure_per_capita,
        cli.healthcare_expenditure_per_capita,
    );
    override_with(&mut config.years, cli.years);
    override_with(&mut config.economic_growth_rate, cli.economic_growth_rate);
    override_with(&mut config.societal_adaptation_rate, cli.societal_adaptation_rate);
    override_with(&mut config.workforce_adaptation_rate, cli.workforce_adaptation_rate);
    override_with(&mut config.infrastructure_readiness, cli.infrastructure_readiness);
    override_with(&mut config.legal_framework_adaptation, cli.legal_framework_adaptation);
    override_with(&mut config.black_swan_event_type, cli.black_swan_event_type);
    override_with(&mut config.black_swan_event_year, cli.black_swan_event_year);

    config.validate()?;
    Ok(config)
}

fn override_with<T>(field: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *field = v;
    }
}

fn render_text(config: &SimulationConfig, projection: &Projection, seed: u64) -> String {
    let black_swan = if config.black_swan_event_type.is_none() {
        "none".to_string()
    } else {
        format!(
            "{} @ year {}",
            config.black_swan_event_type.event().name,
            config.black_swan_event_year
        )
    };
    let breakthrough = projection
        .breakthrough_year()
        .map(|y| format!("year {y}"))
        .unwrap_or_else(|| "did not occur".to_string());

    let mut out = String::new();
    out.push_str("Longevity what-if projection\n");
    out.push_str(&format!("  seed:          {seed}\n"));
    out.push_str(&format!("  years:         0..={}\n", config.years));
    out.push_str(&format!("  black swan:    {black_swan}\n"));
    out.push_str(&format!("  breakthrough:  {breakthrough}\n"));
    out.push('\n');
    out.push_str("=== YEARLY PROJECTION ===\n");
    out.push_str(&report::render_table(&projection.records));
    out.push('\n');
    out.push_str("=== INSIGHTS ===\n");
    out.push_str(&report::render_insights(&projection.insights));
    out.push('\n');
    out
}

fn render_csv(projection: &Projection) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in &projection.records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Cannot flush CSV output: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}
