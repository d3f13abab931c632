use anyhow::Result;
use clap::Parser;
use savanna_core::{init_logging, SimConfig};
use savanna_io::record;
use savanna_lib::runner;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with full simulation parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World record file (six comma-separated integers: width, height,
    /// carnivores, herbivores, obstacles, food)
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 300)]
    ticks: u64,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit the final world snapshot as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Save the effective configuration as the default record for the next
    /// launch
    #[arg(long)]
    remember: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::from_toml(&std::fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };

    // An explicit record wins; otherwise the last remembered one, when
    // present, overrides the built-in population counts.
    match &args.record {
        Some(path) => record::load_record(path)?.apply(&mut config),
        None => match record::load_default_record() {
            Ok(rec) => rec.apply(&mut config),
            Err(err) => {
                tracing::debug!(%err, "No default record, using built-in configuration");
            }
        },
    }

    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    config.validate()?;

    if args.remember {
        record::save_default_record(&record::WorldRecord::from_config(&config))?;
    }

    let (world, report) = runner::run_headless(config, args.ticks)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&world.snapshot())?);
    } else {
        println!(
            "{} ticks in {} ms: {} herbivores, {} carnivores, {} edible food, theme {}",
            report.ticks,
            report.elapsed_ms,
            report.herbivores,
            report.carnivores,
            report.edible_food,
            report.theme
        );
    }
    Ok(())
}
