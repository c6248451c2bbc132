use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use logrot::{ArchiveReaper, RotateConfig, Rotator};

#[derive(Parser, Debug)]
#[command(name = "logrot")]
#[command(version, about = "Compress aged log files and purge expired archives")]
struct Args {
    /// Directory where the logs are located
    #[arg(short, long)]
    directory: PathBuf,

    /// File pattern to process (glob, e.g. "*.log")
    #[arg(short, long)]
    pattern: String,

    /// Age in days (by last modified date) past which a file is archived
    #[arg(short, long, default_value_t = 1.0)]
    interval: f64,

    /// Age in days past which an archived file is deleted
    #[arg(short, long, default_value_t = 100.0)]
    threshold: f64,

    /// Remove files after archiving
    #[arg(short, long)]
    remove: bool,

    /// Print debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = RotateConfig::new(args.directory, args.pattern);
    config.interval_days = args.interval;
    config.threshold_days = args.threshold;
    config.remove_source = args.remove;

    let rotate_stats = Rotator::new(config.clone()).run_once()?;
    info!("rotate pass: {}", rotate_stats.summary());

    let reap_stats = ArchiveReaper::new(config).run_once()?;
    info!("reap pass: {}", reap_stats.summary());

    Ok(())
}
