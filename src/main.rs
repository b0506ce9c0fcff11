use anyhow::Context;
use clap::Parser;
use log::info;
use texture_stats::{batch, report, scan, Args, Config};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::try_from(args)?;

    // RUST_LOG still wins over the -v/-q flags
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    info!("🎨 texture-stats v{}", env!("CARGO_PKG_VERSION"));

    let files = scan::discover(&config.input_dir, config.extensions.as_slice(), config.recursive)
        .context("file discovery failed")?;

    let outcome = batch::run_batch(&files, config.jobs).context("batch analysis failed")?;

    report::write_report(&outcome.records, &config.output)
        .with_context(|| format!("could not save results to {}", config.output.display()))?;

    Ok(())
}
