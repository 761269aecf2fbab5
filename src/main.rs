use anyhow::Context;
use clap::Parser;
use femo_sampler::{
    build_generator, trim_session, ConfigManager, CsvConnector, SampleGenerator, Strategy, Stream,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "femo-sampler")]
#[command(version)]
#[command(about = "Cut annotated sensor recordings into labeled training windows", long_about = None)]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Strategy override: 1/event-centered, 2/tiling, 3/shifted
    #[arg(long)]
    strategy: Option<String>,

    /// Random seed override for negative sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Sampling rate override (samples per second)
    #[arg(long)]
    rate: Option<usize>,

    /// Keep session edges instead of trimming them
    #[arg(long)]
    no_trim: bool,

    /// Write the generation report as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// CSV recordings, one session per file
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let manager = ConfigManager::new();
    match &cli.config {
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => manager.load_from_env()?,
    }

    let strategy = cli.strategy.as_deref().map(str::parse::<Strategy>).transpose()?;
    manager.update(|c| {
        if let Some(strategy) = strategy {
            c.sampling.strategy = strategy;
        }
        if let Some(seed) = cli.seed {
            c.sampling.seed = Some(seed);
        }
        if let Some(rate) = cli.rate {
            c.sampling.sampling_rate = rate;
        }
    })?;
    let config = manager.get();

    let streams = cli
        .inputs
        .iter()
        .map(|path| {
            CsvConnector::load_stream(path, config.sampling.sampling_rate)
                .with_context(|| format!("loading {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<Stream>>>()?;

    for stream in &streams {
        let metadata = CsvConnector::create_metadata(stream);
        log::info!(
            "Session {}: {} samples ({:.1}s), {} events, channels {:?}",
            metadata.session_key,
            metadata.num_samples,
            metadata.duration_secs,
            metadata.event_count,
            metadata.channels
        );
    }

    let streams: Vec<Stream> = if cli.no_trim {
        streams
    } else {
        let margin = config.sampling.trim_samples();
        streams.iter().map(|s| trim_session(s, margin)).collect()
    };

    let generator = build_generator(&config.sampling)?;
    log::info!(
        "Running {} strategy over {} sessions",
        generator.name(),
        streams.len()
    );

    let generation = generator.generate(&streams)?;
    let selector = config.features.selector()?;
    let samples = selector.to_sample_set(&generation.windows)?;
    let (features, labels) = samples.to_arrays()?;

    if let Some(path) = &cli.report {
        std::fs::write(path, serde_json::to_string_pretty(&generation.report)?)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    println!("Strategy: {}", generator.name());
    println!("Sessions: {}", streams.len());
    println!("Positives: {}", samples.positives());
    println!("Negatives: {}", samples.negatives());
    println!("Feature array shape: {:?}", features.dim());
    println!("Label count: {}", labels.len());
    if generation.report.dropped_by_cap > 0 {
        println!("Dropped by cap: {}", generation.report.dropped_by_cap);
    }
    if generation.report.total_shortfall() > 0 {
        println!("Quota shortfall: {}", generation.report.total_shortfall());
    }

    Ok(())
}
