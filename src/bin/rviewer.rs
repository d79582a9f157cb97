use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use rviewer::{InitSettings, Scene, demo};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rviewer", version)]
struct Cli {
    /// Demo scene to stream.
    #[arg(value_enum)]
    demo: DemoChoice,

    /// Output file; the stream goes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON file with scene settings overriding the demo's own.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print frame and line counters as JSON on stderr when done.
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DemoChoice {
    /// Alignment chart.
    Align,
    /// Easing lanes tweened across frames.
    InBetweens,
    /// Greedy channel selection.
    Channels,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the protocol; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let overrides = match &cli.settings {
        Some(path) => InitSettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => InitSettings::default(),
    };

    let scene = match &cli.out {
        Some(path) => Scene::create(path)?,
        None => Scene::stdout(),
    };

    match cli.demo {
        DemoChoice::Align => demo::alignment(&scene, &overrides),
        DemoChoice::InBetweens => demo::in_betweens(&scene, &overrides),
        DemoChoice::Channels => demo::channels(&scene, &overrides),
    }
    .with_context(|| format!("build demo {:?}", cli.demo))?;

    let stats = scene.finish().context("finish scene stream")?;
    if cli.stats {
        eprintln!("{}", serde_json::to_string(&stats)?);
    }
    Ok(())
}
