//! Listprobe CLI - runs the container mutability probe sequence

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use listprobe_core::application::run_probes;
use listprobe_core::port::ConsoleSink;

#[derive(Parser)]
#[command(name = "listprobe")]
#[command(about = "Demonstrates mutability semantics of three list flavors", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Debug instrumentation only; the default filter keeps stderr clean so
    // the probe's caught-failure lines are the only error-stream output
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("listprobe=warn"))
        .expect("Failed to create env filter");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(version = listprobe_core::VERSION, "starting probe run");

    let mut sink = ConsoleSink;
    run_probes(&mut sink);

    Ok(())
}
