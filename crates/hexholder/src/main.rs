//! Prints the layout report for the default hex wrench holder.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hexholder::holder::HolderLayout;
use hexholder::{presets, report};

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let wrenches = presets::default_wrench_set();
    let parameters = presets::default_parameters();
    info!(
        wrenches = wrenches.len(),
        "computing layout with {:?}", parameters
    );

    let layout = HolderLayout::compute(&wrenches, &parameters)
        .context("failed to compute holder layout")?;

    print!("{}", report::render_report(&layout));
    Ok(())
}
