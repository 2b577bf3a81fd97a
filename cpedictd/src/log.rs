use anyhow::Context;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize logging, bridging `log` records into `tracing`.
pub fn init_log() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("error initializing logging")?;

    Ok(())
}
