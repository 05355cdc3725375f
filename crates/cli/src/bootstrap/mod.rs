use dnsreq_domain::{CliOverrides, Config};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Installs the global subscriber. Events go to stderr so stdout carries
/// only the query result.
///
/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.level).map_err(|e| {
            anyhow::anyhow!("Invalid log level '{}': {}", config.logging.level, e)
        })?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    Ok(())
}
