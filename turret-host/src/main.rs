use anyhow::Context;
use turret_host::configs::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::new().context("Failed to load settings")?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = settings.logger.level.as_str();

            format!("turret_host={level},turret_embedded={level}").into()
        }))
        .init();

    turret_host::run(&settings)
}
