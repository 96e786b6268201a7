//! Console entry point.

fn main() -> anyhow::Result<()> {
    acme_observability::init();

    let config = acme_console::DemoConfig::from_env()?;
    tracing::info!(currency = %config.currency, "starting procurement walkthrough");

    let stdout = std::io::stdout();
    acme_console::run(&config, &mut stdout.lock())
}
