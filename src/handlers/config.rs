use anyhow::Result;

use crate::config::Config;
use crate::domain::Ui;
use crate::infrastructure::EnvironmentProvider;

pub fn handle_config(provider: &EnvironmentProvider, ui: &mut dyn Ui) -> Result<()> {
    let config = provider.load_config()?;
    print_config(&config, ui);
    Ok(())
}

fn print_config(config: &Config, ui: &mut dyn Ui) {
    ui.output("Current Configuration:");
    ui.output(&format!("  Address: {}", config.address));
    ui.output(&format!("  Token: {}", config.masked_token()));
    ui.output(&format!(
        "  Namespace: {}",
        config.namespace.as_deref().unwrap_or("(none)")
    ));
    ui.output(&format!("  Timeout: {} seconds", config.timeout.as_secs()));
    ui.output(&format!("  TLS Skip Verify: {}", config.tls_skip_verify));
}
