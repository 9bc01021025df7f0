use anyhow::Context;
use attest_config::AttestConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AttestConfig> {
    let mut config = AttestConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut AttestConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(url) = &flags.url {
        config.client.base_url.clone_from(url);
        config.validate().context("invalid --url")?;
    }
    Ok(())
}
