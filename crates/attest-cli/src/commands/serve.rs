use std::sync::Arc;

use anyhow::Context;
use attest_config::{AttestConfig, ServerConfig};
use attest_server::ChecklistServer;
use attest_store::ChecklistStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;

/// Handle `attest serve`.
pub async fn handle(args: &ServeArgs, config: &AttestConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let server_config = server_config(args, &config.server);
    let store = if config.general.seed_on_startup {
        ChecklistStore::seeded()
    } else {
        ChecklistStore::new()
    };

    let server = ChecklistServer::bind(&server_config, Arc::new(store))
        .await
        .context("failed to start checklist service")?;
    if !flags.quiet {
        eprintln!("attest listening on http://{}", server.local_addr()?);
    }
    server.run().await?;
    Ok(())
}

fn server_config(args: &ServeArgs, base: &ServerConfig) -> ServerConfig {
    let mut config = base.clone();
    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flags_override_configured_bind_address() {
        let args = ServeArgs {
            host: Some("0.0.0.0".into()),
            port: Some(9000),
        };
        let config = server_config(&args, &ServerConfig::default());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origins, ServerConfig::default().cors_origins);
    }

    #[test]
    fn absent_flags_keep_config() {
        let args = ServeArgs {
            host: None,
            port: None,
        };
        let base = ServerConfig {
            port: 7070,
            ..ServerConfig::default()
        };
        assert_eq!(server_config(&args, &base).port, 7070);
    }
}
