use attest_config::AttestConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &AttestConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config, flags).await,
        Commands::List => commands::checklist::list(config, flags).await,
        Commands::Show { id } => commands::checklist::show(id, config, flags).await,
        Commands::Progress { id } => commands::checklist::progress(id, config, flags).await,
        Commands::SetStatus(args) => commands::checklist::set_status(&args, config, flags).await,
    }
}
