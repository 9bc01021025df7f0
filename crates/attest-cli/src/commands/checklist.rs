use anyhow::Context;
use attest_client::ChecklistClient;
use attest_config::AttestConfig;
use attest_core::enums::ChecklistItemStatus;
use attest_core::ids::{ChecklistId, ItemId};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SetStatusArgs;
use crate::output::output;

fn client(config: &AttestConfig) -> anyhow::Result<ChecklistClient> {
    ChecklistClient::from_config(&config.client).context("failed to build service client")
}

/// Handle `attest list`.
pub async fn list(config: &AttestConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let checklists = client(config)?.list_checklists().await?;
    output(&checklists, flags.format)
}

/// Handle `attest show <id>`.
pub async fn show(id: i64, config: &AttestConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let checklist = client(config)?
        .get_checklist(ChecklistId(id))
        .await
        .with_context(|| format!("failed to fetch checklist {id}"))?;
    output(&checklist, flags.format)
}

/// Handle `attest progress <id>`.
pub async fn progress(id: i64, config: &AttestConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = client(config)?
        .get_progress(ChecklistId(id))
        .await
        .with_context(|| format!("failed to fetch progress for checklist {id}"))?;
    output(&summary, flags.format)
}

/// Handle `attest set-status <checklist> <item> <status>`.
pub async fn set_status(
    args: &SetStatusArgs,
    config: &AttestConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status: ChecklistItemStatus = args
        .status
        .parse()
        .with_context(|| format!("invalid status '{}'", args.status))?;

    let item = client(config)?
        .update_item_status(
            ChecklistId(args.checklist),
            ItemId(args.item),
            status,
            args.evidence(),
        )
        .await
        .with_context(|| {
            format!(
                "failed to update item {} of checklist {}",
                args.item, args.checklist
            )
        })?;
    output(&item, flags.format)
}
