use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the checklist HTTP service.
    Serve(ServeArgs),
    /// List all checklists.
    List,
    /// Show one checklist with its items.
    Show {
        /// Checklist ID.
        id: i64,
    },
    /// Show completion progress for a checklist.
    Progress {
        /// Checklist ID.
        id: i64,
    },
    /// Set the status of a checklist item.
    SetStatus(SetStatusArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port).
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct SetStatusArgs {
    /// Checklist ID.
    pub checklist: i64,

    /// Item ID.
    pub item: i64,

    /// New status: pending, passed, failed, not-applicable.
    pub status: String,

    /// Evidence reference; repeat to attach several. Omit to keep existing evidence.
    #[arg(short, long)]
    pub evidence: Vec<String>,

    /// Clear all evidence on the item.
    #[arg(long, conflicts_with = "evidence")]
    pub clear_evidence: bool,
}

impl SetStatusArgs {
    /// Evidence to send: `None` keeps what the item has.
    #[must_use]
    pub fn evidence(&self) -> Option<Vec<String>> {
        if self.clear_evidence {
            Some(Vec::new())
        } else if self.evidence.is_empty() {
            None
        } else {
            Some(self.evidence.clone())
        }
    }
}
