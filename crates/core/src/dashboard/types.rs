//! Dashboard view model types.

use std::collections::HashMap;

use serde::Serialize;

use penny_client::api::{NewAccount, NewFolder, NewTransaction};
use penny_shared::types::{Account, AccountId, Folder, InsightBundle, InsightGroup};

use super::error::DashboardError;

/// Fetch status of one account's enrichment data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStatus {
    /// A fetch is in flight (or queued) for the current round.
    Pending,
    /// The latest fetch succeeded and `insights` holds its payload.
    Ok,
    /// The latest fetch failed; `insights` keeps any earlier payload.
    Failed,
}

/// Enrichment data and fetch status for one account.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichmentEntry {
    /// Outcome of the most recent fetch.
    pub status: EnrichmentStatus,
    /// Insight payload from the most recent successful fetch, if any.
    pub insights: Option<InsightBundle>,
}

impl EnrichmentEntry {
    /// A fresh entry awaiting its first result.
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            status: EnrichmentStatus::Pending,
            insights: None,
        }
    }
}

/// The merged dashboard view model.
///
/// Presentation consumers read this; they never mutate it directly.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    /// Folders with nested accounts.
    pub folders: Vec<Folder>,
    /// Flat list of all accounts, in snapshot order.
    pub accounts: Vec<Account>,
    /// Dashboard-level insight bundles from the snapshot.
    pub total_insights: Vec<InsightGroup>,
    /// Per-account enrichment data keyed by account ID.
    ///
    /// Never contains an entry for an account absent from `accounts`.
    pub enrichment: HashMap<AccountId, EnrichmentEntry>,
}

impl DashboardViewModel {
    /// Returns soft per-account failures from the latest enrichment round.
    #[must_use]
    pub fn failed_enrichments(&self) -> Vec<DashboardError> {
        let mut failed: Vec<AccountId> = self
            .enrichment
            .iter()
            .filter(|(_, entry)| entry.status == EnrichmentStatus::Failed)
            .map(|(id, _)| *id)
            .collect();
        failed.sort_unstable();
        failed
            .into_iter()
            .map(DashboardError::EnrichmentFailed)
            .collect()
    }

    /// Checks the view model invariants: every enrichment entry refers to a
    /// listed account, and every listed account appears exactly once under
    /// its owning folder.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let listed: std::collections::HashSet<AccountId> =
            self.accounts.iter().map(|a| a.id).collect();

        if !self.enrichment.keys().all(|id| listed.contains(id)) {
            return false;
        }

        self.accounts.iter().all(|account| {
            let appearances = self
                .folders
                .iter()
                .flat_map(|folder| &folder.accounts)
                .filter(|nested| nested.id == account.id)
                .count();
            appearances == 1
        })
    }
}

/// Whether a dashboard has been loaded yet.
#[derive(Debug, Clone, Default, Serialize)]
pub enum ViewState {
    /// No snapshot has ever been applied.
    #[default]
    Unloaded,
    /// A snapshot is loaded; enrichment may still be in flight.
    Loaded(DashboardViewModel),
}

impl ViewState {
    /// Returns the view model, if one is loaded.
    #[must_use]
    pub fn view(&self) -> Option<&DashboardViewModel> {
        match self {
            Self::Unloaded => None,
            Self::Loaded(view) => Some(view),
        }
    }

    /// Returns `true` once a snapshot has been applied.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// The kind of entity a mutation creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Folder creation.
    Folder,
    /// Account creation.
    Account,
    /// Transaction creation.
    Transaction,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Folder => "folder",
            Self::Account => "account",
            Self::Transaction => "transaction",
        };
        f.write_str(label)
    }
}

/// A write the user asked for, delegated to the backend as-is.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Create a folder.
    Folder(NewFolder),
    /// Create an account.
    Account(NewAccount),
    /// Record a transaction.
    Transaction(NewTransaction),
}

impl Mutation {
    /// Returns the kind of entity this mutation creates.
    #[must_use]
    pub const fn kind(&self) -> MutationKind {
        match self {
            Self::Folder(_) => MutationKind::Folder,
            Self::Account(_) => MutationKind::Account,
            Self::Transaction(_) => MutationKind::Transaction,
        }
    }
}
