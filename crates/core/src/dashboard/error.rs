//! Dashboard aggregation error types.

use thiserror::Error;

use penny_client::ApiError;
use penny_shared::types::AccountId;

use super::types::MutationKind;

/// Errors surfaced by the dashboard aggregator.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A user ID must be non-empty.
    #[error("User id must not be empty")]
    EmptyUserId,

    /// The primary snapshot fetch failed; fatal to that refresh round.
    ///
    /// Previously loaded data stays in place; the caller may retry.
    #[error("Dashboard snapshot unavailable: {0}")]
    SnapshotUnavailable(#[source] ApiError),

    /// One account's enrichment fetch failed.
    ///
    /// Soft: only that account's insight card degrades; sibling fetches and
    /// the overall refresh continue.
    #[error("Insight enrichment failed for account {0}")]
    EnrichmentFailed(AccountId),

    /// A write was rejected; the caller must not assume state changed.
    #[error("Rejected {kind} mutation")]
    MutationRejected {
        /// What the mutation would have created.
        kind: MutationKind,
        /// HTTP status, when the backend produced one.
        status: Option<u16>,
    },
}
