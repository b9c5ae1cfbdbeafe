//! Core aggregation logic for Penny.
//!
//! This crate owns the merged dashboard view model and the refresh
//! sequencing that keeps it consistent: one primary snapshot fetch composed
//! with per-account enrichment fetches, surviving partial failures and
//! overlapping refreshes.
//!
//! # Modules
//!
//! - `dashboard` - View model, merge rules, and the `DashboardAggregator`

pub mod dashboard;

pub use dashboard::{
    DashboardAggregator, DashboardError, DashboardViewModel, EnrichmentEntry, EnrichmentStatus,
    Mutation, MutationKind, ViewState,
};
