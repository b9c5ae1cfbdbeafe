//! Dashboard aggregation: snapshot + enrichment merging and refresh rounds.

pub mod error;
pub mod merge;
pub mod service;
pub mod types;

pub use error::DashboardError;
pub use service::{DashboardAggregator, ENRICHMENT_LIMIT};
pub use types::{
    DashboardViewModel, EnrichmentEntry, EnrichmentStatus, Mutation, MutationKind, ViewState,
};
