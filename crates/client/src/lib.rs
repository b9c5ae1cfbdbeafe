//! Backend API client for Penny.
//!
//! The backend is an external collaborator reached over HTTP with JSON
//! bodies. This crate defines the [`DashboardApi`] seam the aggregator
//! depends on, the request/response wire shapes, and the reqwest-backed
//! implementation.

pub mod api;
pub mod error;
pub mod http;

pub use api::{AccountInsights, DashboardApi, DashboardSnapshot, NewAccount, NewFolder, NewTransaction};
pub use error::{ApiError, ApiResult};
pub use http::HttpDashboardApi;
