//! The `DashboardApi` seam and its wire shapes.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use penny_shared::types::{
    Account, AccountId, AccountType, Folder, FolderId, InsightBundle, InsightGroup, Transaction,
    UserId,
};

use crate::error::ApiResult;

// ============================================================================
// Response Shapes
// ============================================================================

/// The primary dashboard snapshot.
///
/// `folders` carry their accounts nested; `accounts` is the same set
/// flattened; `total_insights` is the backend's pick of insight cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Folders with nested accounts.
    pub folders: Vec<Folder>,
    /// Flat list of all accounts.
    pub accounts: Vec<Account>,
    /// Dashboard-level insight bundles.
    #[serde(default)]
    pub total_insights: Vec<InsightGroup>,
}

/// Per-account enrichment response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountInsights {
    /// The insight payload; empty object when the account has no data yet.
    #[serde(default)]
    pub insights: InsightBundle,
}

// ============================================================================
// Mutation Payloads
// ============================================================================

/// Payload for creating a folder.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewFolder {
    /// Display name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Icon glyph.
    pub icon: String,
}

/// Payload for creating an account.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewAccount {
    /// Display name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Account category.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Owning folder.
    pub folder_id: FolderId,
    /// Monthly budget, when the account is budgeted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<Decimal>,
    /// Target amount (goal accounts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<Decimal>,
    /// Deadline (goal accounts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Opening balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<Decimal>,
}

/// Payload for creating a transaction.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewTransaction {
    /// Signed amount (negative = expense).
    pub amount: Decimal,
    /// Human-readable description.
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    /// Target account.
    pub account_id: AccountId,
    /// Optional category label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// When the transaction happened; the backend defaults to "now".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
}

// ============================================================================
// The API seam
// ============================================================================

/// Operations the aggregator needs from the backend.
///
/// Implementations must fail (rather than hang) within a bounded time; the
/// aggregator imposes no timeout of its own.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /api/{user}/dashboard` - the primary snapshot.
    async fn fetch_dashboard(&self, user: &UserId) -> ApiResult<DashboardSnapshot>;

    /// `GET /api/{user}/accounts/{account}/insights` - per-account enrichment.
    async fn fetch_account_insights(
        &self,
        user: &UserId,
        account: AccountId,
    ) -> ApiResult<AccountInsights>;

    /// `GET /api/{user}/accounts` - flat account listing for selection lists.
    async fn list_accounts(&self, user: &UserId) -> ApiResult<Vec<Account>>;

    /// `GET /api/{user}/folders` - folder listing for selection lists.
    async fn list_folders(&self, user: &UserId) -> ApiResult<Vec<Folder>>;

    /// `GET /api/{user}/accounts/{account}/transactions` - account history.
    async fn list_account_transactions(
        &self,
        user: &UserId,
        account: AccountId,
    ) -> ApiResult<Vec<Transaction>>;

    /// `POST /api/{user}/folders` - create a folder.
    async fn create_folder(&self, user: &UserId, folder: &NewFolder) -> ApiResult<()>;

    /// `POST /api/{user}/accounts` - create an account.
    async fn create_account(&self, user: &UserId, account: &NewAccount) -> ApiResult<()>;

    /// `POST /api/{user}/transactions` - record a transaction.
    async fn create_transaction(
        &self,
        user: &UserId,
        transaction: &NewTransaction,
    ) -> ApiResult<()>;
}
