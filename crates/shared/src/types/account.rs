//! Account domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{AccountId, FolderId};

/// Account categories supported by the backend (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Day-to-day checking account.
    Checking,
    /// Recurring bill account.
    Bill,
    /// Discretionary expense account.
    Expense,
    /// Savings goal with a target amount and deadline.
    Goal,
    /// General savings account.
    Savings,
    /// Investment account.
    Investment,
}

impl AccountType {
    /// Returns the wire representation of this account type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Bill => "bill",
            Self::Expense => "expense",
            Self::Goal => "goal",
            Self::Savings => "savings",
            Self::Investment => "investment",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget health, derived server-side from budget utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Spending is comfortably within budget.
    Healthy,
    /// Utilization is approaching the budget ceiling.
    Warning,
    /// Spending has exceeded the monthly budget.
    OverBudget,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::OverBudget => "over_budget",
        };
        f.write_str(label)
    }
}

/// A single account as returned by the backend.
///
/// `budget_utilization` and `health_status` are computed server-side; the
/// client only renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Account category.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Owning folder.
    pub folder_id: FolderId,
    /// Optional monthly budget (zero when unset).
    #[serde(default)]
    pub monthly_budget: Decimal,
    /// Target amount for goal accounts (zero when unset).
    #[serde(default)]
    pub target_amount: Decimal,
    /// Deadline for goal accounts.
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    /// Current balance.
    #[serde(default)]
    pub current_balance: Decimal,
    /// Budget utilization percentage (server-derived).
    #[serde(default)]
    pub budget_utilization: Decimal,
    /// Budget health (server-derived).
    pub health_status: HealthStatus,
    /// Number of recorded transactions.
    #[serde(default)]
    pub transaction_count: u32,
}

impl Account {
    /// Returns `true` if a monthly budget is set.
    #[must_use]
    pub fn has_budget(&self) -> bool {
        !self.monthly_budget.is_zero()
    }

    /// Returns `true` if this is a goal account with a target.
    #[must_use]
    pub fn has_goal(&self) -> bool {
        self.account_type == AccountType::Goal && !self.target_amount.is_zero()
    }
}
