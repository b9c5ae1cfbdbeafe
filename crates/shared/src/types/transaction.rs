//! Transaction domain types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{AccountId, TransactionId};

/// A recorded transaction.
///
/// Amounts are signed: negative values are expenses, positive values income.
/// Transactions are immutable once created; the client never edits or
/// deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID (assigned server-side).
    pub id: TransactionId,
    /// Signed amount.
    pub amount: Decimal,
    /// Human-readable description.
    pub description: String,
    /// Optional category label.
    #[serde(default)]
    pub category: Option<String>,
    /// When the transaction happened.
    pub date: NaiveDateTime,
    /// Account this transaction belongs to.
    pub account_id: AccountId,
    /// When the record was created server-side.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Transaction {
    /// Returns `true` if this transaction is an expense.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_transaction_deserializes_backend_shape() {
        let json = r#"{
            "id": 11,
            "amount": -42.75,
            "description": "Weekly groceries",
            "category": "food",
            "date": "2026-08-20T18:45:00",
            "account_id": 1,
            "created_at": "2026-08-20T18:45:02"
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.id, TransactionId::new(11));
        assert_eq!(txn.amount, dec!(-42.75));
        assert_eq!(txn.account_id, AccountId::new(1));
        assert!(txn.is_expense());
    }

    #[test]
    fn test_income_is_not_expense() {
        let json = r#"{
            "id": 12,
            "amount": 1500,
            "description": "Paycheck",
            "date": "2026-08-01T09:00:00",
            "account_id": 4
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(!txn.is_expense());
        assert!(txn.category.is_none());
    }
}
