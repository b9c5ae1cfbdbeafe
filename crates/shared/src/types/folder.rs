//! Folder domain types.

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::id::FolderId;

/// A folder grouping a set of accounts.
///
/// The nested `accounts` list is only populated in the dashboard snapshot;
/// the plain folder listing returns an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Folder ID.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Icon glyph shown next to the name.
    #[serde(default)]
    pub icon: String,
    /// Number of accounts owned by this folder.
    #[serde(default)]
    pub account_count: u32,
    /// Accounts owned by this folder (dashboard snapshot only).
    #[serde(default)]
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_listing_shape() {
        let json = r#"{
            "id": 1,
            "name": "Essentials",
            "description": "Basic living expenses",
            "icon": "🏠",
            "account_count": 2
        }"#;

        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.id, FolderId::new(1));
        assert_eq!(folder.account_count, 2);
        assert!(folder.accounts.is_empty());
    }

    #[test]
    fn test_folder_snapshot_shape_nests_accounts() {
        let json = r#"{
            "id": 3,
            "name": "Lifestyle",
            "icon": "🍽️",
            "accounts": [{
                "id": 7,
                "name": "Dining Out",
                "type": "expense",
                "folder_id": 3,
                "health_status": "healthy"
            }]
        }"#;

        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.accounts.len(), 1);
        assert_eq!(folder.accounts[0].folder_id, folder.id);
    }
}
