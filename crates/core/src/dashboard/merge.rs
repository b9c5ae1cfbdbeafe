//! Pure merge rules for the dashboard view model.
//!
//! All functions here are synchronous and free of I/O; the aggregator calls
//! them inside its critical section so each merge commits indivisibly.

use std::collections::HashMap;

use penny_client::api::DashboardSnapshot;
use penny_shared::types::{AccountId, InsightBundle};

use super::types::{DashboardViewModel, EnrichmentEntry, EnrichmentStatus, ViewState};

/// Builds a fresh view model from a snapshot, carrying enrichment data over
/// from the previous state.
///
/// Enrichment entries for accounts no longer present are dropped. Accounts in
/// `pending` (the targets of the follow-up enrichment round) are marked
/// pending, keeping any carried-over payload visible while the fetch runs.
#[must_use]
pub fn apply_snapshot(
    previous: &ViewState,
    snapshot: DashboardSnapshot,
    pending: &[AccountId],
) -> DashboardViewModel {
    let mut enrichment: HashMap<AccountId, EnrichmentEntry> = HashMap::new();

    if let Some(previous) = previous.view() {
        for account in &snapshot.accounts {
            if let Some(entry) = previous.enrichment.get(&account.id) {
                enrichment.insert(account.id, entry.clone());
            }
        }
    }

    for id in pending {
        enrichment
            .entry(*id)
            .and_modify(|entry| entry.status = EnrichmentStatus::Pending)
            .or_insert_with(EnrichmentEntry::pending);
    }

    DashboardViewModel {
        folders: snapshot.folders,
        accounts: snapshot.accounts,
        total_insights: snapshot.total_insights,
        enrichment,
    }
}

/// Records a successful enrichment fetch for one account.
///
/// Ignored when the account is not in the current accounts list, so the
/// enrichment map never gains entries for unknown accounts.
pub fn apply_enrichment_success(
    view: &mut DashboardViewModel,
    account: AccountId,
    insights: InsightBundle,
) {
    if !view.accounts.iter().any(|a| a.id == account) {
        return;
    }
    view.enrichment.insert(
        account,
        EnrichmentEntry {
            status: EnrichmentStatus::Ok,
            insights: Some(insights),
        },
    );
}

/// Records a failed enrichment fetch for one account.
///
/// Flips the status to failed but leaves any previously stored payload
/// untouched; a failure never erases an earlier success.
pub fn apply_enrichment_failure(view: &mut DashboardViewModel, account: AccountId) {
    if !view.accounts.iter().any(|a| a.id == account) {
        return;
    }
    view.enrichment
        .entry(account)
        .and_modify(|entry| entry.status = EnrichmentStatus::Failed)
        .or_insert(EnrichmentEntry {
            status: EnrichmentStatus::Failed,
            insights: None,
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use penny_shared::types::{Account, AccountType, Folder, FolderId, HealthStatus};

    fn account(id: i64, folder: i64) -> Account {
        Account {
            id: AccountId::new(id),
            name: format!("Account {id}"),
            account_type: AccountType::Expense,
            folder_id: FolderId::new(folder),
            monthly_budget: rust_decimal::Decimal::ZERO,
            target_amount: rust_decimal::Decimal::ZERO,
            deadline: None,
            current_balance: rust_decimal::Decimal::ZERO,
            budget_utilization: rust_decimal::Decimal::ZERO,
            health_status: HealthStatus::Healthy,
            transaction_count: 0,
        }
    }

    fn snapshot(account_ids: &[i64]) -> DashboardSnapshot {
        let accounts: Vec<Account> = account_ids.iter().map(|id| account(*id, 1)).collect();
        DashboardSnapshot {
            folders: vec![Folder {
                id: FolderId::new(1),
                name: "Essentials".into(),
                description: String::new(),
                icon: "🏠".into(),
                account_count: u32::try_from(accounts.len()).unwrap(),
                accounts: accounts.clone(),
            }],
            accounts,
            total_insights: vec![],
        }
    }

    fn bundle() -> InsightBundle {
        serde_json::from_str(r#"{"projections": {"1_month": {"projected_balance": 10, "confidence": 0.5}}}"#)
            .unwrap()
    }

    #[test]
    fn test_snapshot_from_unloaded_marks_targets_pending() {
        let view = apply_snapshot(
            &ViewState::Unloaded,
            snapshot(&[1, 2, 3]),
            &[AccountId::new(1), AccountId::new(2)],
        );

        assert_eq!(view.enrichment.len(), 2);
        assert_eq!(
            view.enrichment[&AccountId::new(1)].status,
            EnrichmentStatus::Pending
        );
        assert!(!view.enrichment.contains_key(&AccountId::new(3)));
        assert!(view.is_consistent());
    }

    #[test]
    fn test_refresh_drops_stale_enrichment_entries() {
        let mut first = apply_snapshot(&ViewState::Unloaded, snapshot(&[1, 2]), &[]);
        apply_enrichment_success(&mut first, AccountId::new(1), bundle());
        apply_enrichment_success(&mut first, AccountId::new(2), bundle());

        // Account 2 disappears in the next snapshot.
        let second = apply_snapshot(&ViewState::Loaded(first), snapshot(&[1, 3]), &[]);

        assert!(second.enrichment.contains_key(&AccountId::new(1)));
        assert!(!second.enrichment.contains_key(&AccountId::new(2)));
        assert!(second.is_consistent());
    }

    #[test]
    fn test_refresh_keeps_carried_data_while_pending() {
        let mut first = apply_snapshot(&ViewState::Unloaded, snapshot(&[1]), &[]);
        apply_enrichment_success(&mut first, AccountId::new(1), bundle());

        let second = apply_snapshot(
            &ViewState::Loaded(first),
            snapshot(&[1]),
            &[AccountId::new(1)],
        );

        let entry = &second.enrichment[&AccountId::new(1)];
        assert_eq!(entry.status, EnrichmentStatus::Pending);
        assert!(entry.insights.is_some(), "carried payload stays visible");
    }

    #[test]
    fn test_failure_keeps_prior_payload() {
        let mut view = apply_snapshot(&ViewState::Unloaded, snapshot(&[1]), &[AccountId::new(1)]);
        apply_enrichment_success(&mut view, AccountId::new(1), bundle());
        apply_enrichment_failure(&mut view, AccountId::new(1));

        let entry = &view.enrichment[&AccountId::new(1)];
        assert_eq!(entry.status, EnrichmentStatus::Failed);
        assert!(entry.insights.is_some());
    }

    #[test]
    fn test_results_for_unknown_accounts_are_ignored() {
        let mut view = apply_snapshot(&ViewState::Unloaded, snapshot(&[1]), &[AccountId::new(1)]);

        apply_enrichment_success(&mut view, AccountId::new(99), bundle());
        apply_enrichment_failure(&mut view, AccountId::new(98));

        assert_eq!(view.enrichment.len(), 1);
        assert!(view.is_consistent());
    }

    #[test]
    fn test_failed_enrichments_listing() {
        let mut view = apply_snapshot(
            &ViewState::Unloaded,
            snapshot(&[1, 2]),
            &[AccountId::new(1), AccountId::new(2)],
        );
        apply_enrichment_failure(&mut view, AccountId::new(2));

        let failed = view.failed_enrichments();
        assert_eq!(failed.len(), 1);
        assert!(matches!(
            failed[0],
            super::super::error::DashboardError::EnrichmentFailed(id) if id == AccountId::new(2)
        ));
    }
}
