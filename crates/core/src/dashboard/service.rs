//! The dashboard aggregator.
//!
//! Owns the merged view model and the refresh sequencing: one primary
//! snapshot fetch composed with per-account enrichment fetches. Every refresh
//! starts a new round; results tagged with an older round are discarded
//! unapplied, so a slow stale response can never overwrite fresher data
//! ("last refresh wins", not "last response wins").

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use penny_client::api::{AccountInsights, DashboardApi};
use penny_client::error::ApiResult;
use penny_shared::types::{Account, AccountId, UserId};

use super::error::DashboardError;
use super::merge;
use super::types::{Mutation, ViewState};

/// Maximum number of accounts enriched per round.
///
/// A deliberate policy bound, not a performance accident: enrichment calls
/// are per-account round trips and the UI only surfaces a handful of insight
/// cards. The first accounts in snapshot order win.
pub const ENRICHMENT_LIMIT: usize = 5;

/// Mutable aggregator state, guarded by one mutex.
///
/// Never locked across an await: every merge reads current state, applies
/// one result, and commits, indivisibly with respect to other merges.
#[derive(Debug)]
struct Inner {
    /// Monotonically increasing refresh round counter.
    round: u64,
    /// Enrichment fetches outstanding for the current round.
    in_flight: usize,
    /// The merged view model.
    view: ViewState,
}

/// Produces and keeps current a [`super::types::DashboardViewModel`].
///
/// Cheap to clone; clones share state. Presentation consumers read the view
/// via [`Self::current`] and call [`Self::refresh`] / [`Self::record_mutation`];
/// they never mutate the view model directly.
pub struct DashboardAggregator<C> {
    client: Arc<C>,
    inner: Arc<Mutex<Inner>>,
    /// Revision counter bumped on every committed change.
    changed: watch::Sender<u64>,
}

impl<C> Clone for DashboardAggregator<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            inner: Arc::clone(&self.inner),
            changed: self.changed.clone(),
        }
    }
}

impl<C: DashboardApi + 'static> DashboardAggregator<C> {
    /// Creates an aggregator in the unloaded state.
    #[must_use]
    pub fn new(client: C) -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            client: Arc::new(client),
            inner: Arc::new(Mutex::new(Inner {
                round: 0,
                in_flight: 0,
                view: ViewState::Unloaded,
            })),
            changed,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.changed.send_modify(|revision| *revision += 1);
    }

    /// Returns a clone of the current view state.
    #[must_use]
    pub fn current(&self) -> ViewState {
        self.lock().view.clone()
    }

    /// Subscribes to change notifications (a revision counter).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed.subscribe()
    }

    /// Waits until the current round has no enrichment fetches in flight.
    pub async fn settled(&self) {
        let mut changes = self.subscribe();
        loop {
            if self.lock().in_flight == 0 {
                return;
            }
            if changes.changed().await.is_err() {
                return;
            }
        }
    }

    /// Fetches and applies a fresh dashboard snapshot, then enriches the
    /// first [`ENRICHMENT_LIMIT`] accounts as a non-blocking follow-up.
    ///
    /// The snapshot replaces folders/accounts atomically; readers never
    /// observe a half-updated list. On failure any previously loaded view
    /// stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::EmptyUserId`] for an empty user ID and
    /// [`DashboardError::SnapshotUnavailable`] when the primary fetch fails.
    pub async fn load_snapshot(&self, user: &UserId) -> Result<(), DashboardError> {
        if user.is_empty() {
            return Err(DashboardError::EmptyUserId);
        }

        // Starting a round immediately supersedes all in-flight work.
        let round = {
            let mut inner = self.lock();
            inner.round += 1;
            inner.in_flight = 0;
            inner.round
        };
        self.notify();

        let snapshot = match self.client.fetch_dashboard(user).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!(round, error = %err, "snapshot fetch failed; keeping prior view");
                return Err(DashboardError::SnapshotUnavailable(err));
            }
        };

        let targets: Vec<AccountId> = snapshot
            .accounts
            .iter()
            .take(ENRICHMENT_LIMIT)
            .map(|account| account.id)
            .collect();

        {
            let mut inner = self.lock();
            if inner.round != round {
                debug!(round, "discarding snapshot from superseded round");
                return Ok(());
            }
            inner.view = ViewState::Loaded(merge::apply_snapshot(&inner.view, snapshot, &targets));
            inner.in_flight = targets.len();
        }
        self.notify();
        info!(round, targets = targets.len(), "dashboard snapshot applied");

        // Follow-up enrichment; the snapshot is usable immediately with
        // enrichment fields pending.
        let this = self.clone();
        let user = user.clone();
        tokio::spawn(async move { this.run_enrichment(user, targets, round).await });

        Ok(())
    }

    /// Re-runs the snapshot fetch and enrichment, superseding any round
    /// still in flight.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_snapshot`].
    pub async fn refresh(&self, user: &UserId) -> Result<(), DashboardError> {
        self.load_snapshot(user).await
    }

    /// Enriches the first [`ENRICHMENT_LIMIT`] of the given accounts under
    /// the current round, awaiting completion of the fan-out.
    pub async fn enrich_accounts(&self, user: &UserId, accounts: &[Account]) {
        let targets: Vec<AccountId> = accounts
            .iter()
            .take(ENRICHMENT_LIMIT)
            .map(|account| account.id)
            .collect();

        let round = {
            let mut inner = self.lock();
            inner.in_flight = targets.len();
            inner.round
        };
        self.run_enrichment(user.clone(), targets, round).await;
    }

    /// Dispatches one concurrent fetch per target and merges completions
    /// through a single serialized reducer loop.
    async fn run_enrichment(&self, user: UserId, targets: Vec<AccountId>, round: u64) {
        if targets.is_empty() {
            return;
        }

        let mut fetches = JoinSet::new();
        for id in targets {
            let client = Arc::clone(&self.client);
            let user = user.clone();
            fetches.spawn(async move { (id, client.fetch_account_insights(&user, id).await) });
        }

        // Single-writer merge step: completions apply one at a time in
        // arrival order. One account's failure never aborts its siblings.
        while let Some(joined) = fetches.join_next().await {
            match joined {
                Ok((id, result)) => self.apply_enrichment_result(id, result, round),
                Err(err) => {
                    error!(round, error = %err, "enrichment task failed to run");
                    let mut inner = self.lock();
                    if inner.round == round {
                        inner.in_flight = inner.in_flight.saturating_sub(1);
                    }
                    drop(inner);
                    self.notify();
                }
            }
        }
    }

    /// Commits one enrichment outcome, unless its round was superseded.
    fn apply_enrichment_result(
        &self,
        id: AccountId,
        result: ApiResult<AccountInsights>,
        round: u64,
    ) {
        let mut inner = self.lock();
        if inner.round != round {
            debug!(account = %id, round, "discarding enrichment result from superseded round");
            return;
        }

        if let ViewState::Loaded(view) = &mut inner.view {
            match result {
                Ok(payload) => merge::apply_enrichment_success(view, id, payload.insights),
                Err(err) => {
                    warn!(account = %id, round, error = %err, "enrichment failed; insight card degrades");
                    merge::apply_enrichment_failure(view, id);
                }
            }
        }
        inner.in_flight = inner.in_flight.saturating_sub(1);
        drop(inner);
        self.notify();
    }

    /// Delegates a write to the backend; on success triggers exactly one
    /// refresh. On failure the view model is left untouched - no optimistic
    /// update happens, so nothing needs rolling back.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MutationRejected`] when the write fails and
    /// [`DashboardError::EmptyUserId`] for an empty user ID; the follow-up
    /// refresh reports its own errors.
    pub async fn record_mutation(
        &self,
        user: &UserId,
        mutation: Mutation,
    ) -> Result<(), DashboardError> {
        if user.is_empty() {
            return Err(DashboardError::EmptyUserId);
        }

        let kind = mutation.kind();
        let result = match &mutation {
            Mutation::Folder(folder) => self.client.create_folder(user, folder).await,
            Mutation::Account(account) => self.client.create_account(user, account).await,
            Mutation::Transaction(txn) => self.client.create_transaction(user, txn).await,
        };

        match result {
            Ok(()) => {
                info!(%kind, "mutation accepted; refreshing");
                self.refresh(user).await
            }
            Err(err) => {
                error!(%kind, error = %err, "mutation rejected; view model unchanged");
                Err(DashboardError::MutationRejected {
                    kind,
                    status: err.status(),
                })
            }
        }
    }
}
