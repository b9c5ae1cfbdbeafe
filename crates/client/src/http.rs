//! reqwest-backed implementation of [`DashboardApi`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use penny_shared::config::ApiConfig;
use penny_shared::types::{Account, AccountId, Folder, Transaction, UserId};

use crate::api::{
    AccountInsights, DashboardApi, DashboardSnapshot, NewAccount, NewFolder, NewTransaction,
};
use crate::error::{ApiError, ApiResult};

/// HTTP client for the Penny backend.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    http: reqwest::Client,
    base_url: String,
}

/// Envelope for the account listing endpoint.
#[derive(Debug, serde::Deserialize)]
struct AccountsEnvelope {
    accounts: Vec<Account>,
}

/// Envelope for the folder listing endpoint.
#[derive(Debug, serde::Deserialize)]
struct FoldersEnvelope {
    folders: Vec<Folder>,
}

/// Envelope for the account transactions endpoint.
#[derive(Debug, serde::Deserialize)]
struct TransactionsEnvelope {
    transactions: Vec<Transaction>,
}

impl HttpDashboardApi {
    /// Creates a client from API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, user: &UserId, path: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, user, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> ApiResult<T> {
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + Sync>(&self, url: String, body: &B) -> ApiResult<()> {
        debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_dashboard(&self, user: &UserId) -> ApiResult<DashboardSnapshot> {
        self.get_json(self.url(user, "dashboard")).await
    }

    async fn fetch_account_insights(
        &self,
        user: &UserId,
        account: AccountId,
    ) -> ApiResult<AccountInsights> {
        self.get_json(self.url(user, &format!("accounts/{account}/insights")))
            .await
    }

    async fn list_accounts(&self, user: &UserId) -> ApiResult<Vec<Account>> {
        let envelope: AccountsEnvelope = self.get_json(self.url(user, "accounts")).await?;
        Ok(envelope.accounts)
    }

    async fn list_folders(&self, user: &UserId) -> ApiResult<Vec<Folder>> {
        let envelope: FoldersEnvelope = self.get_json(self.url(user, "folders")).await?;
        Ok(envelope.folders)
    }

    async fn list_account_transactions(
        &self,
        user: &UserId,
        account: AccountId,
    ) -> ApiResult<Vec<Transaction>> {
        let envelope: TransactionsEnvelope = self
            .get_json(self.url(user, &format!("accounts/{account}/transactions")))
            .await?;
        Ok(envelope.transactions)
    }

    async fn create_folder(&self, user: &UserId, folder: &NewFolder) -> ApiResult<()> {
        folder
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.post_json(self.url(user, "folders"), folder).await
    }

    async fn create_account(&self, user: &UserId, account: &NewAccount) -> ApiResult<()> {
        account
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.post_json(self.url(user, "accounts"), account).await
    }

    async fn create_transaction(
        &self,
        user: &UserId,
        transaction: &NewTransaction,
    ) -> ApiResult<()> {
        transaction
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        self.post_json(self.url(user, "transactions"), transaction)
            .await
    }
}
