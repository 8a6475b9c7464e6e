use reqwest::Client;
use thiserror::Error;

use super::types::{DexTradeRecord, TransactionRecord, TransferRecord};

#[derive(Debug, Error)]
pub enum FilterClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the Syve filter endpoints (`GET {base}/filter-api/*`).
///
/// Filter operators are encoded in the query-string keys (`eq:`, `gt:`),
/// so URLs are assembled literally rather than through a form serializer.
#[derive(Debug, Clone)]
pub struct FilterClient {
    http_client: Client,
    base_url: String,
}

impl FilterClient {
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// ERC-20 transfer events for a token, up to `size` rows.
    pub async fn erc20_transfers(
        &self,
        token_address: &str,
        size: u32,
    ) -> Result<Vec<TransferRecord>, FilterClientError> {
        let url = self.erc20_transfers_url(token_address, size);
        tracing::debug!(token = %token_address, size, "Fetching ERC-20 transfer feed");
        self.fetch(&url).await
    }

    /// DEX trade events for a token with timestamps strictly after `since_unix`.
    pub async fn dex_trades(
        &self,
        token_address: &str,
        since_unix: i64,
        size: u32,
    ) -> Result<Vec<DexTradeRecord>, FilterClientError> {
        let url = self.dex_trades_url(token_address, since_unix, size);
        tracing::debug!(token = %token_address, since_unix, "Fetching DEX trade feed");
        self.fetch(&url).await
    }

    /// Transactions originated by `address`, used for earliest-activity lookups.
    pub async fn transactions_from(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionRecord>, FilterClientError> {
        let url = self.transactions_from_url(address);
        tracing::debug!(address = %address, "Fetching originated transactions");
        self.fetch(&url).await
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Vec<T>, FilterClientError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?;

        let records: Vec<T> = response.json().await?;
        Ok(records)
    }

    fn erc20_transfers_url(&self, token_address: &str, size: u32) -> String {
        format!(
            "{}/filter-api/erc20?eq:token_address={}&size={}",
            self.base_url, token_address, size
        )
    }

    fn dex_trades_url(&self, token_address: &str, since_unix: i64, size: u32) -> String {
        format!(
            "{}/filter-api/dex-trades?eq:token_address={}&gt:timestamp={}&size={}",
            self.base_url, token_address, since_unix, size
        )
    }

    fn transactions_from_url(&self, address: &str) -> String {
        format!(
            "{}/filter-api/transactions?eq:from_address={}",
            self.base_url, address
        )
    }
}
