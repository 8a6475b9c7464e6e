use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use super::types::{InflowRow, OutflowRow};

#[derive(Debug, Error)]
pub enum SqlClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the Syve structured-query endpoint (`POST {base}/sql`).
///
/// Queries are submitted as `{"query": "..."}` and answered with a JSON
/// array of row objects keyed by the column aliases.
#[derive(Debug, Clone)]
pub struct SqlClient {
    http_client: Client,
    base_url: String,
}

impl SqlClient {
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Total token value received per address over the trailing window,
    /// largest sums first.
    pub async fn fetch_inbound_sums(
        &self,
        token_address: &str,
        lookback_days: u32,
    ) -> Result<Vec<InflowRow>, SqlClientError> {
        let query = inbound_sum_query(token_address, lookback_days);
        tracing::debug!(token = %token_address, "Fetching inbound transfer sums");
        self.run_query(&query).await
    }

    /// Total token value sent per address over the trailing window,
    /// largest sums first.
    pub async fn fetch_outbound_sums(
        &self,
        token_address: &str,
        lookback_days: u32,
    ) -> Result<Vec<OutflowRow>, SqlClientError> {
        let query = outbound_sum_query(token_address, lookback_days);
        tracing::debug!(token = %token_address, "Fetching outbound transfer sums");
        self.run_query(&query).await
    }

    async fn run_query<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<Vec<T>, SqlClientError> {
        let url = format!("{}/sql", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&json!({ "query": query }))
            .send()
            .await?
            .error_for_status()?;

        let rows: Vec<T> = response.json().await?;
        Ok(rows)
    }
}

fn inbound_sum_query(token_address: &str, lookback_days: u32) -> String {
    format!(
        "SELECT SUM(value_token) AS tokens_in, to_address AS address \
         FROM eth_erc20 \
         WHERE token_address = '{token_address}' \
         AND timestamp > NOW() - INTERVAL {lookback_days} days \
         GROUP BY 2 ORDER BY 1 DESC"
    )
}

fn outbound_sum_query(token_address: &str, lookback_days: u32) -> String {
    format!(
        "SELECT SUM(value_token) AS tokens_out, from_address AS address \
         FROM eth_erc20 \
         WHERE token_address = '{token_address}' \
         AND timestamp > NOW() - INTERVAL {lookback_days} days \
         GROUP BY 2 ORDER BY 1 DESC"
    )
}
