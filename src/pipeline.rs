use std::time::Instant;

use chrono::Utc;
use metrics::{counter, histogram};
use serde::Serialize;
use tokio::time::sleep;

use crate::config::AppConfig;
use crate::errors::PipelineError;
use crate::flows::{build_accumulators, merge_flows};
use crate::intelligence::{
    earliest_activity, label_cex_recipients, label_dex_traders, label_exchange_wallets,
    label_fresh_wallets, select_fresh_wallets, ExchangeRegistry,
};
use crate::models::{normalize_address, AccumulatorRecord, EarliestActivity, FreshWallet};
use crate::syve::{FilterClient, SqlClient};

/// Output of one scan: the labeled accumulator table, largest accumulation
/// first, and the fresh-wallet subset in the same order.
#[derive(Debug, Clone, Serialize)]
pub struct AccumulationReport {
    pub accumulators: Vec<AccumulatorRecord>,
    pub fresh_wallets: Vec<FreshWallet>,
}

/// Sequences the scan stages for one token address:
/// 1. Aggregate inbound and outbound flow sums over the lookback window
/// 2. Select net accumulators
/// 3. Label exchange recipients and exchange-owned wallets
/// 4. Label DEX traders
/// 5. Detect fresh wallets via paced earliest-activity lookups
///
/// Stage 1 failure aborts the scan; later stages degrade to unlabeled
/// output and the scan continues.
pub struct Pipeline {
    sql_client: SqlClient,
    filter_client: FilterClient,
    registry: ExchangeRegistry,
    config: AppConfig,
}

impl Pipeline {
    pub fn new(http_client: reqwest::Client, config: AppConfig) -> Self {
        Self {
            sql_client: SqlClient::new(http_client.clone(), &config.syve_api_base),
            filter_client: FilterClient::new(http_client, &config.syve_api_base),
            registry: ExchangeRegistry::known_exchanges(),
            config,
        }
    }

    pub async fn run(&self, token_address: &str) -> Result<AccumulationReport, PipelineError> {
        let start = Instant::now();
        let token = normalize_address(token_address);

        counter!("scans_total").increment(1);
        tracing::info!(
            token = %token,
            lookback_days = self.config.lookback_days,
            "Accumulator scan started"
        );

        let mut accumulators = match self.fetch_accumulators(&token).await {
            Ok(accumulators) => accumulators,
            Err(e) => {
                counter!("scan_failures_total").increment(1);
                return Err(e);
            }
        };

        if accumulators.is_empty() {
            // Volume existed but nobody netted positive. Valid empty result.
            tracing::info!(token = %token, "No net accumulation in window");
            histogram!("scan_duration_seconds").record(start.elapsed().as_secs_f64());
            return Ok(AccumulationReport {
                accumulators,
                fresh_wallets: Vec::new(),
            });
        }

        self.apply_exchange_labels(&token, &mut accumulators).await;
        self.apply_dex_labels(&token, &mut accumulators).await;

        let fresh_wallets = self.detect_fresh_wallets(&accumulators).await;
        label_fresh_wallets(&mut accumulators, &fresh_wallets);

        tracing::info!(
            token = %token,
            accumulators = accumulators.len(),
            fresh_wallets = fresh_wallets.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Accumulator scan finished"
        );
        histogram!("scan_duration_seconds").record(start.elapsed().as_secs_f64());

        Ok(AccumulationReport {
            accumulators,
            fresh_wallets,
        })
    }

    /// Stages 1 and 2: the two flow queries, the merge, and the net filter.
    ///
    /// An empty result on either side is fatal: a token that the upstream
    /// does not index is structurally different from one whose holders all
    /// netted out, and must not be rendered as an empty table.
    async fn fetch_accumulators(
        &self,
        token: &str,
    ) -> Result<Vec<AccumulatorRecord>, PipelineError> {
        let inflows = self
            .sql_client
            .fetch_inbound_sums(token, self.config.lookback_days)
            .await
            .map_err(|source| PipelineError::FlowQuery {
                token: token.to_string(),
                source,
            })?;

        let outflows = self
            .sql_client
            .fetch_outbound_sums(token, self.config.lookback_days)
            .await
            .map_err(|source| PipelineError::FlowQuery {
                token: token.to_string(),
                source,
            })?;

        if inflows.is_empty() || outflows.is_empty() {
            return Err(PipelineError::NoFlowData {
                token: token.to_string(),
            });
        }

        let flows = merge_flows(&inflows, &outflows);
        tracing::debug!(token = %token, flow_rows = flows.len(), "Merged flow table");

        Ok(build_accumulators(&flows))
    }

    /// Stage 3: `received_from_cex` and `is_a_cex`. Best-effort.
    async fn apply_exchange_labels(&self, token: &str, accumulators: &mut [AccumulatorRecord]) {
        let transfers = match self
            .filter_client
            .erc20_transfers(token, self.config.transfer_page_size)
            .await
        {
            Ok(transfers) => transfers,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    token = %token,
                    "Transfer feed unavailable, exchange labels left unknown"
                );
                counter!("classifier_errors_total").increment(1);
                return;
            }
        };

        label_cex_recipients(accumulators, &transfers, &self.registry);
        label_exchange_wallets(accumulators, &self.registry);

        tracing::debug!(
            token = %token,
            transfers = transfers.len(),
            "Exchange labels applied"
        );
    }

    /// Stage 4: `received_from_dex`. Best-effort.
    async fn apply_dex_labels(&self, token: &str, accumulators: &mut [AccumulatorRecord]) {
        let since_unix =
            (Utc::now() - chrono::Duration::days(self.config.lookback_days as i64)).timestamp();

        let trades = match self
            .filter_client
            .dex_trades(token, since_unix, self.config.transfer_page_size)
            .await
        {
            Ok(trades) => trades,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    token = %token,
                    "DEX trade feed unavailable, DEX labels left unknown"
                );
                counter!("classifier_errors_total").increment(1);
                return;
            }
        };

        label_dex_traders(accumulators, &trades);

        tracing::debug!(token = %token, trades = trades.len(), "DEX labels applied");
    }

    /// Stage 5: one earliest-activity lookup per accumulator, sequential,
    /// with a fixed pause after every batch. Per-address failures skip the
    /// address; the wallet then simply cannot qualify as fresh.
    async fn detect_fresh_wallets(&self, accumulators: &[AccumulatorRecord]) -> Vec<FreshWallet> {
        let cutoff = Utc::now() - chrono::Duration::days(self.config.lookback_days as i64);
        // Config fields are public; a hand-built batch size of 0 would
        // divide-by-zero the pacing check.
        let batch_size = self.config.freshness_batch_size.max(1);
        let mut activities: Vec<EarliestActivity> = Vec::with_capacity(accumulators.len());

        for (i, accumulator) in accumulators.iter().enumerate() {
            if i > 0 && i % batch_size == 0 {
                sleep(self.config.freshness_pause).await;
            }

            let history = match self
                .filter_client
                .transactions_from(&accumulator.from_address)
                .await
            {
                Ok(history) => history,
                Err(e) => {
                    tracing::debug!(
                        error = %e,
                        address = %accumulator.from_address,
                        "Earliest-activity lookup failed, skipping address"
                    );
                    counter!("classifier_errors_total").increment(1);
                    continue;
                }
            };

            if let Some(activity) = earliest_activity(&accumulator.from_address, &history) {
                activities.push(activity);
            }
        }

        select_fresh_wallets(&activities, accumulators, cutoff)
    }
}
