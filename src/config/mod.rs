use std::env;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://api.syve.ai/v1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub syve_api_base: String,

    // Flow window
    pub lookback_days: u32,

    // Filter API page bound
    pub transfer_page_size: u32,

    // Earliest-activity lookup pacing
    pub freshness_batch_size: usize,
    pub freshness_pause: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            syve_api_base: env::var("SYVE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.into()),
            lookback_days: env::var("LOOKBACK_DAYS")
                .unwrap_or_else(|_| "7".into())
                .parse()
                .unwrap_or(7),
            transfer_page_size: env::var("TRANSFER_PAGE_SIZE")
                .unwrap_or_else(|_| "100000".into())
                .parse()
                .unwrap_or(100_000),
            // A batch size of 0 would divide-by-zero the pacing check.
            freshness_batch_size: env::var("FRESHNESS_BATCH_SIZE")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .unwrap_or(5)
                .max(1),
            freshness_pause: Duration::from_millis(
                env::var("FRESHNESS_PAUSE_MS")
                    .unwrap_or_else(|_| "1000".into())
                    .parse()
                    .unwrap_or(1_000),
            ),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            syve_api_base: DEFAULT_API_BASE.into(),
            lookback_days: 7,
            transfer_page_size: 100_000,
            freshness_batch_size: 5,
            freshness_pause: Duration::from_secs(1),
        }
    }
}
