pub mod accumulator;
pub mod flow;
pub mod fresh;

pub use accumulator::AccumulatorRecord;
pub use flow::FlowRecord;
pub use fresh::{EarliestActivity, FreshWallet};

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Address normalization
// ---------------------------------------------------------------------------

/// Canonical form for address comparison: trimmed, lowercased hex.
///
/// Upstream feeds and the embedded exchange registry mix checksummed and
/// lowercase addresses; every address entering the domain goes through here
/// so membership tests never miss on letter case.
pub fn normalize_address(address: &str) -> String {
    address.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Outcome of a best-effort provenance check. `Unknown` covers both "checked
/// and not matched" and "check skipped because the data source failed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    #[default]
    Unknown,
    Yes,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Unknown => "-",
            Label::Yes => "Yes",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Label::Yes)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wallet-age label derived from the earliest observed outbound transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessLabel {
    #[default]
    Unknown,
    Fresh,
}

impl FreshnessLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreshnessLabel::Unknown => "-",
            FreshnessLabel::Fresh => "Fresh Wallet",
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, FreshnessLabel::Fresh)
    }
}

impl fmt::Display for FreshnessLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
