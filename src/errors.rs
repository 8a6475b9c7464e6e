use crate::syve::SqlClientError;

/// Errors that abort a scan outright.
///
/// Classifier and freshness failures are deliberately absent: those passes
/// degrade to unlabeled output and the scan continues.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Flow query failed for token {token}: {source}")]
    FlowQuery {
        token: String,
        #[source]
        source: SqlClientError,
    },

    #[error("No transfer flows recorded for token {token} within the lookback window")]
    NoFlowData { token: String },
}
