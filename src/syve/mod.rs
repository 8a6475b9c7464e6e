pub mod filter_client;
pub mod sql_client;
pub mod types;

pub use filter_client::{FilterClient, FilterClientError};
pub use sql_client::{SqlClient, SqlClientError};
pub use types::{DexTradeRecord, InflowRow, OutflowRow, TransactionRecord, TransferRecord};
