use accuscan::syve::{FilterClient, SqlClient};

// A liquid ERC-20 with steady transfer volume, so the feeds are never empty.
const TOKEN: &str = "0xd084944d3c05cd115c09d072b9f44ba3e0e45921";
const API_BASE: &str = "https://api.syve.ai/v1";

#[tokio::test]
#[ignore] // requires network
async fn test_live_flow_sums_parse() {
    let client = SqlClient::new(reqwest::Client::new(), API_BASE);

    let inflows = client.fetch_inbound_sums(TOKEN, 7).await.unwrap();
    assert!(!inflows.is_empty());

    let outflows = client.fetch_outbound_sums(TOKEN, 7).await.unwrap();
    assert!(!outflows.is_empty());
}

#[tokio::test]
#[ignore] // requires network
async fn test_live_transfer_feed_parses() {
    let client = FilterClient::new(reqwest::Client::new(), API_BASE);

    let transfers = client.erc20_transfers(TOKEN, 100).await.unwrap();
    assert!(!transfers.is_empty());
    assert!(transfers[0].from_address.starts_with("0x"));
}

#[tokio::test]
#[ignore] // requires network
async fn test_live_dex_trade_feed_parses() {
    let client = FilterClient::new(reqwest::Client::new(), API_BASE);
    let since = (chrono::Utc::now() - chrono::Duration::days(7)).timestamp();

    // A quiet week can leave the feed empty; this checks transport and shape.
    let trades = client.dex_trades(TOKEN, since, 100).await.unwrap();
    for trade in &trades {
        assert!(trade.trader_address.starts_with("0x"));
    }
}

#[tokio::test]
#[ignore] // requires network
async fn test_live_transaction_history_parses() {
    let client = FilterClient::new(reqwest::Client::new(), API_BASE);

    // Binance hot wallet, so the history is never empty.
    let txs = client
        .transactions_from("0x28c6c06298d514db089934071355e5743bf21d60")
        .await
        .unwrap();
    assert!(!txs.is_empty());
    assert!(txs.iter().any(|tx| tx.timestamp.is_some()));
}
