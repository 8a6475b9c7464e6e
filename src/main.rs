use clap::Parser;

use accuscan::config::AppConfig;
use accuscan::models::{AccumulatorRecord, FreshWallet};
use accuscan::Pipeline;

/// Scan an ERC-20 token for net accumulators and label wallet provenance.
#[derive(Parser)]
#[command(name = "accuscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// ERC-20 token contract address to scan
    token_address: String,

    /// Override the lookback window in days
    #[arg(long)]
    days: Option<u32>,

    /// Emit the report as pretty-printed JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(days) = cli.days {
        config.lookback_days = days;
    }
    let lookback_days = config.lookback_days;

    let pipeline = Pipeline::new(reqwest::Client::new(), config);

    let report = match pipeline.run(&cli.token_address).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Scan aborted: no data available for this token");
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_accumulators(lookback_days, &report.accumulators);
        println!();
        print_fresh_wallets(lookback_days, &report.fresh_wallets);
    }

    Ok(())
}

fn print_accumulators(days: u32, accumulators: &[AccumulatorRecord]) {
    println!("Accumulators over the past {days} days");
    if accumulators.is_empty() {
        println!("  (none)");
        return;
    }

    println!(
        "{:<44} {:>22} {:>22} {:>22} {:>13} {:>9} {:>7} {:>9}",
        "address",
        "tokens_in",
        "tokens_out",
        "accumulated",
        "fresh",
        "from_cex",
        "is_cex",
        "from_dex"
    );
    for record in accumulators {
        println!(
            "{:<44} {:>22} {:>22} {:>22} {:>13} {:>9} {:>7} {:>9}",
            record.from_address,
            record.tokens_in.to_string(),
            record.tokens_out.to_string(),
            record.accumulated.to_string(),
            record.fresh_wallet.as_str(),
            record.received_from_cex.as_str(),
            record.is_a_cex.as_str(),
            record.received_from_dex.as_str(),
        );
    }
}

fn print_fresh_wallets(days: u32, fresh_wallets: &[FreshWallet]) {
    println!("Fresh wallets over the past {days} days");
    if fresh_wallets.is_empty() {
        println!("  (none)");
        return;
    }

    println!(
        "{:<44} {:>20} {:>22}",
        "address", "first_activity", "accumulated"
    );
    for wallet in fresh_wallets {
        println!(
            "{:<44} {:>20} {:>22}",
            wallet.from_address,
            wallet.min_date.format("%Y-%m-%d %H:%M:%S").to_string(),
            wallet.accumulated.to_string(),
        );
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
