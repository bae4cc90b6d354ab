/*
[INPUT]:  No arguments (ticker is unauthenticated)
[OUTPUT]: Market data (ticker, midpoint price, order book depth)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use btcchina_adapter::{BtcChinaClient, Credentials};

/// Example: Query market data
///
/// The ticker endpoint is public; getMarketDepth2 is served by the signed
/// trade endpoint, so depth needs real credentials.
#[tokio::main]
async fn main() {
    println!("=== BTCChina Market Data Example ===\n");

    let access_key = std::env::var("BTCCHINA_ACCESS_KEY").unwrap_or_default();
    let secret_key = std::env::var("BTCCHINA_SECRET_KEY").unwrap_or_default();

    let client = match BtcChinaClient::new(Credentials::new(access_key, secret_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Querying ticker...");
    match client.ticker().await {
        Ok(ticker) => println!("✓ Ticker: {:?}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying midpoint price...");
    match client.current_price().await {
        Ok(price) => println!("✓ Current price: {}", price),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying market depth (signed endpoint)...");
    match client.get_market_depth(10).await {
        Ok(depth) => println!(
            "✓ Depth: {} bids / {} asks",
            depth.bid.len(),
            depth.ask.len()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
