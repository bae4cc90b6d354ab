/*
[INPUT]:  BTCCHINA_ACCESS_KEY / BTCCHINA_SECRET_KEY environment variables
[OUTPUT]: Account info, open orders, and a (commented-out) order placement
[POS]:    Examples - authenticated trading flow
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use btcchina_adapter::{BtcChinaClient, Credentials, TransactionKind};

/// Example: Authenticated account and trading queries
///
/// Requires real credentials; every request is HMAC-SHA1 signed.
#[tokio::main]
async fn main() {
    println!("=== BTCChina Trading Example ===\n");

    let access_key = match std::env::var("BTCCHINA_ACCESS_KEY") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Set BTCCHINA_ACCESS_KEY and BTCCHINA_SECRET_KEY first");
            return;
        }
    };
    let secret_key = std::env::var("BTCCHINA_SECRET_KEY").unwrap_or_default();

    let client = match BtcChinaClient::new(Credentials::new(access_key, secret_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created\n");

    println!("Querying account info...");
    match client.get_account_info().await {
        Ok(info) => {
            println!("✓ Account: {}", info.profile.username);
            for (currency, balance) in &info.balance {
                println!("  {} balance: {}", currency, balance.amount);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying open orders...");
    match client.get_orders(true).await {
        Ok(orders) => println!("✓ {} open order(s)", orders.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying recent trades...");
    match client.get_transactions(TransactionKind::All, 10).await {
        Ok(transactions) => println!("✓ {} ledger entries", transactions.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Uncomment to place a real order (price CNY, amount BTC):
    // match client.buy(550.0, 0.01).await {
    //     Ok(placed) => println!("✓ Order placed: {}", placed),
    //     Err(e) => println!("✗ Error: {}", e),
    // }

    println!("\n✓ Trading example complete");
}
