/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderSide, OrderStatus, TransactionKind};

/// Ticker snapshot from the market-data host. Numeric fields arrive as
/// JSON strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub high: Decimal,
    pub low: Decimal,
    pub buy: Decimal,
    pub sell: Decimal,
    pub last: Decimal,
    pub vol: Decimal,
}

/// One price level of the order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub price: Decimal,
    pub amount: Decimal,
}

/// Order book snapshot from `getMarketDepth2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDepth {
    pub bid: Vec<DepthLevel>,
    pub ask: Vec<DepthLevel>,
    #[serde(default)]
    pub date: u64,
}

/// Per-currency funds, reported separately for available and frozen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub currency: String,
    pub symbol: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub trade_fee: Decimal,
    #[serde(default)]
    pub daily_btc_limit: Decimal,
    pub btc_deposit_address: String,
    #[serde(default)]
    pub btc_withdrawal_address: String,
}

/// `getAccountInfo` payload: profile plus balances keyed by currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub profile: Profile,
    pub balance: HashMap<String, Balance>,
    pub frozen: HashMap<String, Balance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub price: Decimal,
    pub currency: String,
    pub amount: Decimal,
    #[serde(default)]
    pub amount_original: Decimal,
    pub date: u64,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub id: u64,
    pub address: String,
    pub currency: String,
    pub amount: Decimal,
    pub date: u64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: u64,
    pub address: String,
    pub currency: String,
    pub amount: Decimal,
    pub date: u64,
    /// On-chain transaction id, absent while the withdrawal is pending.
    #[serde(default)]
    pub transaction: Option<String>,
    pub status: String,
}

/// `requestWithdrawal` confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalId {
    pub id: String,
}

/// One account ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub btc_amount: Decimal,
    pub cny_amount: Decimal,
    pub date: u64,
}
