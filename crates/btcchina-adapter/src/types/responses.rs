/*
[INPUT]:  Raw `result` payloads from the trade endpoint
[OUTPUT]: Wrapper structs for payloads that nest their data under a key
[POS]:    Data layer - response payload unwrapping
[UPDATE]: When the exchange changes payload nesting
*/

use serde::Deserialize;

use super::models::{Deposit, MarketDepth, Order, Transaction, Withdrawal};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrdersPayload {
    pub order: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderPayload {
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DepositsPayload {
    pub deposit: Vec<Deposit>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithdrawalsPayload {
    pub withdrawal: Vec<Withdrawal>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithdrawalPayload {
    pub withdrawal: Withdrawal,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsPayload {
    pub transaction: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketDepthPayload {
    pub market_depth: MarketDepth,
}
