/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    Closed,
    Cancelled,
    Pending,
    Error,
    InsufficientBalance,
}

/// Ledger entry filter for `getTransactions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionKind {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "fundbtc")]
    FundBtc,
    #[serde(rename = "withdrawbtc")]
    WithdrawBtc,
    #[serde(rename = "fundmoney")]
    FundMoney,
    #[serde(rename = "withdrawmoney")]
    WithdrawMoney,
    #[serde(rename = "refundmoney")]
    RefundMoney,
    #[serde(rename = "buybtc")]
    BuyBtc,
    #[serde(rename = "sellbtc")]
    SellBtc,
    #[serde(rename = "tradefee")]
    TradeFee,
}

impl TransactionKind {
    /// Wire value used as the positional `type` param.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::All => "all",
            TransactionKind::FundBtc => "fundbtc",
            TransactionKind::WithdrawBtc => "withdrawbtc",
            TransactionKind::FundMoney => "fundmoney",
            TransactionKind::WithdrawMoney => "withdrawmoney",
            TransactionKind::RefundMoney => "refundmoney",
            TransactionKind::BuyBtc => "buybtc",
            TransactionKind::SellBtc => "sellbtc",
            TransactionKind::TradeFee => "tradefee",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_kind_wire_values() {
        assert_eq!(TransactionKind::All.as_str(), "all");
        assert_eq!(TransactionKind::SellBtc.as_str(), "sellbtc");

        let kind: TransactionKind = serde_json::from_str(r#""fundbtc""#).unwrap();
        assert_eq!(kind, TransactionKind::FundBtc);
    }

    #[test]
    fn test_order_status_snake_case() {
        let status: OrderStatus = serde_json::from_str(r#""insufficient_balance""#).unwrap();
        assert_eq!(status, OrderStatus::InsufficientBalance);
    }
}
