/*
[INPUT]:  Order prices, amounts, and ids from the caller
[OUTPUT]: Exchange confirmations for order and withdrawal requests
[POS]:    HTTP layer - trading endpoints (signed)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::envelope::ParamValue;
use crate::http::precision::cut_off_param;
use crate::http::{BtcChinaClient, Result};
use crate::types::WithdrawalId;

impl BtcChinaClient {
    /// Place a limit buy order.
    ///
    /// method: `buyOrder`, params: `[price, amount]`
    ///
    /// Price is truncated to 5 decimal places and amount to 8 before the
    /// envelope is built, so the truncated values are what gets signed and
    /// sent. The exchange rejects over-precise orders outright.
    pub async fn buy(&self, price: f64, amount: f64) -> Result<bool> {
        let params = vec![cut_off_param(price, 5), cut_off_param(amount, 8)];
        self.call_as("buyOrder", params).await
    }

    /// Place a limit sell order.
    ///
    /// method: `sellOrder`, params: `[price, amount]`, same truncation as
    /// [`buy`](Self::buy).
    pub async fn sell(&self, price: f64, amount: f64) -> Result<bool> {
        let params = vec![cut_off_param(price, 5), cut_off_param(amount, 8)];
        self.call_as("sellOrder", params).await
    }

    /// Cancel an open order.
    ///
    /// method: `cancelOrder`, params: `[id]`
    pub async fn cancel(&self, order_id: u64) -> Result<bool> {
        self.call_as("cancelOrder", vec![ParamValue::from(order_id)])
            .await
    }

    /// Request a withdrawal to the registered address.
    ///
    /// method: `requestWithdrawal`, params: `[currency, amount]`
    pub async fn request_withdrawal(&self, currency: &str, amount: f64) -> Result<WithdrawalId> {
        let params = vec![ParamValue::from(currency), ParamValue::number(amount)];
        self.call_as("requestWithdrawal", params).await
    }
}
