/*
[INPUT]:  Query filters (currency, pending flags, id, limits)
[OUTPUT]: Account data (balances, orders, deposits, withdrawals, transactions)
[POS]:    HTTP layer - account query endpoints (signed)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::envelope::ParamValue;
use crate::http::{BtcChinaClient, Result};
use crate::types::{
    AccountInfo, Deposit, DepositsPayload, Order, OrderPayload, OrdersPayload, Transaction,
    TransactionKind, TransactionsPayload, Withdrawal, WithdrawalPayload, WithdrawalsPayload,
};

impl BtcChinaClient {
    /// Fetch profile, balances, and frozen funds.
    ///
    /// method: `getAccountInfo`, params: `[]`
    pub async fn get_account_info(&self) -> Result<AccountInfo> {
        self.call_as("getAccountInfo", Vec::new()).await
    }

    /// BTC deposit address from the account profile.
    pub async fn get_deposit_address(&self) -> Result<String> {
        let info = self.get_account_info().await?;
        Ok(info.profile.btc_deposit_address)
    }

    /// List orders, open ones only by default.
    ///
    /// method: `getOrders`, params: `[openonly]`
    pub async fn get_orders(&self, openonly: bool) -> Result<Vec<Order>> {
        let payload: OrdersPayload = self
            .call_as("getOrders", vec![ParamValue::Bool(openonly)])
            .await?;
        Ok(payload.order)
    }

    /// Fetch a single order by id.
    ///
    /// method: `getOrder`, params: `[id]`
    pub async fn get_order(&self, id: u64) -> Result<Order> {
        let payload: OrderPayload = self.call_as("getOrder", vec![ParamValue::from(id)]).await?;
        Ok(payload.order)
    }

    /// method: `getDeposits`, params: `[currency, pendingonly]`
    pub async fn get_deposits(&self, currency: &str, pendingonly: bool) -> Result<Vec<Deposit>> {
        let params = vec![ParamValue::from(currency), ParamValue::Bool(pendingonly)];
        let payload: DepositsPayload = self.call_as("getDeposits", params).await?;
        Ok(payload.deposit)
    }

    /// method: `getWithdrawal`, params: `[id]`
    pub async fn get_withdrawal(&self, id: u64) -> Result<Withdrawal> {
        let payload: WithdrawalPayload = self
            .call_as("getWithdrawal", vec![ParamValue::from(id)])
            .await?;
        Ok(payload.withdrawal)
    }

    /// method: `getWithdrawals`, params: `[currency, pendingonly]`
    pub async fn get_withdrawals(
        &self,
        currency: &str,
        pendingonly: bool,
    ) -> Result<Vec<Withdrawal>> {
        let params = vec![ParamValue::from(currency), ParamValue::Bool(pendingonly)];
        let payload: WithdrawalsPayload = self.call_as("getWithdrawals", params).await?;
        Ok(payload.withdrawal)
    }

    /// List account ledger entries, newest first.
    ///
    /// method: `getTransactions`, params: `[type, limit]`
    pub async fn get_transactions(
        &self,
        kind: TransactionKind,
        limit: u32,
    ) -> Result<Vec<Transaction>> {
        let params = vec![ParamValue::from(kind.as_str()), ParamValue::from(limit)];
        let payload: TransactionsPayload = self.call_as("getTransactions", params).await?;
        Ok(payload.transaction)
    }
}
