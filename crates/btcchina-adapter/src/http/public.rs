/*
[INPUT]:  Depth limits and no parameters at all
[OUTPUT]: Market data (order book depth, ticker, midpoint price)
[POS]:    HTTP layer - market data endpoints
[UPDATE]: When adding new market data endpoints or changing response format
*/

use rust_decimal::Decimal;

use crate::http::client::TICKER_ENDPOINT;
use crate::http::envelope::ParamValue;
use crate::http::{BtcChinaClient, Result};
use crate::types::{MarketDepth, MarketDepthPayload, Ticker};

impl BtcChinaClient {
    /// Order book snapshot, `limit` levels per side.
    ///
    /// method: `getMarketDepth2`, params: `[limit]` — market data, but
    /// served by the signed trade endpoint.
    pub async fn get_market_depth(&self, limit: u32) -> Result<MarketDepth> {
        let payload: MarketDepthPayload = self
            .call_as("getMarketDepth2", vec![ParamValue::from(limit)])
            .await?;
        Ok(payload.market_depth)
    }

    /// Ticker snapshot from the market-data host. Unauthenticated GET.
    ///
    /// GET https://data.btcchina.com/data/ticker
    pub async fn ticker(&self) -> Result<Ticker> {
        let payload = self.get_public(TICKER_ENDPOINT).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Midpoint of the ticker's best bid and ask.
    pub async fn current_price(&self) -> Result<Decimal> {
        let ticker = self.ticker().await?;
        Ok((ticker.buy + ticker.sell) / Decimal::TWO)
    }
}
