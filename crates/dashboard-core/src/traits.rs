use async_trait::async_trait;

use crate::{DataError, PricePoint, ProviderProfile};

/// External market-data provider. One implementation talks HTTP; tests plug
/// in scripted fakes. Each method is a single attempt: retry policy lives
/// in the orchestrator, not here.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn profile(&self, symbol: &str) -> Result<ProviderProfile, DataError>;

    /// Daily history for the trailing `lookback_days` calendar days,
    /// ascending by date.
    async fn price_history(
        &self,
        symbol: &str,
        lookback_days: i64,
    ) -> Result<Vec<PricePoint>, DataError>;
}
