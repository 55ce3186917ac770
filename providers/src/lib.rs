pub mod fxcm;

use chrono::{DateTime, Utc};
use common::structs::{Candle, Instrument};
use common::timeframes::Timeframe;

/// The candle data source the download loop runs against. One implementation
/// talks to FXCM, tests use an in-memory one.
#[allow(async_fn_in_trait)]
pub trait CandleProvider {
  async fn get_instruments(&self) -> Result<Vec<Instrument>, String>;

  /// Candles for one symbol over the half-open window [from, to), oldest
  /// first. Any failure (auth, network, rate limit, bad symbol) comes back as
  /// a plain message, callers treat them all the same.
  async fn get_candles(&self, symbol: &str, timeframe: Timeframe, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Candle>, String>;
}
