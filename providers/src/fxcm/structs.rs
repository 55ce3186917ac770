use serde::{Deserialize, Serialize};

// candle rows come back as positional arrays:
// [timestamp, bidopen, bidclose, bidhigh, bidlow, askopen, askclose, askhigh, asklow, tickqty]
pub type FxcmCandleRow = (i64, f64, f64, f64, f64, f64, f64, f64, f64, i64);

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FxcmResponseStatus {
  pub executed: bool,
  #[serde(default)]
  pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FxcmCandlesResponse {
  pub response: FxcmResponseStatus,
  #[serde(default)]
  pub candles: Vec<FxcmCandleRow>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FxcmInstrumentsResponse {
  pub response: FxcmResponseStatus,
  pub data: FxcmInstrumentsData,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FxcmInstrumentsData {
  pub instrument: Vec<FxcmInstrument>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FxcmInstrument {
  pub symbol: String,
  pub visible: bool,
  pub order: i64,
}
