use serde::{Deserialize, Serialize};

/// One OHLC row in the FXCM schema: separate bid and ask sides plus tick count.
/// Field order matters, it is the column order of the output files.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Candle {
  pub timestamp: i64,
  pub bid_open: f64,
  pub bid_close: f64,
  pub bid_high: f64,
  pub bid_low: f64,
  pub ask_open: f64,
  pub ask_close: f64,
  pub ask_high: f64,
  pub ask_low: f64,
  pub tick_qty: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Instrument {
  pub symbol: String,
  pub visible: bool,
}
