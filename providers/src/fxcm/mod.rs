pub mod structs;

use chrono::{DateTime, Utc};
use common::http_client;
use common::structs::{Candle, Instrument};
use common::timeframes::Timeframe;
use structs::*;

use crate::CandleProvider;

const DEFAULT_BASE_URL: &str = "https://api-demo.fxcm.com";
// the API caps a single candle request at 10000 rows, which is why downloads
// are chunked into tier-sized windows at all
const MAX_ROWS_PER_REQUEST: u32 = 10000;

pub struct Fxcm {
  http_client: reqwest::Client,
  base_url: String,
  access_token: String,
}

impl Fxcm {
  pub fn new(access_token: &str) -> Fxcm {
    return Fxcm::with_base_url(access_token, DEFAULT_BASE_URL);
  }

  pub fn with_base_url(access_token: &str, base_url: &str) -> Fxcm {
    return Fxcm {
      http_client: reqwest::Client::new(),
      base_url: String::from(base_url),
      access_token: String::from(access_token),
    };
  }

  fn request_headers(&self) -> Vec<(String, String)> {
    return vec![
      (String::from("Authorization"), format!("Bearer {}", self.access_token)),
      (String::from("Accept"), String::from("application/json")),
    ];
  }
}

impl CandleProvider for Fxcm {
  async fn get_instruments(&self) -> Result<Vec<Instrument>, String> {
    let request_url = format!("{}/trading/get_instruments", self.base_url);
    let response_body = http_client::http_get_json::<FxcmInstrumentsResponse>(&self.http_client, &request_url, &self.request_headers()).await?;
    if response_body.response.executed == false {
      return Err(format!("get_instruments failed: {}", response_body.response.error));
    }
    let instruments = response_body
      .data
      .instrument
      .into_iter()
      .map(|instrument| {
        return Instrument {
          symbol: instrument.symbol,
          visible: instrument.visible,
        };
      })
      .collect::<Vec<_>>();
    return Ok(instruments);
  }

  async fn get_candles(&self, symbol: &str, timeframe: Timeframe, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Candle>, String> {
    log::debug!("get_candles: symbol = {} timeframe = {} from = {} to = {}", symbol, timeframe, from, to);
    let mut request_url = url::Url::parse(&format!("{}/candles/{}", self.base_url, timeframe)).map_err(|err| format!("{}", err))?;
    request_url.query_pairs_mut().append_pair("symbol", symbol);
    request_url.query_pairs_mut().append_pair("from", &format!("{}", from.timestamp()));
    request_url.query_pairs_mut().append_pair("to", &format!("{}", to.timestamp()));
    request_url.query_pairs_mut().append_pair("num", &format!("{}", MAX_ROWS_PER_REQUEST));
    let request_url = request_url.as_str().to_string();
    let response_body = http_client::http_get_json::<FxcmCandlesResponse>(&self.http_client, &request_url, &self.request_headers()).await?;
    if response_body.response.executed == false {
      return Err(format!("get_candles failed: {}", response_body.response.error));
    }
    let candles = response_body.candles.iter().map(candle_from_row).collect::<Vec<_>>();
    return Ok(candles);
  }
}

pub fn candle_from_row(row: &FxcmCandleRow) -> Candle {
  let (timestamp, bid_open, bid_close, bid_high, bid_low, ask_open, ask_close, ask_high, ask_low, tick_qty) = *row;
  return Candle {
    timestamp,
    bid_open,
    bid_close,
    bid_high,
    bid_low,
    ask_open,
    ask_close,
    ask_high,
    ask_low,
    tick_qty,
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_candle_rows_from_positional_arrays() {
    let response_body = r#"{
      "response": {"executed": true},
      "candles": [
        [946684800, 1.0087, 1.0085, 1.009, 1.008, 1.0089, 1.0087, 1.0092, 1.0082, 1355],
        [946684860, 1.0085, 1.0088, 1.0091, 1.0084, 1.0087, 1.009, 1.0093, 1.0086, 1209]
      ]
    }"#;
    let parsed = serde_json::from_str::<FxcmCandlesResponse>(response_body).unwrap();
    assert!(parsed.response.executed);
    assert_eq!(parsed.candles.len(), 2);
    let candle = candle_from_row(&parsed.candles[0]);
    assert_eq!(candle.timestamp, 946684800);
    assert_eq!(candle.bid_open, 1.0087);
    assert_eq!(candle.bid_low, 1.008);
    assert_eq!(candle.ask_high, 1.0092);
    assert_eq!(candle.tick_qty, 1355);
  }

  #[test]
  fn parses_failed_responses_without_a_candles_field() {
    let response_body = r#"{"response": {"executed": false, "error": "Unauthorized"}}"#;
    let parsed = serde_json::from_str::<FxcmCandlesResponse>(response_body).unwrap();
    assert_eq!(parsed.response.executed, false);
    assert_eq!(parsed.response.error, "Unauthorized");
    assert_eq!(parsed.candles.len(), 0);
  }

  #[test]
  fn parses_instruments_response() {
    let response_body = r#"{
      "response": {"executed": true},
      "data": {"instrument": [
        {"symbol": "EUR/USD", "visible": true, "order": 1},
        {"symbol": "XAU/USD", "visible": false, "order": 17}
      ]}
    }"#;
    let parsed = serde_json::from_str::<FxcmInstrumentsResponse>(response_body).unwrap();
    assert_eq!(parsed.data.instrument.len(), 2);
    assert_eq!(parsed.data.instrument[0].symbol, "EUR/USD");
    assert_eq!(parsed.data.instrument[1].visible, false);
  }
}
