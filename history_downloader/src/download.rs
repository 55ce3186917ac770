use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use common::error::DownloadError;
use common::timeframes::{self, Timeframe};
use providers::CandleProvider;

pub struct DownloadSettings {
  pub out_dir: PathBuf,
  pub recompute_bound: bool,
}

pub fn output_path(out_dir: &Path, symbol: &str, timeframe: Timeframe) -> PathBuf {
  return out_dir.join(format!("{}_{}.csv", symbol.replace('/', ""), timeframe));
}

/// Downloads every requested symbol in sequence, the full history of one
/// symbol before the next begins. An empty request means all instruments the
/// provider lists.
pub async fn run<P: CandleProvider>(
  provider: &P,
  requested_symbols: &[String],
  timeframe: Timeframe,
  settings: &DownloadSettings,
) -> Result<(), DownloadError> {
  let symbols = if requested_symbols.len() == 0 {
    let instruments = provider.get_instruments().await.map_err(DownloadError::Provider)?;
    let all_symbols = instruments
      .into_iter()
      .filter(|instrument| instrument.visible)
      .map(|instrument| instrument.symbol)
      .collect::<Vec<_>>();
    log::info!("all instruments: {:?}", all_symbols);
    all_symbols
  } else {
    requested_symbols.to_vec()
  };
  log::info!("symbols to download: {:?}", symbols);
  for symbol in &symbols {
    download_symbol(provider, symbol, timeframe, settings, Utc::now()).await?;
  }
  return Ok(());
}

/// Walks step-sized windows from the fixed anchor towards `now`, appending
/// each window's candles to the symbol's CSV file as soon as they arrive.
pub async fn download_symbol<P: CandleProvider>(
  provider: &P,
  symbol: &str,
  timeframe: Timeframe,
  settings: &DownloadSettings,
  now: DateTime<Utc>,
) -> Result<(), DownloadError> {
  let step = timeframe.tier().step();
  let boundary_adjustment = timeframe.tier().boundary_adjustment();
  let mut start = timeframes::history_anchor();
  let mut end = step.advance(start);
  // the bound is fixed at loop entry, a run that outlives the estimate stops
  // short of the present unless recompute_bound is set
  let total_chunks = timeframes::num_chunks(timeframe, start, now);
  let path = output_path(&settings.out_dir, symbol, timeframe);
  log::info!("{}: downloading {} chunks to {}", symbol, total_chunks, path.display());
  let file = std::fs::OpenOptions::new().create(true).append(true).open(&path)?;
  // one writer for the whole symbol, so the header row goes out exactly once
  // ahead of the first chunk that has rows
  let mut writer = csv::Writer::from_writer(file);
  let mut chunk_index = 0;
  loop {
    let reached_bound = if settings.recompute_bound {
      start >= Utc::now()
    } else {
      chunk_index >= total_chunks
    };
    if reached_bound {
      break;
    }
    log::info!("{}: chunk {} / {} [{} - {})", symbol, chunk_index + 1, total_chunks, start, end);
    let candles = provider
      .get_candles(symbol, timeframe, start, end)
      .await
      .map_err(DownloadError::Provider)?;
    for candle in &candles {
      writer.serialize(candle).map_err(|err| DownloadError::Filesystem(format!("{}", err)))?;
    }
    writer.flush()?;
    // the next window starts where this one ended, plus the tier's nudge past
    // the boundary candle
    start = end + boundary_adjustment;
    end = step.advance(end);
    chunk_index += 1;
  }
  return Ok(());
}
