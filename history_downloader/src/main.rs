mod download;

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use common::timeframes::Timeframe;
use download::DownloadSettings;
use providers::fxcm::Fxcm;

/// FXCM historical data downloader. Downloads forex and index CFD candles
/// from 2000-01-01 to today, one CSV file per symbol.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// FXCM API token to authorize for access, works with a demo account key
  #[arg(short, long, env = "FXCM_ACCESS_TOKEN")]
  token: String,

  /// symbols to download, repeat the flag for multiple: -s EUR/USD -s AUD/USD,
  /// downloads all instruments by default
  #[arg(short, long)]
  symbol: Vec<String>,

  /// timeframe to download: m1, m5, m15, m30, H1, H2, H3, H4, H8, D1, W1, M1
  #[arg(short = 'p', long, default_value = "m1")]
  period: String,

  /// path to store downloaded data in
  #[arg(long, default_value = "./")]
  path: PathBuf,

  /// recompute the chunk bound every iteration so long runs catch up to the
  /// present instead of stopping at the count estimated at loop start
  #[arg(long)]
  recompute_bound: bool,
}

fn main() {
  // load env vars
  dotenv::dotenv().ok();
  // logger
  simple_logger::init_with_level(log::Level::Info).unwrap();
  // cli args
  let args = Args::parse();
  // validate timeframe before touching the network or the filesystem
  let timeframe = match Timeframe::from_str(&args.period) {
    Ok(timeframe) => timeframe,
    Err(err) => {
      log::error!("{}", err);
      std::process::exit(1);
    }
  };
  // runtime
  let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
  // run
  rt.block_on(async {
    let provider = Fxcm::new(&args.token);
    let settings = DownloadSettings {
      out_dir: args.path,
      recompute_bound: args.recompute_bound,
    };
    let result = download::run(&provider, &args.symbol, timeframe, &settings).await;
    if let Err(err) = result {
      log::error!("download failed: {}", err);
      std::process::exit(1);
    }
  });
}
