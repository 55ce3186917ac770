use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Months, TimeZone, Utc};

use crate::error::DownloadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timeframe {
  Minute1,
  Minute5,
  Minute15,
  Minute30,
  Hour1,
  Hour2,
  Hour3,
  Hour4,
  Hour8,
  Day1,
  Week1,
  Month1,
}

pub const SUPPORTED_TIMEFRAMES: [Timeframe; 12] = [
  Timeframe::Minute1,
  Timeframe::Minute5,
  Timeframe::Minute15,
  Timeframe::Minute30,
  Timeframe::Hour1,
  Timeframe::Hour2,
  Timeframe::Hour3,
  Timeframe::Hour4,
  Timeframe::Hour8,
  Timeframe::Day1,
  Timeframe::Week1,
  Timeframe::Month1,
];

/// Timeframes sharing a chunk step size. The step is how much history one
/// provider request is allowed to span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
  Large,
  Medium,
  Small,
}

/// Chunk step size. Large and medium tiers step in calendar months so windows
/// stay aligned to date boundaries (2000-01-01, 2010-01-01, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
  Months(u32),
  Weeks(i64),
}

impl Timeframe {
  pub fn code(&self) -> &'static str {
    match self {
      Timeframe::Minute1 => "m1",
      Timeframe::Minute5 => "m5",
      Timeframe::Minute15 => "m15",
      Timeframe::Minute30 => "m30",
      Timeframe::Hour1 => "H1",
      Timeframe::Hour2 => "H2",
      Timeframe::Hour3 => "H3",
      Timeframe::Hour4 => "H4",
      Timeframe::Hour8 => "H8",
      Timeframe::Day1 => "D1",
      Timeframe::Week1 => "W1",
      Timeframe::Month1 => "M1",
    }
  }

  pub fn tier(&self) -> Tier {
    match self {
      Timeframe::Day1 | Timeframe::Week1 | Timeframe::Month1 => Tier::Large,
      Timeframe::Hour1 | Timeframe::Hour2 | Timeframe::Hour3 | Timeframe::Hour4 | Timeframe::Hour8 => Tier::Medium,
      Timeframe::Minute1 | Timeframe::Minute5 | Timeframe::Minute15 | Timeframe::Minute30 => Tier::Small,
    }
  }
}

impl fmt::Display for Timeframe {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    return write!(f, "{}", self.code());
  }
}

impl FromStr for Timeframe {
  type Err = DownloadError;

  // codes are case sensitive: m1 is one minute, M1 is one month
  fn from_str(s: &str) -> Result<Timeframe, DownloadError> {
    match s {
      "m1" => Ok(Timeframe::Minute1),
      "m5" => Ok(Timeframe::Minute5),
      "m15" => Ok(Timeframe::Minute15),
      "m30" => Ok(Timeframe::Minute30),
      "H1" => Ok(Timeframe::Hour1),
      "H2" => Ok(Timeframe::Hour2),
      "H3" => Ok(Timeframe::Hour3),
      "H4" => Ok(Timeframe::Hour4),
      "H8" => Ok(Timeframe::Hour8),
      "D1" => Ok(Timeframe::Day1),
      "W1" => Ok(Timeframe::Week1),
      "M1" => Ok(Timeframe::Month1),
      _ => Err(DownloadError::Configuration(format!(
        "unrecognized timeframe: {}, expected one of m1, m5, m15, m30, H1, H2, H3, H4, H8, D1, W1, M1",
        s
      ))),
    }
  }
}

impl Tier {
  pub fn step(&self) -> Step {
    match self {
      Tier::Large => Step::Months(120),
      Tier::Medium => Step::Months(12),
      Tier::Small => Step::Weeks(1),
    }
  }

  /// Offset added to each successive window start. The API includes the
  /// boundary candle for sub-daily timeframes, so those windows skip one
  /// minute past the previous end to not fetch it twice.
  pub fn boundary_adjustment(&self) -> Duration {
    match self {
      Tier::Large => Duration::zero(),
      Tier::Medium | Tier::Small => Duration::minutes(1),
    }
  }
}

impl Step {
  pub fn advance(&self, timestamp: DateTime<Utc>) -> DateTime<Utc> {
    match self {
      Step::Months(months) => timestamp + Months::new(*months),
      Step::Weeks(weeks) => timestamp + Duration::weeks(*weeks),
    }
  }
}

/// All downloads start at the same fixed date, there is no earlier data worth
/// having and no runtime override.
pub fn history_anchor() -> DateTime<Utc> {
  return Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
}

/// Number of step-sized windows needed to walk from start past now. Zero when
/// start is already at or past now, otherwise the ceiling of the remaining
/// span divided by the step.
pub fn num_chunks(timeframe: Timeframe, start: DateTime<Utc>, now: DateTime<Utc>) -> usize {
  let step = timeframe.tier().step();
  let mut pointer = start;
  let mut count = 0;
  while pointer < now {
    pointer = step.advance(pointer);
    count += 1;
  }
  return count;
}
