//! CSV OHLC loading for the binary.
//!
//! The core only ever sees a finished `PriceSeries`; fetching and caching
//! of raw market data live outside this crate, and a CSV export of that
//! data is the exchange format the binary consumes.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use log::debug;
use serde::Deserialize;

use crate::domain::PricePeriod;
use crate::models::PriceSeries;

#[derive(Debug, Deserialize)]
struct OhlcRecord {
    #[serde(alias = "Date", alias = "date")]
    timestamp: String,
    #[serde(alias = "Open")]
    open: f64,
    #[serde(alias = "High")]
    high: f64,
    #[serde(alias = "Low")]
    low: f64,
    #[serde(alias = "Close")]
    close: f64,
}

/// Load a price series from a CSV file with
/// `timestamp,open,high,low,close` rows.
pub fn load_price_series(path: &Path) -> Result<PriceSeries> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening price data {}", path.display()))?;
    let series = read_price_series(file)
        .with_context(|| format!("reading price data {}", path.display()))?;
    debug!("loaded {} periods from {}", series.len(), path.display());
    Ok(series)
}

fn read_price_series(input: impl Read) -> Result<PriceSeries> {
    let mut reader = csv::Reader::from_reader(input);
    let mut periods = Vec::new();
    for (row, record) in reader.deserialize().enumerate() {
        let record: OhlcRecord = record.with_context(|| format!("malformed OHLC row {row}"))?;
        let timestamp = parse_timestamp(&record.timestamp)
            .with_context(|| format!("bad timestamp in row {row}"))?;
        periods.push(PricePeriod::new(
            timestamp,
            record.open,
            record.high,
            record.low,
            record.close,
        ));
    }
    Ok(PriceSeries::new(periods)?)
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, or date-only `YYYY-MM-DD`
/// (interpreted as midnight UTC).
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    bail!("unrecognized timestamp format: {raw}")
}
