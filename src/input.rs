//! CSV telemetry I/O.
//!
//! Accepted layouts: a header with `time_s` and `value` columns (any order,
//! extra columns ignored), or a single column of values under any header.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;

const TIME_COLUMN: &str = "time_s";
const VALUE_COLUMN: &str = "value";

/// A telemetry series read from disk.
#[derive(Debug)]
pub struct Telemetry {
    times: Option<Vec<f64>>,
    values: Vec<f64>,
}

impl Telemetry {
    /// Sample values in file order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Timestamps in seconds, when the file has a `time_s` column.
    pub fn times(&self) -> Option<&[f64]> {
        self.times.as_deref()
    }

    /// Sampling rate implied by the median timestamp spacing.
    pub fn inferred_rate_hz(&self) -> Option<f64> {
        self.times.as_deref().and_then(infer_rate_hz)
    }
}

/// Reads a telemetry CSV file.
pub fn read_telemetry(path: &Path) -> Result<Telemetry> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open input: {}", path.display()))?;
    read_telemetry_from(file).with_context(|| format!("failed to read CSV: {}", path.display()))
}

/// Reads telemetry CSV from any reader.
pub fn read_telemetry_from<R: Read>(reader: R) -> Result<Telemetry> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = rdr.headers().context("missing CSV header")?.clone();

    let value_idx = match headers.iter().position(|h| h == VALUE_COLUMN) {
        Some(i) => i,
        None if headers.len() == 1 => 0,
        None => bail!("no {VALUE_COLUMN:?} column in header {:?}", headers),
    };
    let time_idx = headers.iter().position(|h| h == TIME_COLUMN);

    let mut values = Vec::new();
    let mut times = time_idx.map(|_| Vec::new());
    for (row, record) in rdr.records().enumerate() {
        // Header is line 1.
        let line = row + 2;
        let record = record.with_context(|| format!("malformed CSV at line {line}"))?;
        values.push(parse_field(&record, value_idx, line)?);
        if let (Some(idx), Some(times)) = (time_idx, times.as_mut()) {
            times.push(parse_field(&record, idx, line)?);
        }
    }
    if values.is_empty() {
        bail!("no data rows");
    }

    Ok(Telemetry { times, values })
}

fn parse_field(record: &StringRecord, idx: usize, line: usize) -> Result<f64> {
    let field = record
        .get(idx)
        .with_context(|| format!("line {line}: missing column {idx}"))?;
    field
        .parse::<f64>()
        .with_context(|| format!("line {line}: invalid number {field:?}"))
}

/// Estimates the sampling rate from the median positive spacing.
///
/// Returns `None` for fewer than two timestamps or no positive spacing.
pub fn infer_rate_hz(times: &[f64]) -> Option<f64> {
    let mut steps: Vec<f64> = times
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| d.is_finite() && *d > 0.0)
        .collect();
    if steps.is_empty() {
        return None;
    }
    steps.sort_by(|a, b| a.total_cmp(b));
    let mid = steps.len() / 2;
    let median = if steps.len() % 2 == 0 {
        0.5 * (steps[mid - 1] + steps[mid])
    } else {
        steps[mid]
    };
    Some(1.0 / median)
}

#[derive(Serialize)]
struct Row {
    time_s: f64,
    value: f64,
}

/// Writes a `time_s,value` CSV file.
pub fn write_telemetry(path: &Path, times: &[f64], values: &[f64]) -> Result<()> {
    if times.len() != values.len() {
        bail!(
            "times and values differ in length: {} vs {}",
            times.len(),
            values.len()
        );
    }
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create output: {}", path.display()))?;
    for (&time_s, &value) in times.iter().zip(values) {
        wtr.serialize(Row { time_s, value })?;
    }
    wtr.flush()
        .with_context(|| format!("failed to write output: {}", path.display()))?;
    Ok(())
}
