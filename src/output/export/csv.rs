//! CSV export of a parcel's coefficient history
//!
//! One row per stored time index. Complex coefficients are split into a real
//! and an imaginary column, so the file opens in any spreadsheet, pandas or
//! MATLAB without a complex-number parser.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use fabric_rs::output::export::{CsvExporter, Exporter};
//!
//! CsvExporter::default().export(&result, None, "parcel.csv")?;
//! ```
//!
//! **Output** (`parcel.csv`, `L = 2`):
//! ```csv
//! time,re_n0,im_n0,re_n1,im_n1,...,re_n5,im_n5
//! 0.000000,0.282095,0.000000,0.000000,0.000000,...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! let exporter = CsvExporter::new(CsvConfig::default().with_metadata());
//! exporter.export(&result, Some(50), "parcel_light.csv")?;
//! ```
//!
//! ```csv
//! # Fabric Parcel Simulation Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # dt: 0.1
//! # mode: simpleshear(plane=0)
//! # solver: Forward Euler
//! #
//! time,re_n0,im_n0,...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::{FabricError, FabricResult};
use crate::solver::SimulationResult;

use super::Exporter;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 12,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Write the result's metadata as `# key: value` comment lines
    pub include_metadata: bool,

    /// Header of the time column (default: "time")
    pub time_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            time_header: "time".to_string(),
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable the metadata header
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Uniformly spread `n_points` indices over `0..len`, first and last included.
///
/// `None` or a request at least as large as `len` keeps every index.
pub(crate) fn sample_indices(len: usize, n_points: Option<usize>) -> FabricResult<Vec<usize>> {
    match n_points {
        None => Ok((0..len).collect()),
        Some(n) if n >= len => Ok((0..len).collect()),
        Some(n) if n < 2 => Err(FabricError::Export(format!(
            "down-sampling needs at least 2 points, got {n}"
        ))),
        Some(n) => {
            let last = len - 1;
            let mut indices: Vec<usize> = (0..n).map(|i| i * last / (n - 1)).collect();
            indices.dedup();
            Ok(indices)
        }
    }
}

fn format_number(value: f64, config: &CsvConfig) -> String {
    format!("{:.prec$}", value, prec = config.precision)
}

fn write_metadata_header<W: Write>(out: &mut W, result: &SimulationResult) -> FabricResult<()> {
    writeln!(out, "# Fabric Parcel Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    let mut entries: Vec<(&String, &String)> = result.metadata().iter().collect();
    entries.sort();
    for (key, value) in entries {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Write `result` as CSV into any writer.
pub fn write_result_csv<W: Write>(
    out: &mut W,
    result: &SimulationResult,
    n_points: Option<usize>,
    configuration: &CsvConfig,
) -> FabricResult<()> {

    // ============================= Validation =============================

    if result.is_empty() || result.nlm.nrows() == 0 {
        return Err(FabricError::Export("Empty data: result holds no time index".to_string()));
    }

    if result.nlm.nrows() != result.len() {
        return Err(FabricError::Export(format!(
            "Data length mismatch: {} time points versus {} coefficient rows",
            result.len(),
            result.nlm.nrows()
        )));
    }

    let indices = sample_indices(result.len(), n_points)?;
    let delimiter = configuration.delimiter;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        write_metadata_header(out, result)?;
    }

    // ============================= Write Header ===========================

    write!(out, "{}", configuration.time_header)?;
    for k in 0..result.nlm_len() {
        write!(out, "{delimiter}re_n{k}{delimiter}im_n{k}")?;
    }
    writeln!(out)?;

    // ============================= Write Data =============================

    for index in indices {
        write!(out, "{}", format_number(result.time_points[index], configuration))?;
        for value in result.nlm.row(index).iter() {
            write!(
                out,
                "{}{}{}{}",
                delimiter,
                format_number(value.re, configuration),
                delimiter,
                format_number(value.im, configuration)
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    fn export(&self, result: &SimulationResult, n_points: Option<usize>, path: &str) -> FabricResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_result_csv(&mut writer, result, n_points, &self.config)?;
        writer.flush()?;

        log::debug!("exported {} time indices to {}", result.len(), path);
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
