//! Export of simulation results
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the file format. Each format lives in its
//! own sub-module; a new format is a new file implementing the trait.
//!
//! # Available formats
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use fabric_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Every time index
//! exporter.export(&result, None, "parcel.csv")?;
//!
//! // Down-sampled to 50 time indices
//! exporter.export(&result, Some(50), "parcel_light.csv")?;
//! ```

pub mod csv;

pub use csv::{write_result_csv, CsvConfig, CsvExporter};

use crate::error::FabricResult;
use crate::solver::SimulationResult;

/// Abstraction over export formats.
///
/// # Parameter `n_points`
///
/// - `None`: exports every time index
/// - `Some(n)`: uniformly down-samples to `n` indices, always keeping the
///   first and the last one
pub trait Exporter {
    /// Write `result` to `path`.
    ///
    /// # Errors
    ///
    /// - [`FabricError::Export`](crate::error::FabricError::Export) when the
    ///   result holds no data or `n_points < 2`
    /// - [`FabricError::Io`](crate::error::FabricError::Io) when the file
    ///   cannot be written
    fn export(&self, result: &SimulationResult, n_points: Option<usize>, path: &str) -> FabricResult<()>;
}
