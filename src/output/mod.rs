//! Output of simulation results
//!
//! ```text
//! output/
//! ├── mod.rs
//! └── export/             ← Data export
//!     ├── mod.rs          ← Exporter trait
//!     └── csv.rs
//! ```
//!
//! Plotting is left to external tools: the CSV layout (one row per time
//! index, a real and an imaginary column per coefficient) loads directly
//! into pandas or a spreadsheet.

pub mod export;

pub use export::{CsvConfig, CsvExporter, Exporter};
