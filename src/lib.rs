//! Carteiro - a terminal line chart for Chinese Postman timing runs.
//!
//! Carteiro collects (vertex count, execution time) pairs from sequential
//! stdin prompts and renders one annotated line chart in the terminal,
//! blocking until the chart view is dismissed.
//!
//! # Features
//!
//! - Sentinel-terminated interactive collection (Portuguese prompts)
//! - Braille line chart with per-point annotations and exact x ticks
//! - Probe cursor with a full-precision readout
//! - Gruvbox color themes
//! - Clipboard export of the collected samples as TSV
//!
//! # Example
//!
//! ```
//! use carteiro::chart::ChartSpec;
//! use carteiro::session::{Sample, Session};
//!
//! let session = Session::new(3, vec![Sample::new(4, 12.7), Sample::new(6, 45.0)]);
//! let spec = ChartSpec::from_session(&session);
//! assert_eq!(spec.x_axis.ticks, vec![4.0, 6.0]);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod error;
pub mod prompt;
pub mod session;
pub mod ui;
pub mod util;

pub use error::{CarteiroError, Result};
