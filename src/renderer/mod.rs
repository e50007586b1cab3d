//! Card renderer
//!
//! This module turns merged card data into Janet source lines and writes
//! them to the configured output directory.

pub mod config;
pub mod janet;
pub mod output;

pub use config::{ConfigError, GeneratorConfig};
pub use janet::{render, render_lines, EMPTY_COLLECTION};
pub use output::{card_path, file_stem, write_card};
