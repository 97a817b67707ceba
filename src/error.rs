//! Error types for table configuration.
//!
//! Rendering itself never fails; only loading a [`TableTheme`](crate::TableTheme)
//! does.

use thiserror::Error;

/// Errors raised while loading table configuration.
#[derive(Debug, Error)]
pub enum TableError {
	/// The theme document could not be parsed.
	#[error("invalid table theme: {0}")]
	InvalidTheme(#[from] serde_json::Error),

	/// A column width is not a positive number of pixels.
	#[error("column {column} has invalid width {value}; widths must be positive")]
	InvalidWidth {
		/// Column index.
		column: usize,
		/// Offending width.
		value: u32,
	},
}

/// Result type for table configuration.
pub type Result<T, E = TableError> = std::result::Result<T, E>;
