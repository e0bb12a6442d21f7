//! Error type for state allocation and configuration loading.
//!
//! The per-node stages never return errors; non-finite values flow through
//! to the caller unchanged.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`State`](crate::conditions::State) or
/// loading a [`SegmentConfig`](crate::config::SegmentConfig).
#[derive(Debug, Error)]
pub enum FramesError {
    /// A series does not have the segment's node count.
    #[error("field `{field}` has {found} nodes, expected {expected}")]
    NodeCount {
        /// Name of the offending series
        field: &'static str,
        /// Node count of the segment
        expected: usize,
        /// Node count of the series
        found: usize,
    },

    /// A numerics operator is not N×N.
    #[error("operator `{name}` has shape {rows}x{cols}, expected {nodes}x{nodes}")]
    OperatorShape {
        /// `integrate` or `differentiate`
        name: &'static str,
        /// Operator rows
        rows: usize,
        /// Operator columns
        cols: usize,
        /// Node count of the segment
        nodes: usize,
    },

    /// The segment has no nodes at all.
    #[error("segment has no time nodes")]
    Empty,

    /// Reading a configuration file failed.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Parsing a configuration document failed.
    #[error("invalid segment config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
