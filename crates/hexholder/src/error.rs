//! Error types for the holder layout pipeline.

use thiserror::Error;

/// Errors that can occur while computing a holder layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The pipeline was given no wrenches to place.
    #[error("empty wrench set: at least one wrench is required")]
    EmptyWrenchSet,

    /// A wrench dimension is zero, negative or not finite.
    #[error("invalid dimension: wrench #{index} has {field} = {value}")]
    InvalidDimension {
        /// Position of the offending wrench in the input set.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value, as written.
        value: String,
    },

    /// A holder parameter is outside its allowed range.
    #[error("invalid parameter: {field} = {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A layout request could not be decoded or encoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
