// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for the fallible entry points of this crate.
//!
//! Geometric queries themselves never fail: degenerate input yields
//! non-finite values or `None`. Only configuration loading and the checked
//! statistics helpers report errors.

use thiserror::Error;

/// Errors produced by configuration and checked statistics helpers.
#[derive(Debug, Error)]
pub enum GeomError {
    /// A statistic was requested over an empty point set.
    #[error("point set is empty")]
    EmptyPointSet,
    /// A tolerance value is negative, non-finite, or otherwise unusable.
    #[error("invalid tolerance `{name}`: {value}")]
    InvalidTolerance {
        /// Field name as it appears in the serialized config.
        name: &'static str,
        /// Offending value, rendered for display.
        value: String,
    },
    /// Config JSON could not be parsed or produced.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
