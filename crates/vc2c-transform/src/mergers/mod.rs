//! Fragment mergers.
//!
//! Mergers run after every member is converted and before the rewrite pass.
//! Each consumes the fragments of one feature and replaces them with combined
//! declarations; fragments of other features pass through in order.

mod computed;
mod props;

pub use computed::merge_computed;
pub use props::{default_value, merge_props};

use crate::converters::ConvertContext;
use crate::result::ConversionResult;

pub type Merger = fn(Vec<ConversionResult>, &ConvertContext<'_>) -> Vec<ConversionResult>;

/// Mergers in the order they run.
pub const MERGERS: &[Merger] = &[merge_computed, merge_props];

pub fn run_mergers(results: Vec<ConversionResult>, cx: &ConvertContext<'_>) -> Vec<ConversionResult> {
    MERGERS.iter().fold(results, |results, merger| merger(results, cx))
}

#[cfg(test)]
#[path = "../../tests/mergers.rs"]
mod tests;
