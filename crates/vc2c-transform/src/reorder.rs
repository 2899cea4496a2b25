//! Dependency-respecting reordering.
//!
//! Fragments without dependencies keep their order and seed the output. The
//! rest are placed scan by scan once every name they read is available. A
//! scan that places nothing ends the pass: the residue is appended in its
//! original order, forward references and cycles included.

use rustc_hash::FxHashSet;

use crate::result::ConversionResult;
use crate::rewrite::RewrittenResult;

pub fn reorder(results: Vec<RewrittenResult>) -> Vec<ConversionResult> {
    let total = results.len();
    let (seeds, mut pending): (Vec<_>, Vec<_>) = results
        .into_iter()
        .partition(|rewritten| rewritten.dependencies.is_empty());

    let mut available: FxHashSet<String> = FxHashSet::default();
    let mut ordered = Vec::with_capacity(total);
    for seed in seeds {
        available.extend(seed.result.declared_names().map(str::to_string));
        ordered.push(seed.result);
    }

    let mut scans = 0usize;
    while !pending.is_empty() {
        scans += 1;
        let mut placed_any = false;
        let mut remaining = Vec::with_capacity(pending.len());
        for candidate in pending {
            let ready = candidate
                .dependencies
                .iter()
                .all(|dependency| available.contains(dependency));
            if ready {
                available.extend(candidate.result.declared_names().map(str::to_string));
                ordered.push(candidate.result);
                placed_any = true;
            } else {
                remaining.push(candidate);
            }
        }
        pending = remaining;

        if !placed_any {
            tracing::warn!(
                unresolved = pending.len(),
                "unresolvable dependencies, keeping original order"
            );
            ordered.extend(pending.drain(..).map(|rewritten| rewritten.result));
        }
    }

    tracing::debug!(fragments = ordered.len(), scans, "reordered fragments");
    ordered
}

#[cfg(test)]
#[path = "../tests/reorder.rs"]
mod tests;
