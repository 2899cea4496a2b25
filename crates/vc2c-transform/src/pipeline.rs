//! End-to-end conversion of one class body.

use vc2c_common::{ConvertOptions, ImportDecl, ImportSet};
use vc2c_ir::IRNode;

use crate::converters::{ConvertContext, convert_member};
use crate::emits::synthesize_emit_declaration;
use crate::error::ConvertError;
use crate::member::ClassMember;
use crate::mergers::run_mergers;
use crate::reorder::reorder;
use crate::result::ConversionResult;
use crate::rewrite::rewrite_results;
use crate::type_oracle::TypeOracle;

/// Ordered output of a conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    /// Statements for the setup body, in declaration order.
    pub statements: Vec<IRNode>,
    /// Named imports per module, deduplicated, in first-seen order.
    pub imports: Vec<ImportDecl>,
    /// Final fragments, object fragments included.
    pub results: Vec<ConversionResult>,
    /// Members no converter accepted.
    pub skipped: Vec<String>,
}

/// Convert every member, merge, rewrite, reorder and append the `emit`
/// declaration.
///
/// Fails only on a structurally invalid member.
pub fn convert_members(
    members: &[ClassMember],
    options: &ConvertOptions,
    oracle: &dyn TypeOracle,
) -> Result<ConversionOutput, ConvertError> {
    let _span = tracing::debug_span!("convert_members", members = members.len()).entered();

    let cx = ConvertContext::new(options, oracle);
    let mut converted = Vec::with_capacity(members.len());
    let mut skipped = Vec::new();
    for member in members {
        match convert_member(member, &cx)? {
            Some(result) => converted.push(result),
            None => {
                tracing::warn!(member = %member.name, shape = member.kind.shape_name(), "member not converted");
                skipped.push(member.name.clone());
            }
        }
    }

    let merged = run_mergers(converted, &cx);
    let (rewritten, emits) = rewrite_results(merged, options, oracle);
    let mut results = reorder(rewritten);
    results.extend(synthesize_emit_declaration(&emits));

    let mut imports = ImportSet::new();
    for result in &results {
        imports.extend(&result.imports);
    }
    let statements = results
        .iter()
        .filter(|result| result.is_composition())
        .flat_map(|result| result.nodes.iter().cloned())
        .collect();

    tracing::debug!(
        fragments = results.len(),
        skipped = skipped.len(),
        events = emits.len(),
        "conversion finished"
    );

    Ok(ConversionOutput {
        statements,
        imports: imports.into_decls(),
        results,
        skipped,
    })
}
