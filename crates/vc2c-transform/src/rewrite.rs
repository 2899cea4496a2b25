//! Reference classification and the `this.x` rewrite pass.
//!
//! Every `this.<name>` in a composition fragment is resolved against the
//! names declared by all fragments, bucketed by their [`ReferenceKind`].
//! Precedence, first match wins: reactive value, non-null reactive value,
//! props, plain variable, framework context key, and finally a flagged
//! `context.root.<name>` fallback.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use vc2c_common::ConvertOptions;
use vc2c_ir::{IRFolder, IRNode, for_each_node, walk_node};

use crate::emits::EmitSignatureTable;
use crate::member::literal_text;
use crate::result::{ConversionResult, ReferenceKind};
use crate::type_oracle::TypeOracle;

const LOW_CONFIDENCE_TODO: &str = "check this conversion, it covers the common cases but not all";

/// `this.$key` names with a counterpart on the setup context.
const CONTEXT_KEYS: &[(&str, &str)] = &[
    ("$attrs", "attrs"),
    ("$slots", "slots"),
    ("$parent", "parent"),
    ("$root", "root"),
    ("$listeners", "listeners"),
];

const EMIT_KEY: &str = "$emit";

/// Declared names bucketed by how references to them are rewritten.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    value: FxHashSet<String>,
    non_null_value: FxHashSet<String>,
    props: FxHashSet<String>,
    variable: FxHashSet<String>,
}

impl ReferenceIndex {
    pub fn new<'r>(results: impl IntoIterator<Item = &'r ConversionResult>) -> Self {
        let mut index = Self::default();
        for result in results {
            let bucket = match result.reference {
                ReferenceKind::VariableValue => &mut index.value,
                ReferenceKind::VariableNonNullValue => &mut index.non_null_value,
                ReferenceKind::Props => &mut index.props,
                ReferenceKind::Variable => &mut index.variable,
                ReferenceKind::None => continue,
            };
            bucket.extend(result.declared_names().map(str::to_string));
        }
        index
    }
}

/// What `this.<name>` turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `name.value`
    Value,
    /// `name.value!`
    NonNullValue,
    /// `props.name`
    Props,
    /// `name`
    Variable,
    /// `context.<key>`
    Context(&'static str),
    /// `emit`, with call-site capture
    Emit,
    /// `context.root.name`, flagged for review
    Unresolved,
}

impl Resolution {
    /// Whether the rewrite makes the enclosing fragment depend on the name.
    pub const fn is_dependency(self) -> bool {
        matches!(
            self,
            Self::Value | Self::NonNullValue | Self::Props | Self::Variable
        )
    }
}

pub fn classify(name: &str, index: &ReferenceIndex) -> Resolution {
    if index.value.contains(name) {
        Resolution::Value
    } else if index.non_null_value.contains(name) {
        Resolution::NonNullValue
    } else if index.props.contains(name) {
        Resolution::Props
    } else if index.variable.contains(name) {
        Resolution::Variable
    } else if name == EMIT_KEY {
        Resolution::Emit
    } else if let Some((_, key)) = CONTEXT_KEYS.iter().find(|(source, _)| *source == name) {
        Resolution::Context(key)
    } else {
        Resolution::Unresolved
    }
}

/// A composition fragment after rewriting, with the names it reads.
#[derive(Debug, Clone, PartialEq)]
pub struct RewrittenResult {
    pub result: ConversionResult,
    pub dependencies: IndexSet<String>,
}

struct ThisRewriter<'a> {
    index: &'a ReferenceIndex,
    options: &'a ConvertOptions,
    oracle: &'a dyn TypeOracle,
    emits: &'a mut EmitSignatureTable,
    dependencies: IndexSet<String>,
    low_confidence: usize,
}

impl ThisRewriter<'_> {
    fn rewrite_access(&mut self, name: String) -> IRNode {
        let resolution = classify(&name, self.index);
        tracing::trace!(member = %name, ?resolution, "rewrite this access");
        if resolution.is_dependency() {
            self.dependencies.insert(name.clone());
        }

        match resolution {
            Resolution::Value => IRNode::prop(IRNode::id(name), "value"),
            Resolution::NonNullValue => IRNode::non_null(IRNode::prop(IRNode::id(name), "value")),
            Resolution::Props => IRNode::prop(IRNode::id(self.options.setup_props_key.as_str()), name),
            Resolution::Variable => IRNode::id(name),
            Resolution::Context(key) => {
                IRNode::prop(IRNode::id(self.options.setup_context_key.as_str()), key)
            }
            Resolution::Emit => IRNode::id("emit"),
            Resolution::Unresolved => {
                self.low_confidence += 1;
                tracing::warn!(member = %name, "unresolved this access, routed through context.root");
                IRNode::prop(
                    IRNode::prop(IRNode::id(self.options.setup_context_key.as_str()), "root"),
                    name,
                )
                .with_todo(LOW_CONFIDENCE_TODO)
            }
        }
    }

    /// `this.$emit('event', payload)`: record the event before rewriting.
    fn capture_emit(&mut self, arguments: &[IRNode]) {
        let Some(event) = arguments.first() else {
            return;
        };
        let payload = arguments
            .get(1)
            .and_then(|payload| self.oracle.expression_type(payload))
            .map(vc2c_ir::TypeNode::widened);
        self.emits.record(literal_text(event), payload);
    }
}

impl IRFolder for ThisRewriter<'_> {
    fn fold_node(&mut self, node: IRNode) -> IRNode {
        if let IRNode::CallExpr {
            callee, arguments, ..
        } = &node
        {
            let is_emit = callee
                .as_this_member()
                .is_some_and(|name| classify(name, self.index) == Resolution::Emit);
            if is_emit {
                self.capture_emit(arguments);
            }
        }

        match node {
            IRNode::PropertyAccess { object, property } if matches!(*object, IRNode::This) => {
                self.rewrite_access(property)
            }
            other => walk_node(self, other),
        }
    }
}

fn count_this(nodes: &[IRNode]) -> usize {
    let mut count = 0;
    for node in nodes {
        for_each_node(node, &mut |inner: &IRNode| {
            if matches!(inner, IRNode::This) {
                count += 1;
            }
        });
    }
    count
}

/// Rewrite every composition fragment and collect the emission table.
///
/// Implied events from every fragment are recorded before any call site is
/// captured, with the member's own type. Object fragments pass through
/// untouched with no dependencies. Sync fragments only feed the emission
/// table and are dropped: their signature and accessors already live in the
/// merged props and computed fragments.
pub fn rewrite_results(
    results: Vec<ConversionResult>,
    options: &ConvertOptions,
    oracle: &dyn TypeOracle,
) -> (Vec<RewrittenResult>, EmitSignatureTable) {
    let index = ReferenceIndex::new(&results);
    let mut emits = EmitSignatureTable::new();
    for event in results.iter().flat_map(|result| &result.events) {
        emits.record(event.name.clone(), event.payload.clone());
    }
    let mut rewritten = Vec::with_capacity(results.len());

    for mut result in results {
        if !result.is_composition() {
            rewritten.push(RewrittenResult {
                result,
                dependencies: IndexSet::new(),
            });
            continue;
        }
        if result.tag.is_sync() {
            tracing::trace!(tag = ?result.tag, "sync fragment consumed");
            continue;
        }

        let nodes = std::mem::take(&mut result.nodes);
        let mut rewriter = ThisRewriter {
            index: &index,
            options,
            oracle,
            emits: &mut emits,
            dependencies: IndexSet::new(),
            low_confidence: 0,
        };
        result.nodes = rewriter.fold_nodes(nodes);
        let dependencies = std::mem::take(&mut rewriter.dependencies);
        let low_confidence = rewriter.low_confidence;

        let leftover = count_this(&result.nodes);
        if leftover > 0 {
            tracing::warn!(tag = ?result.tag, leftover, "this references left after rewrite");
        }
        tracing::debug!(
            tag = ?result.tag,
            dependencies = dependencies.len(),
            low_confidence,
            "rewrote fragment"
        );
        rewritten.push(RewrittenResult {
            result,
            dependencies,
        });
    }

    (rewritten, emits)
}

#[cfg(test)]
#[path = "../tests/rewrite.rs"]
mod tests;
