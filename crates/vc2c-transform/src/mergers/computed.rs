//! Accessor pairing: getters, setters and sync accessors become `computed`.

use vc2c_ir::{IRNode, IRProperty, TypeNode};

use crate::converters::ConvertContext;
use crate::result::{Attribute, ConversionResult, ReferenceKind, Tag};

#[derive(Default)]
struct Partition {
    getters: Vec<ConversionResult>,
    setters: Vec<ConversionResult>,
    syncs: Vec<ConversionResult>,
    others: Vec<ConversionResult>,
}

fn partition(results: Vec<ConversionResult>) -> Partition {
    let mut parts = Partition::default();
    for result in results {
        match result.tag {
            Tag::ComputedGetter => parts.getters.push(result),
            Tag::ComputedSetter => parts.setters.push(result),
            tag if tag.is_sync() => parts.syncs.push(result),
            _ => parts.others.push(result),
        }
    }
    parts
}

fn first_node(result: &ConversionResult) -> IRNode {
    result.nodes.first().cloned().unwrap_or(IRNode::Undefined)
}

/// `const <name> = computed<T>(<argument>)`
fn computed_declaration(name: &str, ty: Option<&TypeNode>, argument: IRNode) -> IRNode {
    IRNode::const_decl(
        name,
        IRNode::call_with_types(
            IRNode::id("computed"),
            ty.cloned().into_iter().collect(),
            vec![argument],
        ),
    )
}

/// `{ get: ..., set: ... }` on separate lines.
fn accessor_object(get: IRNode, set: IRNode) -> IRNode {
    IRNode::object_multiline(vec![IRProperty::init("get", get), IRProperty::init("set", set)])
}

fn computed_result(name: &str, declaration: IRNode, cx: &ConvertContext<'_>) -> ConversionResult {
    ConversionResult::composition(Tag::Computed, ReferenceKind::VariableValue, vec![declaration])
        .with_attributes(vec![Attribute::name(name)])
        .with_import(cx.reactive_import("computed"))
}

/// Pair each getter with its same-named setter.
///
/// Output order: merged accessor declarations, then the sync fragments
/// unchanged, then everything else unchanged. A setter without a getter still
/// yields a writable `computed` whose getter is flagged for review.
pub fn merge_computed(results: Vec<ConversionResult>, cx: &ConvertContext<'_>) -> Vec<ConversionResult> {
    let Partition {
        getters,
        mut setters,
        syncs,
        others,
    } = partition(results);
    if getters.is_empty() && setters.is_empty() && syncs.is_empty() {
        return others;
    }

    let mut merged = Vec::with_capacity(getters.len() + setters.len() + syncs.len());

    for getter in &getters {
        let Some(name) = getter.name_at(0) else {
            continue;
        };
        let setter_index = setters.iter().position(|setter| setter.declares(name));
        let (get, mut comments) = first_node(getter).take_comments();

        let declaration = match setter_index.map(|index| setters.remove(index)) {
            Some(setter) => {
                let (set, setter_comments) = first_node(&setter).take_comments();
                comments.merge(setter_comments);
                computed_declaration(name, getter.types.first(), accessor_object(get, set))
            }
            None => computed_declaration(name, getter.types.first(), get),
        };
        tracing::trace!(member = name, writable = setter_index.is_some(), "merged computed accessor");
        merged.push(computed_result(name, declaration.with_comments(comments), cx));
    }

    for setter in setters {
        let Some(name) = setter.name_at(0) else {
            continue;
        };
        let (set, comments) = first_node(&setter).take_comments();
        let get = IRNode::arrow_expr(vec![], IRNode::Undefined)
            .with_todo(&format!("'{name}' only had a setter; provide a getter"));
        let declaration = computed_declaration(name, None, accessor_object(get, set));
        tracing::warn!(member = name, "setter without getter");
        merged.push(computed_result(name, declaration.with_comments(comments), cx));
    }

    for sync in &syncs {
        let Some(name) = sync.name_at(1) else {
            continue;
        };
        let [_, get, set, ..] = sync.nodes.as_slice() else {
            continue;
        };
        let declaration =
            computed_declaration(name, sync.types.first(), accessor_object(get.clone(), set.clone()));
        merged.push(computed_result(name, declaration, cx));
    }

    tracing::debug!(
        computed = merged.len(),
        syncs = syncs.len(),
        others = others.len(),
        "merged accessors"
    );
    merged.extend(syncs);
    merged.extend(others);
    merged
}
