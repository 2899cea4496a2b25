//! Property consolidation: every prop signature goes into one `interface Props`
//! and a single `defineProps` call binds the props receiver.

use vc2c_ir::{IRNode, IRProperty, TypeNode};

use crate::converters::ConvertContext;
use crate::result::{Attribute, ConversionResult, ReferenceKind, Tag};

const PROPS_INTERFACE: &str = "Props";

/// Default value recoverable from a `@Prop` options argument.
///
/// `{ default: x }` yields `x`; a bare `Boolean` constructor yields `false`.
pub fn default_value(options: &IRNode) -> Option<IRNode> {
    match options.unannotated() {
        IRNode::ObjectLiteral { properties, .. } => properties
            .iter()
            .filter(|prop| prop.is_plain())
            .rev()
            .find(|prop| prop.key.static_name() == Some("default"))
            .map(|prop| prop.value.clone()),
        IRNode::Identifier(name) if name == "Boolean" => Some(IRNode::BooleanLiteral(false)),
        _ => None,
    }
}

fn signature_is_optional(signature: &IRNode) -> bool {
    matches!(signature.unannotated(), IRNode::PropertySignature { optional: true, .. })
}

/// Consolidate all prop-shaped fragments.
///
/// `@Prop` fragments are consumed. Sync fragments contribute their signature
/// and stay in place for the rewrite pass. The merged fragment goes first.
pub fn merge_props(results: Vec<ConversionResult>, cx: &ConvertContext<'_>) -> Vec<ConversionResult> {
    if !results.iter().any(|result| result.tag.is_prop_shaped()) {
        return results;
    }

    let mut signatures = Vec::new();
    let mut names = Vec::new();
    let mut defaults = Vec::new();
    let mut rest = Vec::with_capacity(results.len());

    for result in results {
        if !result.tag.is_prop_shaped() {
            rest.push(result);
            continue;
        }
        let (Some(signature), Some(name)) = (result.nodes.first(), result.name_at(0)) else {
            rest.push(result);
            continue;
        };

        if signature_is_optional(signature) {
            if let Some(default) = result.expr_at(1).and_then(default_value) {
                defaults.push(IRProperty::init(name, default));
            }
        }
        signatures.push(signature.clone());
        names.push(Attribute::name(name));

        if result.tag.is_sync() {
            rest.push(result);
        }
    }

    let define_props = IRNode::call_with_types(
        IRNode::id("defineProps"),
        vec![TypeNode::reference(PROPS_INTERFACE)],
        vec![],
    );
    let initializer = if defaults.is_empty() {
        define_props
    } else {
        IRNode::call(
            IRNode::id("withDefaults"),
            vec![define_props, IRNode::object(defaults)],
        )
    };

    tracing::debug!(props = names.len(), "consolidated props");

    let interface = IRNode::InterfaceDecl {
        name: PROPS_INTERFACE.to_string(),
        members: signatures,
    };
    let binding = IRNode::const_decl(cx.options.setup_props_key.as_str(), initializer);
    let merged = ConversionResult::composition(Tag::Props, ReferenceKind::Props, vec![interface, binding])
        .with_attributes(names);

    std::iter::once(merged).chain(rest).collect()
}
