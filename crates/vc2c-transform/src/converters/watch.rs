//! `@Watch('source', options?)` methods become `watch(() => this.source, cb, options)`.
//!
//! The source accessor keeps `this.` so the rewrite pass resolves it like any
//! other member access.

use vc2c_ir::{ArrowBody, IRNode, IRProperty};

use super::{ConvertContext, ConverterResult};
use crate::member::{ClassMember, MemberKind};
use crate::result::{ConversionResult, ReferenceKind, Tag};

const WATCH_DECORATOR: &str = "Watch";

/// `'a.b'` becomes `this.a.b`.
fn watch_source(key: &str) -> IRNode {
    key.split('.')
        .filter(|segment| !segment.is_empty())
        .fold(IRNode::This, IRNode::prop)
}

/// Keep only plain `key: value` entries; spreads, accessors, methods and
/// computed keys are dropped.
fn watch_options(argument: &IRNode) -> IRNode {
    let properties: Vec<IRProperty> = match argument.unannotated() {
        IRNode::ObjectLiteral { properties, .. } => properties
            .iter()
            .filter(|prop| prop.is_plain())
            .cloned()
            .collect(),
        _ => Vec::new(),
    };
    IRNode::object(properties)
}

pub fn convert_watch(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    let MemberKind::Method {
        parameters,
        body,
        is_async,
        ..
    } = &member.kind
    else {
        return Ok(None);
    };
    let Some(decorator) = member.decorator(WATCH_DECORATOR) else {
        return Ok(None);
    };
    let Some(key) = decorator.text_argument(0) else {
        return Ok(None);
    };

    let callback = IRNode::ArrowFunction {
        parameters: parameters.clone(),
        return_type: None,
        body: ArrowBody::Block(body.clone()),
        is_async: *is_async,
    };
    let mut arguments = vec![IRNode::arrow_expr(vec![], watch_source(&key)), callback];
    if let Some(options) = decorator.arguments.get(1) {
        arguments.push(watch_options(options));
    }

    let statement = IRNode::expr_stmt(IRNode::call(IRNode::id("watch"), arguments))
        .with_comments(member.comments.clone());

    Ok(Some(
        ConversionResult::composition(Tag::Watch, ReferenceKind::None, vec![statement])
            .with_import(cx.reactive_import("watch")),
    ))
}
