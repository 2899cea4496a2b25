//! Lifecycle hook methods.
//!
//! Hooks with a composition-API counterpart become `onX(() => { ... })`.
//! `beforeCreate` and `created` have none: setup itself runs at that point,
//! so the body is hoisted into a function and invoked in place.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use vc2c_ir::{ArrowBody, IRNode};

use super::{ConvertContext, ConverterResult};
use crate::member::{ClassMember, MemberKind};
use crate::result::{ConversionResult, ReferenceKind, Tag};

static LIFECYCLE_HOOKS: Lazy<FxHashMap<&'static str, Option<&'static str>>> = Lazy::new(|| {
    [
        ("beforeCreate", None),
        ("created", None),
        ("beforeMount", Some("onBeforeMount")),
        ("mounted", Some("onMounted")),
        ("beforeUpdate", Some("onBeforeUpdate")),
        ("updated", Some("onUpdated")),
        ("activated", Some("onActivated")),
        ("deactivated", Some("onDeactivated")),
        ("beforeDestroy", Some("onBeforeUnmount")),
        ("destroyed", Some("onUnmounted")),
        ("errorCaptured", Some("onErrorCaptured")),
        ("serverPrefetch", Some("onServerPrefetch")),
        ("renderTracked", Some("onRenderTracked")),
        ("renderTriggered", Some("onRenderTriggered")),
    ]
    .into_iter()
    .collect()
});

pub fn is_lifecycle_hook(name: &str) -> bool {
    LIFECYCLE_HOOKS.contains_key(name)
}

/// Composition-API function replacing the hook, if there is one.
pub fn lifecycle_hook_import(name: &str) -> Option<&'static str> {
    LIFECYCLE_HOOKS.get(name).copied().flatten()
}

pub fn convert_lifecycle_hook(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    let MemberKind::Method {
        parameters,
        return_type,
        body,
        is_async,
    } = &member.kind
    else {
        return Ok(None);
    };
    if !is_lifecycle_hook(&member.name) {
        return Ok(None);
    }

    let result = match lifecycle_hook_import(&member.name) {
        Some(hook) => {
            let callback = IRNode::ArrowFunction {
                parameters: Vec::new(),
                return_type: None,
                body: ArrowBody::Block(body.clone()),
                is_async: *is_async,
            };
            let registration = IRNode::expr_stmt(IRNode::call(IRNode::id(hook), vec![callback]))
                .with_comments(member.comments.clone());
            ConversionResult::composition(Tag::LifecycleHook, ReferenceKind::None, vec![registration])
                .with_import(cx.reactive_import(hook))
        }
        None => {
            let hoisted = IRNode::FunctionDecl {
                name: member.name.clone(),
                parameters: parameters.clone(),
                return_type: return_type.clone(),
                body: body.clone(),
                is_async: *is_async,
            }
            .with_comments(member.comments.clone());
            let invocation = IRNode::expr_stmt(IRNode::call(IRNode::id(member.name.as_str()), vec![]));
            ConversionResult::composition(
                Tag::LifecycleHook,
                ReferenceKind::None,
                vec![hoisted, invocation],
            )
        }
    };
    Ok(Some(result))
}
