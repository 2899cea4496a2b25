//! `@PropSync` and `@ModelSync` properties.
//!
//! Both produce three nodes: the property signature of the synced prop, a
//! getter reading it from the props object and a setter emitting the change.
//! The accessor merger later turns the pair into a writable `computed`, the
//! props merger takes the signature, and the rewrite pass records the implied
//! event before dropping the fragment.

use vc2c_ir::{IRNode, IRParam, TypeNode};

use super::{ConvertContext, ConverterResult};
use crate::error::ConvertError;
use crate::member::{ClassMember, Decorator};
use crate::result::{Attribute, ConversionResult, ReferenceKind, Tag};

const PROP_SYNC_DECORATOR: &str = "PropSync";
const MODEL_SYNC_DECORATOR: &str = "ModelSync";

/// Find `decorator_name` on `member`, rejecting it on anything but a property.
fn sync_decorator<'m>(
    member: &'m ClassMember,
    decorator_name: &str,
) -> Result<Option<&'m Decorator>, ConvertError> {
    let Some(decorator) = member.decorator(decorator_name) else {
        return Ok(None);
    };
    if !member.is_property() {
        return Err(ConvertError::SyncOnNonProperty {
            member: member.name.clone(),
            decorator: decorator_name.to_string(),
            shape: member.kind.shape_name(),
        });
    }
    Ok(Some(decorator))
}

/// `() => { return props.<prop>; }`
fn create_getter(prop_name: &str, cx: &ConvertContext<'_>) -> IRNode {
    IRNode::arrow(
        vec![],
        vec![IRNode::ret(Some(IRNode::prop(
            IRNode::id(cx.options.setup_props_key.as_str()),
            prop_name,
        )))],
    )
}

/// `(value) => { emit('<event>', value); }`
fn create_setter(event_name: &str) -> IRNode {
    IRNode::arrow(
        vec![IRParam::new("value")],
        vec![IRNode::expr_stmt(IRNode::call(
            IRNode::id("emit"),
            vec![IRNode::string(event_name), IRNode::id("value")],
        ))],
    )
}

fn sync_result(
    tag: Tag,
    member: &ClassMember,
    prop_name: String,
    event_name: String,
    getter: IRNode,
    member_type: Option<TypeNode>,
) -> ConversionResult {
    let signature = IRNode::property_signature(
        prop_name.clone(),
        member.is_optional(),
        member_type.clone(),
    )
    .with_comments(member.comments.clone());
    let getter = getter.with_comments(member.comments.clone());
    let setter = create_setter(&event_name);

    ConversionResult::composition(tag, ReferenceKind::Props, vec![signature, getter, setter])
        .with_attributes(vec![
            Attribute::name(prop_name),
            Attribute::name(member.name.clone()),
        ])
        .with_type(member_type.clone())
        .with_event(event_name, member_type)
}

/// `@PropSync('name') synced!: T`, emitting `update:name`.
pub fn convert_prop_sync(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    let Some(decorator) = sync_decorator(member, PROP_SYNC_DECORATOR)? else {
        return Ok(None);
    };
    let Some(prop_name) = decorator.text_argument(0) else {
        return Ok(None);
    };

    let event_name = format!("update:{prop_name}");
    let getter = create_getter(&prop_name, cx);
    Ok(Some(sync_result(
        Tag::PropSync,
        member,
        prop_name,
        event_name,
        getter,
        cx.member_type(member),
    )))
}

/// `@ModelSync('prop', 'event') bound!: T`, emitting `event`.
///
/// Without an event argument the Vue 3 `update:<prop>` convention applies.
pub fn convert_model_sync(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    let Some(decorator) = sync_decorator(member, MODEL_SYNC_DECORATOR)? else {
        return Ok(None);
    };
    let Some(prop_name) = decorator.text_argument(0) else {
        return Ok(None);
    };

    let event_name = decorator
        .text_argument(1)
        .unwrap_or_else(|| format!("update:{prop_name}"));
    let getter = create_getter(&prop_name, cx).with_todo("check ModelSync content");
    Ok(Some(sync_result(
        Tag::ModelSync,
        member,
        prop_name,
        event_name,
        getter,
        cx.member_type(member),
    )))
}
