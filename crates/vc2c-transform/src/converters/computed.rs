//! Get/set accessors. Each converts on its own into an arrow function; the
//! accessor merger pairs them into `computed` declarations.

use vc2c_ir::IRNode;

use super::{ConvertContext, ConverterResult};
use crate::member::{ClassMember, MemberKind};
use crate::result::{Attribute, ConversionResult, ReferenceKind, Tag};

pub fn convert_getter(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    let MemberKind::GetAccessor { return_type, body } = &member.kind else {
        return Ok(None);
    };

    let getter = IRNode::arrow(vec![], body.clone()).with_comments(member.comments.clone());

    Ok(Some(
        ConversionResult::composition(Tag::ComputedGetter, ReferenceKind::Variable, vec![getter])
            .with_attributes(vec![Attribute::name(member.name.clone())])
            .with_import(cx.reactive_import("computed"))
            .with_type(return_type.clone()),
    ))
}

pub fn convert_setter(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    let MemberKind::SetAccessor { parameter, body } = &member.kind else {
        return Ok(None);
    };

    let setter = IRNode::arrow(vec![parameter.clone()], body.clone())
        .with_comments(member.comments.clone());

    Ok(Some(
        ConversionResult::composition(Tag::ComputedSetter, ReferenceKind::Variable, vec![setter])
            .with_attributes(vec![Attribute::name(member.name.clone())])
            .with_import(cx.reactive_import("computed")),
    ))
}
