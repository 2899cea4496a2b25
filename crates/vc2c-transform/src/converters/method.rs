//! Methods become top-level function declarations with the same signature.

use vc2c_ir::IRNode;

use super::{ConvertContext, ConverterResult};
use crate::member::{ClassMember, MemberKind};
use crate::result::{Attribute, ConversionResult, ReferenceKind, Tag};

pub fn convert_method(member: &ClassMember, _cx: &ConvertContext<'_>) -> ConverterResult {
    let MemberKind::Method {
        parameters,
        return_type,
        body,
        is_async,
    } = &member.kind
    else {
        return Ok(None);
    };

    let function = IRNode::FunctionDecl {
        name: member.name.clone(),
        parameters: parameters.clone(),
        return_type: return_type.clone(),
        body: body.clone(),
        is_async: *is_async,
    }
    .with_comments(member.comments.clone());

    Ok(Some(
        ConversionResult::composition(Tag::Method, ReferenceKind::Variable, vec![function])
            .with_attributes(vec![Attribute::name(member.name.clone())]),
    ))
}
