//! Undecorated, initialized properties are component data: `const x = ref(init)`.

use vc2c_ir::IRNode;

use super::{ConvertContext, ConverterResult};
use crate::member::{ClassMember, MemberKind};
use crate::result::{Attribute, ConversionResult, ReferenceKind, Tag};

pub fn convert_data(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    // Unknown decorators mean some other library owns this member.
    if !member.decorators.is_empty() {
        return Ok(None);
    }
    let MemberKind::Property {
        initializer: Some(initializer),
        ..
    } = &member.kind
    else {
        return Ok(None);
    };

    // Only a written annotation becomes a type argument.
    let type_arguments = member.declared_type().cloned().into_iter().collect();
    let declaration = IRNode::const_decl(
        member.name.clone(),
        IRNode::call_with_types(IRNode::id("ref"), type_arguments, vec![initializer.clone()]),
    )
    .with_comments(member.comments.clone());

    Ok(Some(
        ConversionResult::composition(Tag::Data, ReferenceKind::VariableValue, vec![declaration])
            .with_attributes(vec![Attribute::name(member.name.clone())])
            .with_import(cx.reactive_import("ref"))
            .with_type(cx.member_type(member)),
    ))
}
