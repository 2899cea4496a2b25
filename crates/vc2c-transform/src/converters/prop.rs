//! `@Prop(options)` properties become property signatures for `interface Props`.

use vc2c_ir::IRNode;

use super::{ConvertContext, ConverterResult};
use crate::member::ClassMember;
use crate::result::{Attribute, ConversionResult, ReferenceKind, Tag};

const PROP_DECORATOR: &str = "Prop";

pub fn convert_prop(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    let Some(decorator) = member.decorator(PROP_DECORATOR) else {
        return Ok(None);
    };
    let Some(prop_options) = decorator.arguments.first() else {
        return Ok(None);
    };

    let signature = IRNode::property_signature(
        member.name.clone(),
        member.is_optional(),
        cx.member_type(member),
    )
    .with_comments(member.comments.clone());

    Ok(Some(
        ConversionResult::object(Tag::Prop, ReferenceKind::Props, vec![signature]).with_attributes(
            vec![
                Attribute::name(member.name.clone()),
                Attribute::Expr(prop_options.clone()),
            ],
        ),
    ))
}
