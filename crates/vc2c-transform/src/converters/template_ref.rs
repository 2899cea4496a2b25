//! `@Ref(key?)` template refs become `const el = ref<T>()`.
//!
//! Reads go through `el.value!`: the element only exists after mount, but
//! class components accessed `this.$refs` as if it always did.

use vc2c_ir::IRNode;

use super::{ConvertContext, ConverterResult};
use crate::member::ClassMember;
use crate::result::{Attribute, ConversionResult, ReferenceKind, Tag};

const REF_DECORATOR: &str = "Ref";

pub fn convert_template_ref(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    let Some(decorator) = member.decorator(REF_DECORATOR) else {
        return Ok(None);
    };

    let type_arguments = cx.member_type(member).into_iter().collect();
    let mut declaration = IRNode::const_decl(
        member.name.clone(),
        IRNode::call_with_types(IRNode::id("ref"), type_arguments, vec![]),
    );
    if let Some(key) = decorator.text_argument(0).filter(|key| *key != member.name) {
        declaration = declaration.with_todo(&format!(
            "template ref '{key}' is now bound as '{}'; rename ref=\"{key}\" in the template",
            member.name
        ));
    }

    Ok(Some(
        ConversionResult::composition(
            Tag::TemplateRef,
            ReferenceKind::VariableNonNullValue,
            vec![declaration.with_comments(member.comments.clone())],
        )
        .with_attributes(vec![Attribute::name(member.name.clone())])
        .with_import(cx.reactive_import("ref")),
    ))
}
