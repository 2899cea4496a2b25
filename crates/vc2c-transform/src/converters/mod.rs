//! Per-member converters.
//!
//! Each converter looks at one member and either declines (`Ok(None)`),
//! produces exactly one [`ConversionResult`], or rejects a structurally
//! invalid member. Dispatch is a fixed, ordered list of converters per member
//! shape; the first one that accepts wins.

mod computed;
mod data;
mod lifecycle;
mod method;
mod prop;
mod sync;
mod template_ref;
mod watch;

pub use computed::{convert_getter, convert_setter};
pub use data::convert_data;
pub use lifecycle::{convert_lifecycle_hook, lifecycle_hook_import, is_lifecycle_hook};
pub use method::convert_method;
pub use prop::convert_prop;
pub use sync::{convert_model_sync, convert_prop_sync};
pub use template_ref::convert_template_ref;
pub use watch::convert_watch;

use vc2c_common::{ConvertOptions, ImportRequest};
use vc2c_ir::TypeNode;

use crate::error::ConvertError;
use crate::member::{ClassMember, MemberKind};
use crate::result::ConversionResult;
use crate::type_oracle::TypeOracle;

/// Shared, read-only inputs of every converter.
#[derive(Clone, Copy)]
pub struct ConvertContext<'a> {
    pub options: &'a ConvertOptions,
    pub oracle: &'a dyn TypeOracle,
}

impl<'a> ConvertContext<'a> {
    pub const fn new(options: &'a ConvertOptions, oracle: &'a dyn TypeOracle) -> Self {
        Self { options, oracle }
    }

    /// Import of a reactive-API function from the configured module.
    pub fn reactive_import(&self, name: &str) -> ImportRequest {
        ImportRequest::single(name, self.options.reactive_module())
    }

    pub fn member_type(&self, member: &ClassMember) -> Option<TypeNode> {
        self.oracle.member_type(member)
    }
}

pub type ConverterResult = Result<Option<ConversionResult>, ConvertError>;

pub type Converter = fn(&ClassMember, &ConvertContext<'_>) -> ConverterResult;

const PROPERTY_CONVERTERS: &[Converter] = &[
    convert_prop,
    convert_prop_sync,
    convert_model_sync,
    convert_template_ref,
    convert_data,
];

// Sync converters sit in front of the non-property lists so a misplaced
// `@PropSync` / `@ModelSync` is rejected instead of silently converted.
const GETTER_CONVERTERS: &[Converter] = &[convert_prop_sync, convert_model_sync, convert_getter];

const SETTER_CONVERTERS: &[Converter] = &[convert_prop_sync, convert_model_sync, convert_setter];

const METHOD_CONVERTERS: &[Converter] = &[
    convert_prop_sync,
    convert_model_sync,
    convert_watch,
    convert_lifecycle_hook,
    convert_method,
];

/// Converters applicable to a member shape, in the order they are tried.
pub const fn converters_for(kind: &MemberKind) -> &'static [Converter] {
    match kind {
        MemberKind::Property { .. } => PROPERTY_CONVERTERS,
        MemberKind::GetAccessor { .. } => GETTER_CONVERTERS,
        MemberKind::SetAccessor { .. } => SETTER_CONVERTERS,
        MemberKind::Method { .. } => METHOD_CONVERTERS,
    }
}

/// Run the converters for `member` until one accepts.
pub fn convert_member(member: &ClassMember, cx: &ConvertContext<'_>) -> ConverterResult {
    for converter in converters_for(&member.kind) {
        if let Some(result) = converter(member, cx)? {
            tracing::debug!(
                member = %member.name,
                tag = ?result.tag,
                reference = ?result.reference,
                "converted member"
            );
            return Ok(Some(result));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "../../tests/converters.rs"]
mod tests;
