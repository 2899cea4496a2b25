//! Emission signature table and the aggregated `defineEmits` declaration.

use indexmap::IndexMap;
use indexmap::map::Entry;
use vc2c_ir::{IRNode, TypeMember, TypeNode, TypeParam};

use crate::result::{Attribute, ConversionResult, ReferenceKind, Tag};

/// Event name to payload type, in first-seen order.
///
/// The first record for an event wins; later ones are ignored even when they
/// carry a type and the first did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmitSignatureTable {
    events: IndexMap<String, Option<TypeNode>>,
}

impl EmitSignatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `event` was not recorded before.
    pub fn record(&mut self, event: impl Into<String>, payload: Option<TypeNode>) -> bool {
        match self.events.entry(event.into()) {
            Entry::Occupied(entry) => {
                tracing::trace!(event = %entry.key(), "event already recorded");
                false
            }
            Entry::Vacant(entry) => {
                tracing::trace!(event = %entry.key(), typed = payload.is_some(), "recorded event");
                entry.insert(payload);
                true
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `Some(None)` means the event is known but its payload type is not.
    pub fn get(&self, event: &str) -> Option<Option<&TypeNode>> {
        self.events.get(event).map(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&TypeNode>)> {
        self.events
            .iter()
            .map(|(event, payload)| (event.as_str(), payload.as_ref()))
    }
}

/// `(e: '<event>', data: T): void`
fn event_signature(event: &str, payload: Option<&TypeNode>) -> TypeMember {
    let mut parameters = vec![TypeParam::new("e", TypeNode::string_literal(event))];
    if let Some(payload) = payload {
        parameters.push(TypeParam::new("data", payload.clone()));
    }
    TypeMember::CallSignature {
        parameters,
        return_type: TypeNode::Void,
    }
}

/// `const emit = defineEmits<{ ... }>()`, or nothing for an empty table.
pub fn synthesize_emit_declaration(table: &EmitSignatureTable) -> Option<ConversionResult> {
    if table.is_empty() {
        return None;
    }

    let signatures = table
        .iter()
        .map(|(event, payload)| event_signature(event, payload))
        .collect();
    let declaration = IRNode::const_decl(
        "emit",
        IRNode::call_with_types(
            IRNode::id("defineEmits"),
            vec![TypeNode::TypeLiteral(signatures)],
            vec![],
        ),
    );
    tracing::debug!(events = table.len(), "synthesized emit declaration");

    Some(
        ConversionResult::composition(Tag::Emit, ReferenceKind::Variable, vec![declaration])
            .with_attributes(vec![Attribute::name("emit")]),
    )
}

#[cfg(test)]
#[path = "../tests/emits.rs"]
mod tests;
