//! Conversion results: the unit every pass consumes and produces.

use vc2c_common::ImportRequest;
use vc2c_ir::{IRNode, TypeNode};

/// Which converter or merger produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Prop,
    PropSync,
    ModelSync,
    Data,
    TemplateRef,
    ComputedGetter,
    ComputedSetter,
    Computed,
    Method,
    LifecycleHook,
    Watch,
    /// Consolidated `interface Props` + `defineProps` declaration
    Props,
    /// Aggregated `defineEmits` declaration
    Emit,
}

impl Tag {
    /// Sync-style results carry a property shape plus getter/setter accessors.
    pub const fn is_sync(self) -> bool {
        matches!(self, Self::PropSync | Self::ModelSync)
    }

    /// Results whose first node is a property signature for `interface Props`.
    pub const fn is_prop_shaped(self) -> bool {
        matches!(self, Self::Prop | Self::PropSync | Self::ModelSync)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// Contributes to a type/shape declaration only; never executed.
    Object,
    /// Executable statements placed in the output body.
    Composition,
}

/// How `this.<name>` resolves when `<name>` is declared by a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    None,
    /// `name`
    Variable,
    /// `name.value`
    VariableValue,
    /// `name.value!`
    VariableNonNullValue,
    /// `props.name`
    Props,
}

/// A declared name or an argument token exposed by a result.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Name(String),
    Expr(IRNode),
}

impl Attribute {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Expr(_) => None,
        }
    }

    pub const fn as_expr(&self) -> Option<&IRNode> {
        match self {
            Self::Expr(expr) => Some(expr),
            Self::Name(_) => None,
        }
    }
}

/// An event a result implies it emits, with the payload type if known.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitEvent {
    pub name: String,
    pub payload: Option<TypeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub tag: Tag,
    pub kind: ResultKind,
    pub reference: ReferenceKind,
    pub attributes: Vec<Attribute>,
    pub nodes: Vec<IRNode>,
    pub imports: Vec<ImportRequest>,
    pub types: Vec<TypeNode>,
    pub events: Vec<EmitEvent>,
}

impl ConversionResult {
    /// An executable result with no attributes, imports or types yet.
    pub fn composition(tag: Tag, reference: ReferenceKind, nodes: Vec<IRNode>) -> Self {
        Self {
            tag,
            kind: ResultKind::Composition,
            reference,
            attributes: Vec::new(),
            nodes,
            imports: Vec::new(),
            types: Vec::new(),
            events: Vec::new(),
        }
    }

    /// A shape-only result.
    pub fn object(tag: Tag, reference: ReferenceKind, nodes: Vec<IRNode>) -> Self {
        Self {
            kind: ResultKind::Object,
            ..Self::composition(tag, reference, nodes)
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_import(mut self, import: ImportRequest) -> Self {
        self.imports.push(import);
        self
    }

    pub fn with_type(mut self, ty: Option<TypeNode>) -> Self {
        self.types.extend(ty);
        self
    }

    pub fn with_event(mut self, name: impl Into<String>, payload: Option<TypeNode>) -> Self {
        self.events.push(EmitEvent {
            name: name.into(),
            payload,
        });
        self
    }

    /// Names this result declares, in attribute order.
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().filter_map(Attribute::as_name)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.attributes.get(index).and_then(Attribute::as_name)
    }

    pub fn expr_at(&self, index: usize) -> Option<&IRNode> {
        self.attributes.get(index).and_then(Attribute::as_expr)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.declared_names().any(|declared| declared == name)
    }

    pub const fn is_composition(&self) -> bool {
        matches!(self.kind, ResultKind::Composition)
    }
}
