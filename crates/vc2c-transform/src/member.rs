//! Source class members, as handed over by the front end.
//!
//! Parsing is someone else's job: a member arrives with its name, shape,
//! decorators and attached comments. Bodies are already IR, with `this`
//! still in place for the rewrite pass to resolve.

use vc2c_ir::{IRNode, IRParam, IRPrinter, SyntheticComments, TypeNode};

/// A decorator application: `@Name(arg0, arg1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    pub name: String,
    pub arguments: Vec<IRNode>,
}

impl Decorator {
    pub fn new(name: impl Into<String>, arguments: Vec<IRNode>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// `@Name()` with no arguments.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Argument at `index` read as plain text (string literal contents,
    /// identifier names, otherwise the printed expression without quotes).
    pub fn text_argument(&self, index: usize) -> Option<String> {
        self.arguments.get(index).map(literal_text)
    }
}

/// Plain text of a decorator argument.
pub fn literal_text(node: &IRNode) -> String {
    match node.unannotated() {
        IRNode::StringLiteral(text) | IRNode::Identifier(text) | IRNode::NumericLiteral(text) => {
            text.clone()
        }
        other => IRPrinter::emit_to_string(other).replace(['\'', '"', '`'], ""),
    }
}

/// Shape of a class member.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberKind {
    Property {
        type_annotation: Option<TypeNode>,
        optional: bool,
        initializer: Option<IRNode>,
    },
    GetAccessor {
        return_type: Option<TypeNode>,
        body: Vec<IRNode>,
    },
    SetAccessor {
        parameter: IRParam,
        body: Vec<IRNode>,
    },
    Method {
        parameters: Vec<IRParam>,
        return_type: Option<TypeNode>,
        body: Vec<IRNode>,
        is_async: bool,
    },
}

impl MemberKind {
    pub const fn shape_name(&self) -> &'static str {
        match self {
            Self::Property { .. } => "property",
            Self::GetAccessor { .. } => "get accessor",
            Self::SetAccessor { .. } => "set accessor",
            Self::Method { .. } => "method",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMember {
    pub name: String,
    pub kind: MemberKind,
    pub decorators: Vec<Decorator>,
    pub comments: SyntheticComments,
}

impl ClassMember {
    fn with_kind(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            decorators: Vec::new(),
            comments: SyntheticComments::default(),
        }
    }

    pub fn property(name: impl Into<String>, type_annotation: Option<TypeNode>) -> Self {
        Self::with_kind(
            name,
            MemberKind::Property {
                type_annotation,
                optional: false,
                initializer: None,
            },
        )
    }

    pub fn getter(name: impl Into<String>, return_type: Option<TypeNode>, body: Vec<IRNode>) -> Self {
        Self::with_kind(name, MemberKind::GetAccessor { return_type, body })
    }

    pub fn setter(name: impl Into<String>, parameter: IRParam, body: Vec<IRNode>) -> Self {
        Self::with_kind(name, MemberKind::SetAccessor { parameter, body })
    }

    pub fn method(
        name: impl Into<String>,
        parameters: Vec<IRParam>,
        return_type: Option<TypeNode>,
        body: Vec<IRNode>,
    ) -> Self {
        Self::with_kind(
            name,
            MemberKind::Method {
                parameters,
                return_type,
                body,
                is_async: false,
            },
        )
    }

    pub fn with_decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn with_comments(mut self, comments: SyntheticComments) -> Self {
        self.comments = comments;
        self
    }

    /// Mark a property `name?:`. No effect on other shapes.
    pub fn optional(mut self) -> Self {
        if let MemberKind::Property { optional, .. } = &mut self.kind {
            *optional = true;
        }
        self
    }

    /// Set a property initializer. No effect on other shapes.
    pub fn with_initializer(mut self, expr: IRNode) -> Self {
        if let MemberKind::Property { initializer, .. } = &mut self.kind {
            *initializer = Some(expr);
        }
        self
    }

    /// Mark a method `async`. No effect on other shapes.
    pub fn async_method(mut self) -> Self {
        if let MemberKind::Method { is_async, .. } = &mut self.kind {
            *is_async = true;
        }
        self
    }

    pub fn decorator(&self, name: &str) -> Option<&Decorator> {
        self.decorators.iter().find(|decorator| decorator.name == name)
    }

    pub const fn is_property(&self) -> bool {
        matches!(self.kind, MemberKind::Property { .. })
    }

    pub const fn is_optional(&self) -> bool {
        matches!(self.kind, MemberKind::Property { optional: true, .. })
    }

    /// The type written in source for this member, if any.
    pub fn declared_type(&self) -> Option<&TypeNode> {
        match &self.kind {
            MemberKind::Property {
                type_annotation, ..
            } => type_annotation.as_ref(),
            MemberKind::GetAccessor { return_type, .. } => return_type.as_ref(),
            MemberKind::SetAccessor { parameter, .. } => parameter.type_annotation.as_ref(),
            MemberKind::Method { return_type, .. } => return_type.as_ref(),
        }
    }
}
