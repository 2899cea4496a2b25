//! Type annotations carried by the IR.
//!
//! Types come from two places: annotations written on the source members and
//! answers from the external type oracle. Both are expressed as `TypeNode` so
//! converters can re-emit them as type arguments (`computed<T>`), property
//! signatures or emission payload types.

/// A TypeScript type as it appears in emitted code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeNode {
    Any,
    Unknown,
    Void,
    Never,
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    /// `Foo`, `Array<T>`, `Record<K, V>`
    Reference {
        name: String,
        type_arguments: Vec<TypeNode>,
    },
    /// `'save'`
    StringLiteral(String),
    /// `42`
    NumberLiteral(String),
    /// `true`
    BooleanLiteral(bool),
    /// `T[]`
    Array(Box<TypeNode>),
    /// `A | B`
    Union(Vec<TypeNode>),
    /// `{ a: T; (e: 'x'): void }`
    TypeLiteral(Vec<TypeMember>),
    /// `(a: T) => R`
    Function {
        parameters: Vec<TypeParam>,
        return_type: Box<TypeNode>,
    },
}

/// Member of a type literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeMember {
    /// `name?: T`
    Property {
        name: String,
        optional: bool,
        type_node: TypeNode,
    },
    /// `(params): R`
    CallSignature {
        parameters: Vec<TypeParam>,
        return_type: TypeNode,
    },
}

/// Named parameter in a call or function signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParam {
    pub name: String,
    pub type_node: TypeNode,
}

impl TypeParam {
    pub fn new(name: impl Into<String>, type_node: TypeNode) -> Self {
        Self {
            name: name.into(),
            type_node,
        }
    }
}

impl TypeNode {
    /// Type reference without type arguments: `HTMLInputElement`
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Generic type reference: `Array<T>`
    pub fn generic(name: impl Into<String>, type_arguments: Vec<TypeNode>) -> Self {
        Self::Reference {
            name: name.into(),
            type_arguments,
        }
    }

    pub fn string_literal(value: impl Into<String>) -> Self {
        Self::StringLiteral(value.into())
    }

    pub fn array(element: TypeNode) -> Self {
        Self::Array(Box::new(element))
    }

    /// Widen a literal type to its primitive (`'a'` to `string`).
    pub fn widened(self) -> Self {
        match self {
            Self::StringLiteral(_) => Self::String,
            Self::NumberLiteral(_) => Self::Number,
            Self::BooleanLiteral(_) => Self::Boolean,
            other => other,
        }
    }
}
