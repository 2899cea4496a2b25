//! Output IR (Intermediate Representation) for converted components
//!
//! This module defines a tree-structured IR that converters produce instead of
//! strings. The IR nodes represent the TypeScript constructs found in
//! composition-style component code: `const` bindings, arrow functions, calls
//! with type arguments, interfaces and property signatures.
//!
//! # Architecture
//!
//! Converters turn class members into IR trees. Source member bodies arrive
//! as IR too, with `this` still present as [`IRNode::This`]. The rewrite pass
//! folds those trees (see [`crate::fold`]) and the printer walks the final
//! trees to produce TypeScript text.
//!
//! Comments that belong to a node travel with it as [`IRNode::Annotated`], so
//! a pass can move a member's documentation from one node to another without
//! consulting any source text.

use smallvec::SmallVec;

use crate::types::TypeNode;

/// Intermediate Representation node for converted TypeScript
#[derive(Debug, Clone, PartialEq)]
pub enum IRNode {
    // =========================================================================
    // Literals
    // =========================================================================
    /// Numeric literal: `42`, `3.14`
    NumericLiteral(String),

    /// String literal, stored unquoted: `'hello'`
    StringLiteral(String),

    /// Boolean literal: `true`, `false`
    BooleanLiteral(bool),

    /// Null literal: `null`
    NullLiteral,

    /// `undefined`
    Undefined,

    /// Template literal kept verbatim, including the backticks
    TemplateLiteral(String),

    // =========================================================================
    // Identifiers
    // =========================================================================
    /// Identifier: `foo`, `_bar`
    Identifier(String),

    /// This keyword
    This,

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Binary expression: `left op right` (assignment included)
    BinaryExpr {
        left: Box<Self>,
        operator: String,
        right: Box<Self>,
    },

    /// Unary prefix expression: `!x`, `-x`, `typeof x`
    PrefixUnaryExpr {
        operator: String,
        operand: Box<Self>,
    },

    /// Unary postfix expression: `x++`, `x--`
    PostfixUnaryExpr {
        operand: Box<Self>,
        operator: String,
    },

    /// Call expression: `callee<T>(args)`
    CallExpr {
        callee: Box<Self>,
        type_arguments: Vec<TypeNode>,
        arguments: Vec<Self>,
    },

    /// New expression: `new Callee(args)`
    NewExpr {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },

    /// Property access: `object.property`
    PropertyAccess { object: Box<Self>, property: String },

    /// Element access: `object[index]`
    ElementAccess { object: Box<Self>, index: Box<Self> },

    /// Non-null assertion: `expr!`
    NonNullExpr(Box<Self>),

    /// Await expression: `await expr`
    AwaitExpr(Box<Self>),

    /// Conditional expression: `cond ? then : else`
    ConditionalExpr {
        condition: Box<Self>,
        when_true: Box<Self>,
        when_false: Box<Self>,
    },

    /// Parenthesized expression: `(expr)`
    Parenthesized(Box<Self>),

    /// Array literal: `[a, b, c]`
    ArrayLiteral(Vec<Self>),

    /// Spread element: `...expr`
    SpreadElement(Box<Self>),

    /// Object literal: `{ key: value, ... }`
    ObjectLiteral {
        properties: Vec<IRProperty>,
        /// Print one property per line
        multiline: bool,
    },

    /// Arrow function: `async (params): T => body`
    ArrowFunction {
        parameters: Vec<IRParam>,
        return_type: Option<TypeNode>,
        body: ArrowBody,
        is_async: bool,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    /// Variable statement: `const x: T = value;`
    VarDecl {
        kind: VarKind,
        name: String,
        type_annotation: Option<TypeNode>,
        initializer: Option<Box<Self>>,
    },

    /// Expression statement: `expr;`
    ExpressionStatement(Box<Self>),

    /// Return statement: `return expr;`
    ReturnStatement(Option<Box<Self>>),

    /// If statement: `if (cond) { then } else { else }`
    IfStatement {
        condition: Box<Self>,
        then_branch: Box<Self>,
        else_branch: Option<Box<Self>>,
    },

    /// Block statement: `{ statements }`
    Block(Vec<Self>),

    /// Throw statement: `throw expr;`
    ThrowStatement(Box<Self>),

    /// Empty statement: `;`
    EmptyStatement,

    // =========================================================================
    // Declarations
    // =========================================================================
    /// Function declaration: `async function name(params): T { body }`
    FunctionDecl {
        name: String,
        parameters: Vec<IRParam>,
        return_type: Option<TypeNode>,
        body: Vec<Self>,
        is_async: bool,
    },

    /// Interface declaration: `interface Name { members }`
    InterfaceDecl { name: String, members: Vec<Self> },

    /// Property signature inside an interface: `name?: T;`
    PropertySignature {
        name: String,
        optional: bool,
        type_annotation: Option<TypeNode>,
    },

    // =========================================================================
    // Special
    // =========================================================================
    /// Raw TypeScript string (escape hatch for constructs the IR does not model)
    Raw(String),

    /// Standalone comment: `/* text */` or `// text`
    Comment(IRComment),

    /// A node carrying synthetic comments emitted around it
    Annotated {
        node: Box<Self>,
        comments: SyntheticComments,
    },
}

/// Declaration keyword of a variable statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Const,
    Let,
    Var,
}

impl VarKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Let => "let",
            Self::Var => "var",
        }
    }
}

/// Body of an arrow function
#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    /// `=> { statements }`
    Block(Vec<IRNode>),
    /// `=> expr`
    Expression(Box<IRNode>),
}

/// Property in an object literal
#[derive(Debug, Clone, PartialEq)]
pub struct IRProperty {
    pub key: IRPropertyKey,
    pub value: IRNode,
    pub kind: IRPropertyKind,
}

/// Object property key
#[derive(Debug, Clone, PartialEq)]
pub enum IRPropertyKey {
    Identifier(String),
    StringLiteral(String),
    NumericLiteral(String),
    Computed(Box<IRNode>),
}

impl IRPropertyKey {
    /// Static name of the key, if it has one.
    pub fn static_name(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) | Self::StringLiteral(name) | Self::NumericLiteral(name) => {
                Some(name)
            }
            Self::Computed(_) => None,
        }
    }
}

/// Object property kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IRPropertyKind {
    /// `key: value`
    Init,
    /// `key` (value is the identifier of the same name)
    Shorthand,
    /// `get key() {}` (value is an arrow whose body is the accessor body)
    Get,
    /// `set key(v) {}`
    Set,
    /// `key() {}`
    Method,
    /// `...value` (key is ignored)
    Spread,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct IRParam {
    pub name: String,
    pub rest: bool,
    pub optional: bool,
    pub type_annotation: Option<TypeNode>,
    pub default_value: Option<Box<IRNode>>,
}

/// Comment text without delimiters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IRComment {
    pub text: String,
    /// `/* */` when true, `//` otherwise
    pub is_block: bool,
}

impl IRComment {
    pub fn block(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_block: true,
        }
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_block: false,
        }
    }
}

/// Comments attached to a node rather than sitting in a statement list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntheticComments {
    pub leading: SmallVec<[IRComment; 1]>,
    pub trailing: SmallVec<[IRComment; 1]>,
}

impl SyntheticComments {
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }

    pub fn with_leading(mut self, comment: IRComment) -> Self {
        self.leading.push(comment);
        self
    }

    pub fn with_trailing(mut self, comment: IRComment) -> Self {
        self.trailing.push(comment);
        self
    }

    /// Append another set, keeping leading before leading and trailing after trailing.
    pub fn merge(&mut self, other: Self) {
        self.leading.extend(other.leading);
        self.trailing.extend(other.trailing);
    }
}

// =========================================================================
// Builder helpers for IR construction
// =========================================================================

impl IRNode {
    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::StringLiteral(s.into())
    }

    /// Create a numeric literal
    pub fn number(n: impl Into<String>) -> Self {
        Self::NumericLiteral(n.into())
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpr {
            callee: Box::new(callee),
            type_arguments: Vec::new(),
            arguments: args,
        }
    }

    /// Create a call expression with explicit type arguments
    pub fn call_with_types(callee: Self, type_args: Vec<TypeNode>, args: Vec<Self>) -> Self {
        Self::CallExpr {
            callee: Box::new(callee),
            type_arguments: type_args,
            arguments: args,
        }
    }

    /// Create a property access
    pub fn prop(object: Self, property: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create `this.name`
    pub fn this_prop(property: impl Into<String>) -> Self {
        Self::prop(Self::This, property)
    }

    /// Create an element access
    pub fn elem(object: Self, index: Self) -> Self {
        Self::ElementAccess {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    /// Create a non-null assertion
    pub fn non_null(expr: Self) -> Self {
        Self::NonNullExpr(Box::new(expr))
    }

    /// Create a binary expression
    pub fn binary(left: Self, op: impl Into<String>, right: Self) -> Self {
        Self::BinaryExpr {
            left: Box::new(left),
            operator: op.into(),
            right: Box::new(right),
        }
    }

    /// Create an assignment expression
    pub fn assign(target: Self, value: Self) -> Self {
        Self::binary(target, "=", value)
    }

    /// Create a `const` declaration
    pub fn const_decl(name: impl Into<String>, init: Self) -> Self {
        Self::VarDecl {
            kind: VarKind::Const,
            name: name.into(),
            type_annotation: None,
            initializer: Some(Box::new(init)),
        }
    }

    /// Create a return statement
    pub fn ret(expr: Option<Self>) -> Self {
        Self::ReturnStatement(expr.map(Box::new))
    }

    /// Create an arrow function with a block body
    pub const fn arrow(params: Vec<IRParam>, body: Vec<Self>) -> Self {
        Self::ArrowFunction {
            parameters: params,
            return_type: None,
            body: ArrowBody::Block(body),
            is_async: false,
        }
    }

    /// Create an arrow function with an expression body
    pub fn arrow_expr(params: Vec<IRParam>, expr: Self) -> Self {
        Self::ArrowFunction {
            parameters: params,
            return_type: None,
            body: ArrowBody::Expression(Box::new(expr)),
            is_async: false,
        }
    }

    /// Create a function declaration
    pub fn func_decl(name: impl Into<String>, params: Vec<IRParam>, body: Vec<Self>) -> Self {
        Self::FunctionDecl {
            name: name.into(),
            parameters: params,
            return_type: None,
            body,
            is_async: false,
        }
    }

    /// Create a block
    pub const fn block(stmts: Vec<Self>) -> Self {
        Self::Block(stmts)
    }

    /// Create an expression statement
    pub fn expr_stmt(expr: Self) -> Self {
        Self::ExpressionStatement(Box::new(expr))
    }

    /// Create a single-line object literal
    pub const fn object(props: Vec<IRProperty>) -> Self {
        Self::ObjectLiteral {
            properties: props,
            multiline: false,
        }
    }

    /// Create an object literal printed one property per line
    pub const fn object_multiline(props: Vec<IRProperty>) -> Self {
        Self::ObjectLiteral {
            properties: props,
            multiline: true,
        }
    }

    /// Create a property signature
    pub fn property_signature(
        name: impl Into<String>,
        optional: bool,
        type_annotation: Option<TypeNode>,
    ) -> Self {
        Self::PropertySignature {
            name: name.into(),
            optional,
            type_annotation,
        }
    }

    /// Attach comments to this node. Empty comment sets leave the node untouched.
    pub fn with_comments(self, comments: SyntheticComments) -> Self {
        if comments.is_empty() {
            return self;
        }
        match self {
            Self::Annotated {
                node,
                comments: mut existing,
            } => {
                existing.merge(comments);
                Self::Annotated {
                    node,
                    comments: existing,
                }
            }
            other => Self::Annotated {
                node: Box::new(other),
                comments,
            },
        }
    }

    /// Attach one leading comment.
    pub fn with_leading_comment(self, comment: IRComment) -> Self {
        self.with_comments(SyntheticComments::default().with_leading(comment))
    }

    /// Attach a `/* TODO: message */` review annotation.
    pub fn with_todo(self, message: &str) -> Self {
        self.with_leading_comment(IRComment::block(format!(" TODO: {message} ")))
    }

    /// Split off attached comments, returning the bare node and its comments.
    pub fn take_comments(self) -> (Self, SyntheticComments) {
        match self {
            Self::Annotated { node, comments } => {
                let (inner, mut inner_comments) = node.take_comments();
                inner_comments.merge(comments);
                (inner, inner_comments)
            }
            other => (other, SyntheticComments::default()),
        }
    }

    /// The node without any comment wrapper.
    pub fn unannotated(&self) -> &Self {
        match self {
            Self::Annotated { node, .. } => node.unannotated(),
            other => other,
        }
    }

    /// Comments attached directly to this node, if any.
    pub fn comments(&self) -> Option<&SyntheticComments> {
        match self {
            Self::Annotated { comments, .. } => Some(comments),
            _ => None,
        }
    }

    /// Whether this is `this.<name>` with a static member name.
    pub fn as_this_member(&self) -> Option<&str> {
        match self {
            Self::PropertyAccess { object, property } if matches!(**object, Self::This) => {
                Some(property)
            }
            _ => None,
        }
    }
}

impl IRParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest: false,
            optional: false,
            type_annotation: None,
            default_value: None,
        }
    }

    pub fn rest(name: impl Into<String>) -> Self {
        Self {
            rest: true,
            ..Self::new(name)
        }
    }

    pub fn typed(name: impl Into<String>, type_annotation: TypeNode) -> Self {
        Self {
            type_annotation: Some(type_annotation),
            ..Self::new(name)
        }
    }

    pub fn with_default(mut self, default: IRNode) -> Self {
        self.default_value = Some(Box::new(default));
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl IRProperty {
    /// Create a simple property with identifier key: `{ key: value }`
    pub fn init(key: impl Into<String>, value: IRNode) -> Self {
        Self {
            key: IRPropertyKey::Identifier(key.into()),
            value,
            kind: IRPropertyKind::Init,
        }
    }

    /// Create a spread property: `{ ...value }`
    pub fn spread(value: IRNode) -> Self {
        Self {
            key: IRPropertyKey::Identifier(String::new()),
            value,
            kind: IRPropertyKind::Spread,
        }
    }

    /// A `key: value` entry with a static key.
    pub fn is_plain(&self) -> bool {
        matches!(self.kind, IRPropertyKind::Init | IRPropertyKind::Shorthand)
            && !matches!(self.key, IRPropertyKey::Computed(_))
    }
}
