//! Static type queries.
//!
//! Type inference belongs to the external front end. Converters only ask two
//! questions: "what is this member's type" and "what is this expression's
//! type". Answers are treated as pure; the engine never caches them.

use rustc_hash::FxHashMap;
use vc2c_ir::{IRNode, TypeNode};

use crate::member::{ClassMember, MemberKind};

pub trait TypeOracle {
    /// Declared or inferred type of a member's value.
    fn member_type(&self, member: &ClassMember) -> Option<TypeNode>;

    /// Inferred type of an expression in a member body.
    fn expression_type(&self, expr: &IRNode) -> Option<TypeNode>;
}

/// Type of a literal expression, if it is one.
pub fn literal_type(expr: &IRNode) -> Option<TypeNode> {
    match expr.unannotated() {
        IRNode::StringLiteral(text) => Some(TypeNode::StringLiteral(text.clone())),
        IRNode::NumericLiteral(text) => Some(TypeNode::NumberLiteral(text.clone())),
        IRNode::BooleanLiteral(value) => Some(TypeNode::BooleanLiteral(*value)),
        IRNode::NullLiteral => Some(TypeNode::Null),
        IRNode::Undefined => Some(TypeNode::Undefined),
        IRNode::TemplateLiteral(_) => Some(TypeNode::String),
        IRNode::PrefixUnaryExpr { operator, operand }
            if operator == "-" && matches!(**operand, IRNode::NumericLiteral(_)) =>
        {
            Some(TypeNode::Number)
        }
        IRNode::Parenthesized(inner) => literal_type(inner),
        _ => None,
    }
}

/// Answers from source annotations and literal initializers only.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredTypeOracle;

impl TypeOracle for DeclaredTypeOracle {
    fn member_type(&self, member: &ClassMember) -> Option<TypeNode> {
        if let Some(declared) = member.declared_type() {
            return Some(declared.clone());
        }
        match &member.kind {
            MemberKind::Property {
                initializer: Some(init),
                ..
            } => literal_type(init).map(TypeNode::widened),
            _ => None,
        }
    }

    fn expression_type(&self, expr: &IRNode) -> Option<TypeNode> {
        literal_type(expr)
    }
}

/// Declared types plus a lookup table for names the front end resolved.
///
/// Member entries answer both `member_type` and `this.<member>` expressions;
/// identifier entries answer bare identifier expressions.
#[derive(Debug, Clone, Default)]
pub struct TableTypeOracle {
    members: FxHashMap<String, TypeNode>,
    identifiers: FxHashMap<String, TypeNode>,
}

impl TableTypeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, name: impl Into<String>, ty: TypeNode) -> Self {
        self.members.insert(name.into(), ty);
        self
    }

    pub fn with_identifier(mut self, name: impl Into<String>, ty: TypeNode) -> Self {
        self.identifiers.insert(name.into(), ty);
        self
    }
}

impl TypeOracle for TableTypeOracle {
    fn member_type(&self, member: &ClassMember) -> Option<TypeNode> {
        self.members
            .get(&member.name)
            .cloned()
            .or_else(|| DeclaredTypeOracle.member_type(member))
    }

    fn expression_type(&self, expr: &IRNode) -> Option<TypeNode> {
        let expr = expr.unannotated();
        if let Some(member) = expr.as_this_member() {
            return self.members.get(member).cloned();
        }
        match expr {
            IRNode::Identifier(name) => self.identifiers.get(name).cloned(),
            other => literal_type(other),
        }
    }
}
