//! Ownership-taking tree fold over the IR.
//!
//! A pass implements [`IRFolder::fold_node`], handles the node shapes it cares
//! about and hands everything else to [`walk_node`], which rebuilds the node
//! after folding each child. Children are always visited, so nested matches
//! inside one statement are each seen exactly once.

use crate::ir::{ArrowBody, IRNode, IRParam, IRProperty, IRPropertyKey};

pub trait IRFolder {
    fn fold_node(&mut self, node: IRNode) -> IRNode {
        walk_node(self, node)
    }

    fn fold_nodes(&mut self, nodes: Vec<IRNode>) -> Vec<IRNode> {
        nodes.into_iter().map(|node| self.fold_node(node)).collect()
    }
}

fn fold_box<F: IRFolder + ?Sized>(folder: &mut F, node: Box<IRNode>) -> Box<IRNode> {
    Box::new(folder.fold_node(*node))
}

fn fold_params<F: IRFolder + ?Sized>(folder: &mut F, params: Vec<IRParam>) -> Vec<IRParam> {
    params
        .into_iter()
        .map(|mut param| {
            param.default_value = param.default_value.map(|value| fold_box(folder, value));
            param
        })
        .collect()
}

fn fold_properties<F: IRFolder + ?Sized>(
    folder: &mut F,
    properties: Vec<IRProperty>,
) -> Vec<IRProperty> {
    properties
        .into_iter()
        .map(|prop| IRProperty {
            key: match prop.key {
                IRPropertyKey::Computed(expr) => IRPropertyKey::Computed(fold_box(folder, expr)),
                key => key,
            },
            value: folder.fold_node(prop.value),
            kind: prop.kind,
        })
        .collect()
}

/// Rebuild `node` with every child passed through `folder`.
pub fn walk_node<F: IRFolder + ?Sized>(folder: &mut F, node: IRNode) -> IRNode {
    match node {
        IRNode::BinaryExpr {
            left,
            operator,
            right,
        } => IRNode::BinaryExpr {
            left: fold_box(folder, left),
            operator,
            right: fold_box(folder, right),
        },
        IRNode::PrefixUnaryExpr { operator, operand } => IRNode::PrefixUnaryExpr {
            operator,
            operand: fold_box(folder, operand),
        },
        IRNode::PostfixUnaryExpr { operand, operator } => IRNode::PostfixUnaryExpr {
            operand: fold_box(folder, operand),
            operator,
        },
        IRNode::CallExpr {
            callee,
            type_arguments,
            arguments,
        } => IRNode::CallExpr {
            callee: fold_box(folder, callee),
            type_arguments,
            arguments: folder.fold_nodes(arguments),
        },
        IRNode::NewExpr { callee, arguments } => IRNode::NewExpr {
            callee: fold_box(folder, callee),
            arguments: folder.fold_nodes(arguments),
        },
        IRNode::PropertyAccess { object, property } => IRNode::PropertyAccess {
            object: fold_box(folder, object),
            property,
        },
        IRNode::ElementAccess { object, index } => IRNode::ElementAccess {
            object: fold_box(folder, object),
            index: fold_box(folder, index),
        },
        IRNode::NonNullExpr(expr) => IRNode::NonNullExpr(fold_box(folder, expr)),
        IRNode::AwaitExpr(expr) => IRNode::AwaitExpr(fold_box(folder, expr)),
        IRNode::ConditionalExpr {
            condition,
            when_true,
            when_false,
        } => IRNode::ConditionalExpr {
            condition: fold_box(folder, condition),
            when_true: fold_box(folder, when_true),
            when_false: fold_box(folder, when_false),
        },
        IRNode::Parenthesized(expr) => IRNode::Parenthesized(fold_box(folder, expr)),
        IRNode::ArrayLiteral(elements) => IRNode::ArrayLiteral(folder.fold_nodes(elements)),
        IRNode::SpreadElement(expr) => IRNode::SpreadElement(fold_box(folder, expr)),
        IRNode::ObjectLiteral {
            properties,
            multiline,
        } => IRNode::ObjectLiteral {
            properties: fold_properties(folder, properties),
            multiline,
        },
        IRNode::ArrowFunction {
            parameters,
            return_type,
            body,
            is_async,
        } => IRNode::ArrowFunction {
            parameters: fold_params(folder, parameters),
            return_type,
            body: match body {
                ArrowBody::Block(stmts) => ArrowBody::Block(folder.fold_nodes(stmts)),
                ArrowBody::Expression(expr) => ArrowBody::Expression(fold_box(folder, expr)),
            },
            is_async,
        },
        IRNode::VarDecl {
            kind,
            name,
            type_annotation,
            initializer,
        } => IRNode::VarDecl {
            kind,
            name,
            type_annotation,
            initializer: initializer.map(|init| fold_box(folder, init)),
        },
        IRNode::ExpressionStatement(expr) => IRNode::ExpressionStatement(fold_box(folder, expr)),
        IRNode::ReturnStatement(expr) => {
            IRNode::ReturnStatement(expr.map(|expr| fold_box(folder, expr)))
        }
        IRNode::IfStatement {
            condition,
            then_branch,
            else_branch,
        } => IRNode::IfStatement {
            condition: fold_box(folder, condition),
            then_branch: fold_box(folder, then_branch),
            else_branch: else_branch.map(|branch| fold_box(folder, branch)),
        },
        IRNode::Block(stmts) => IRNode::Block(folder.fold_nodes(stmts)),
        IRNode::ThrowStatement(expr) => IRNode::ThrowStatement(fold_box(folder, expr)),
        IRNode::FunctionDecl {
            name,
            parameters,
            return_type,
            body,
            is_async,
        } => IRNode::FunctionDecl {
            name,
            parameters: fold_params(folder, parameters),
            return_type,
            body: folder.fold_nodes(body),
            is_async,
        },
        IRNode::InterfaceDecl { name, members } => IRNode::InterfaceDecl {
            name,
            members: folder.fold_nodes(members),
        },
        IRNode::Annotated { node, comments } => IRNode::Annotated {
            node: fold_box(folder, node),
            comments,
        },
        leaf @ (IRNode::NumericLiteral(_)
        | IRNode::StringLiteral(_)
        | IRNode::BooleanLiteral(_)
        | IRNode::NullLiteral
        | IRNode::Undefined
        | IRNode::TemplateLiteral(_)
        | IRNode::Identifier(_)
        | IRNode::This
        | IRNode::EmptyStatement
        | IRNode::PropertySignature { .. }
        | IRNode::Raw(_)
        | IRNode::Comment(_)) => leaf,
    }
}

/// Visit every node in `node` (itself included) in pre-order.
pub fn for_each_node(node: &IRNode, f: &mut impl FnMut(&IRNode)) {
    struct Visit<'f, F: FnMut(&IRNode)>(&'f mut F);

    impl<F: FnMut(&IRNode)> IRFolder for Visit<'_, F> {
        fn fold_node(&mut self, node: IRNode) -> IRNode {
            (self.0)(&node);
            walk_node(self, node)
        }
    }

    Visit(f).fold_node(node.clone());
}
