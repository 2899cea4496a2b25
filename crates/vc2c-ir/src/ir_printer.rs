//! IR Printer - Emits TypeScript strings from IR nodes
//!
//! The printer walks IR trees and writes TypeScript with two-space
//! indentation, single-quoted strings and semicolon-terminated statements.
//! Layout is deliberately plain: the converted module is expected to pass
//! through a formatter before it reaches a user.

#[path = "ir_printer_helpers.rs"]
mod helpers;

use crate::ir::{ArrowBody, IRComment, IRNode, VarKind};

const INDENT: &str = "  ";

pub struct IRPrinter {
    output: String,
    indent_level: u32,
}

impl Default for IRPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl IRPrinter {
    pub const fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    /// Print a single node into a fresh string.
    pub fn emit_to_string(node: &IRNode) -> String {
        let mut printer = Self::new();
        printer.emit_node(node);
        printer.output
    }

    /// Print a statement list, one statement per line.
    pub fn emit_statements(nodes: &[IRNode]) -> String {
        let mut printer = Self::new();
        for node in nodes {
            printer.write_indent();
            printer.emit_node(node);
            printer.write_line();
        }
        printer.output
    }

    pub fn emit(&mut self, node: &IRNode) -> &str {
        self.emit_node(node);
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub(crate) fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub(crate) fn write_line(&mut self) {
        self.output.push('\n');
    }

    pub(crate) fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
    }

    pub(crate) const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) const fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn emit_node(&mut self, node: &IRNode) {
        match node {
            IRNode::NumericLiteral(text) => self.write(text),
            IRNode::StringLiteral(text) => self.emit_string_literal(text),
            IRNode::BooleanLiteral(value) => self.write(if *value { "true" } else { "false" }),
            IRNode::NullLiteral => self.write("null"),
            IRNode::Undefined => self.write("undefined"),
            IRNode::TemplateLiteral(text) | IRNode::Raw(text) => self.write(text),
            IRNode::Identifier(name) => self.write(name),
            IRNode::This => self.write("this"),
            IRNode::BinaryExpr {
                left,
                operator,
                right,
            } => {
                self.emit_node(left);
                self.write(" ");
                self.write(operator);
                self.write(" ");
                self.emit_node(right);
            }
            IRNode::PrefixUnaryExpr { operator, operand } => {
                self.write(operator);
                // Keyword operators need a separating space: `typeof x`, `void 0`
                if operator.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    self.write(" ");
                }
                self.emit_node(operand);
            }
            IRNode::PostfixUnaryExpr { operand, operator } => {
                self.emit_node(operand);
                self.write(operator);
            }
            IRNode::CallExpr {
                callee,
                type_arguments,
                arguments,
            } => {
                self.emit_callee(callee);
                self.emit_type_arguments(type_arguments);
                self.write("(");
                self.emit_comma_separated(arguments);
                self.write(")");
            }
            IRNode::NewExpr { callee, arguments } => {
                self.write("new ");
                self.emit_callee(callee);
                self.write("(");
                self.emit_comma_separated(arguments);
                self.write(")");
            }
            IRNode::PropertyAccess { object, property } => {
                self.emit_callee(object);
                self.write(".");
                self.write(property);
            }
            IRNode::ElementAccess { object, index } => {
                self.emit_callee(object);
                self.write("[");
                self.emit_node(index);
                self.write("]");
            }
            IRNode::NonNullExpr(expr) => {
                self.emit_callee(expr);
                self.write("!");
            }
            IRNode::AwaitExpr(expr) => {
                self.write("await ");
                self.emit_node(expr);
            }
            IRNode::ConditionalExpr {
                condition,
                when_true,
                when_false,
            } => {
                self.emit_node(condition);
                self.write(" ? ");
                self.emit_node(when_true);
                self.write(" : ");
                self.emit_node(when_false);
            }
            IRNode::Parenthesized(expr) => {
                self.write("(");
                self.emit_node(expr);
                self.write(")");
            }
            IRNode::ArrayLiteral(elements) => {
                self.write("[");
                self.emit_comma_separated(elements);
                self.write("]");
            }
            IRNode::SpreadElement(expr) => {
                self.write("...");
                self.emit_node(expr);
            }
            IRNode::ObjectLiteral {
                properties,
                multiline,
            } => {
                if *multiline {
                    self.emit_object_literal_multiline(properties);
                } else {
                    self.emit_object_literal_inline(properties);
                }
            }
            IRNode::ArrowFunction {
                parameters,
                return_type,
                body,
                is_async,
            } => {
                if *is_async {
                    self.write("async ");
                }
                self.write("(");
                self.emit_parameters(parameters);
                self.write(")");
                if let Some(return_type) = return_type {
                    self.write(": ");
                    self.emit_type(return_type);
                }
                self.write(" => ");
                match body {
                    ArrowBody::Block(stmts) => self.emit_block_body(stmts),
                    ArrowBody::Expression(expr) => {
                        // `() => ({})` needs parentheses to not read as a block
                        if matches!(expr.unannotated(), IRNode::ObjectLiteral { .. }) {
                            self.write("(");
                            self.emit_node(expr);
                            self.write(")");
                        } else {
                            self.emit_node(expr);
                        }
                    }
                }
            }
            IRNode::VarDecl {
                kind,
                name,
                type_annotation,
                initializer,
            } => self.emit_var_decl(*kind, name, type_annotation.as_ref(), initializer.as_deref()),
            IRNode::ExpressionStatement(expr) => {
                self.emit_node(expr);
                self.write(";");
            }
            IRNode::ReturnStatement(expr) => {
                self.write("return");
                if let Some(expr) = expr {
                    self.write(" ");
                    self.emit_node(expr);
                }
                self.write(";");
            }
            IRNode::IfStatement {
                condition,
                then_branch,
                else_branch,
            } => {
                self.write("if (");
                self.emit_node(condition);
                self.write(") ");
                self.emit_statement_body(then_branch);
                if let Some(else_branch) = else_branch {
                    self.write(" else ");
                    self.emit_statement_body(else_branch);
                }
            }
            IRNode::Block(stmts) => self.emit_block_body(stmts),
            IRNode::ThrowStatement(expr) => {
                self.write("throw ");
                self.emit_node(expr);
                self.write(";");
            }
            IRNode::EmptyStatement => self.write(";"),
            IRNode::FunctionDecl {
                name,
                parameters,
                return_type,
                body,
                is_async,
            } => {
                if *is_async {
                    self.write("async ");
                }
                self.write("function ");
                self.write(name);
                self.write("(");
                self.emit_parameters(parameters);
                self.write(")");
                if let Some(return_type) = return_type {
                    self.write(": ");
                    self.emit_type(return_type);
                }
                self.write(" ");
                self.emit_block_body(body);
            }
            IRNode::InterfaceDecl { name, members } => {
                self.write("interface ");
                self.write(name);
                self.write(" ");
                self.emit_block_body(members);
            }
            IRNode::PropertySignature {
                name,
                optional,
                type_annotation,
            } => {
                self.write(name);
                if *optional {
                    self.write("?");
                }
                if let Some(type_annotation) = type_annotation {
                    self.write(": ");
                    self.emit_type(type_annotation);
                }
                self.write(";");
            }
            IRNode::Comment(comment) => self.emit_comment(comment),
            IRNode::Annotated { node, comments } => {
                for comment in &comments.leading {
                    self.emit_comment(comment);
                    if comment.is_block {
                        self.write(" ");
                    } else {
                        self.write_line();
                        self.write_indent();
                    }
                }
                self.emit_node(node);
                for comment in &comments.trailing {
                    self.write(" ");
                    self.emit_comment(comment);
                }
            }
        }
    }

    fn emit_var_decl(
        &mut self,
        kind: VarKind,
        name: &str,
        type_annotation: Option<&crate::types::TypeNode>,
        initializer: Option<&IRNode>,
    ) {
        self.write(kind.keyword());
        self.write(" ");
        self.write(name);
        if let Some(type_annotation) = type_annotation {
            self.write(": ");
            self.emit_type(type_annotation);
        }
        if let Some(initializer) = initializer {
            self.write(" = ");
            self.emit_node(initializer);
        }
        self.write(";");
    }

    pub(crate) fn emit_comment(&mut self, comment: &IRComment) {
        if comment.is_block {
            self.write("/*");
            self.write(&comment.text);
            self.write("*/");
        } else {
            self.write("//");
            self.write(&comment.text);
        }
    }
}

#[cfg(test)]
#[path = "../tests/ir_printer.rs"]
mod tests;
