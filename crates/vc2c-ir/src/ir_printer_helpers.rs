//! Helper methods for the IR printer.
//!
//! Contains block and object-literal layout, parameter lists, object property
//! forms and type annotation printing.

use crate::ir::{ArrowBody, IRNode, IRParam, IRProperty, IRPropertyKey, IRPropertyKind};
use crate::ir_printer::IRPrinter;
use crate::types::{TypeMember, TypeNode, TypeParam};

impl IRPrinter {
    pub(crate) fn emit_string_literal(&mut self, text: &str) {
        let mut escaped = String::with_capacity(text.len() + 2);
        escaped.push('\'');
        for ch in text.chars() {
            match ch {
                '\'' => escaped.push_str("\\'"),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                other => escaped.push(other),
            }
        }
        escaped.push('\'');
        self.write(&escaped);
    }

    /// Emit an expression in callee/object position, parenthesizing forms
    /// that would otherwise bind looser than the member access or call.
    pub(crate) fn emit_callee(&mut self, node: &IRNode) {
        let needs_parens = matches!(
            node.unannotated(),
            IRNode::ArrowFunction { .. }
                | IRNode::BinaryExpr { .. }
                | IRNode::ConditionalExpr { .. }
                | IRNode::AwaitExpr(_)
                | IRNode::PrefixUnaryExpr { .. }
                | IRNode::NewExpr { .. }
                | IRNode::ObjectLiteral { .. }
        );
        if needs_parens {
            self.write("(");
            self.emit_node(node);
            self.write(")");
        } else {
            self.emit_node(node);
        }
    }

    pub(crate) fn emit_comma_separated(&mut self, nodes: &[IRNode]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(node);
        }
    }

    /// `{ stmts }` on its own lines; empty blocks print as `{}`.
    pub(crate) fn emit_block_body(&mut self, stmts: &[IRNode]) {
        if stmts.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for stmt in stmts {
            self.write_indent();
            self.emit_node(stmt);
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    /// Branch of an `if`: blocks print as blocks, single statements get wrapped.
    pub(crate) fn emit_statement_body(&mut self, stmt: &IRNode) {
        match stmt.unannotated() {
            IRNode::Block(stmts) => self.emit_block_body(stmts),
            IRNode::IfStatement { .. } => self.emit_node(stmt),
            _ => self.emit_block_body(std::slice::from_ref(stmt)),
        }
    }

    pub(crate) fn emit_object_literal_inline(&mut self, properties: &[IRProperty]) {
        if properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        for (i, prop) in properties.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_property(prop);
        }
        self.write(" }");
    }

    pub(crate) fn emit_object_literal_multiline(&mut self, properties: &[IRProperty]) {
        if properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for (i, prop) in properties.iter().enumerate() {
            self.write_indent();
            self.emit_property(prop);
            if i < properties.len() - 1 {
                self.write(",");
            }
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    pub(crate) fn emit_parameters(&mut self, params: &[IRParam]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if param.rest {
                self.write("...");
            }
            self.write(&param.name);
            if param.optional {
                self.write("?");
            }
            if let Some(type_annotation) = &param.type_annotation {
                self.write(": ");
                self.emit_type(type_annotation);
            }
            if let Some(default) = &param.default_value {
                self.write(" = ");
                self.emit_node(default);
            }
        }
    }

    fn emit_property_key(&mut self, key: &IRPropertyKey) {
        match key {
            IRPropertyKey::Identifier(name) | IRPropertyKey::NumericLiteral(name) => {
                self.write(name);
            }
            IRPropertyKey::StringLiteral(name) => self.emit_string_literal(name),
            IRPropertyKey::Computed(expr) => {
                self.write("[");
                self.emit_node(expr);
                self.write("]");
            }
        }
    }

    pub(crate) fn emit_property(&mut self, prop: &IRProperty) {
        match prop.kind {
            IRPropertyKind::Spread => {
                self.write("...");
                self.emit_node(&prop.value);
            }
            IRPropertyKind::Shorthand => self.emit_property_key(&prop.key),
            IRPropertyKind::Init => {
                self.emit_property_key(&prop.key);
                self.write(": ");
                self.emit_node(&prop.value);
            }
            IRPropertyKind::Get | IRPropertyKind::Set | IRPropertyKind::Method => {
                match prop.kind {
                    IRPropertyKind::Get => self.write("get "),
                    IRPropertyKind::Set => self.write("set "),
                    _ => {}
                }
                self.emit_property_key(&prop.key);
                self.emit_method_like(&prop.value);
            }
        }
    }

    /// `(params) { body }` taken from an arrow function value.
    fn emit_method_like(&mut self, value: &IRNode) {
        match value.unannotated() {
            IRNode::ArrowFunction {
                parameters,
                return_type,
                body,
                ..
            } => {
                self.write("(");
                self.emit_parameters(parameters);
                self.write(")");
                if let Some(return_type) = return_type {
                    self.write(": ");
                    self.emit_type(return_type);
                }
                self.write(" ");
                match body {
                    ArrowBody::Block(stmts) => self.emit_block_body(stmts),
                    ArrowBody::Expression(expr) => {
                        self.emit_block_body(&[IRNode::ret(Some((**expr).clone()))]);
                    }
                }
            }
            other => {
                // Not a function: degrade to a property assignment form.
                self.write(": ");
                self.emit_node(other);
            }
        }
    }

    pub(crate) fn emit_type_arguments(&mut self, type_arguments: &[TypeNode]) {
        if type_arguments.is_empty() {
            return;
        }
        self.write("<");
        for (i, ty) in type_arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_type(ty);
        }
        self.write(">");
    }

    fn emit_type_params(&mut self, params: &[TypeParam]) {
        self.write("(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(&param.name);
            self.write(": ");
            self.emit_type(&param.type_node);
        }
        self.write(")");
    }

    pub fn emit_type(&mut self, ty: &TypeNode) {
        match ty {
            TypeNode::Any => self.write("any"),
            TypeNode::Unknown => self.write("unknown"),
            TypeNode::Void => self.write("void"),
            TypeNode::Never => self.write("never"),
            TypeNode::String => self.write("string"),
            TypeNode::Number => self.write("number"),
            TypeNode::Boolean => self.write("boolean"),
            TypeNode::Null => self.write("null"),
            TypeNode::Undefined => self.write("undefined"),
            TypeNode::Reference {
                name,
                type_arguments,
            } => {
                self.write(name);
                self.emit_type_arguments(type_arguments);
            }
            TypeNode::StringLiteral(text) => self.emit_string_literal(text),
            TypeNode::NumberLiteral(text) => self.write(text),
            TypeNode::BooleanLiteral(value) => self.write(if *value { "true" } else { "false" }),
            TypeNode::Array(element) => {
                let needs_parens = matches!(
                    **element,
                    TypeNode::Union(_) | TypeNode::Function { .. }
                );
                if needs_parens {
                    self.write("(");
                }
                self.emit_type(element);
                if needs_parens {
                    self.write(")");
                }
                self.write("[]");
            }
            TypeNode::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        self.write(" | ");
                    }
                    self.emit_type(member);
                }
            }
            TypeNode::TypeLiteral(members) => {
                if members.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                for member in members {
                    self.emit_type_member(member);
                    self.write(" ");
                }
                self.write("}");
            }
            TypeNode::Function {
                parameters,
                return_type,
            } => {
                self.emit_type_params(parameters);
                self.write(" => ");
                self.emit_type(return_type);
            }
        }
    }

    fn emit_type_member(&mut self, member: &TypeMember) {
        match member {
            TypeMember::Property {
                name,
                optional,
                type_node,
            } => {
                self.write(name);
                if *optional {
                    self.write("?");
                }
                self.write(": ");
                self.emit_type(type_node);
            }
            TypeMember::CallSignature {
                parameters,
                return_type,
            } => {
                self.emit_type_params(parameters);
                self.write(": ");
                self.emit_type(return_type);
            }
        }
        self.write(";");
    }
}
