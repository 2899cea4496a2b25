//! vc2c: convert Vue class components to `<script setup>` composition code.
//!
//! The front end hands over the class body as [`ClassMember`]s plus a
//! [`TypeOracle`]; [`convert_class`] returns ordered statements and the
//! imports they need, and [`convert_class_to_source`] renders both as
//! TypeScript ready for a formatter.
//!
//! ```
//! use vc2c::{ClassMember, ConvertOptions, DeclaredTypeOracle, IRNode, convert_class_to_source};
//!
//! let members = [ClassMember::property("count", None).with_initializer(IRNode::number("0"))];
//! let source = convert_class_to_source(&members, &ConvertOptions::default(), &DeclaredTypeOracle)?;
//! assert_eq!(source, "import { ref } from 'vue';\n\nconst count = ref(0);\n");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod tracing_config;

pub use vc2c_common::{ConvertOptions, ImportDecl, ImportRequest, ImportSet};
pub use vc2c_ir::{
    IRComment, IRNode, IRParam, IRPrinter, IRProperty, SyntheticComments, TypeMember, TypeNode,
};
pub use vc2c_transform::{
    ClassMember, ConversionOutput, ConversionResult, ConvertError, Decorator, DeclaredTypeOracle,
    MemberKind, ReferenceKind, TableTypeOracle, Tag, TypeOracle,
};

pub use vc2c_common as common;
pub use vc2c_ir as ir;
pub use vc2c_transform as transform;

use anyhow::Context;

/// Validate `options` and convert one class body.
pub fn convert_class(
    members: &[ClassMember],
    options: &ConvertOptions,
    oracle: &dyn TypeOracle,
) -> anyhow::Result<ConversionOutput> {
    options.validate()?;
    let output = vc2c_transform::convert_members(members, options, oracle)
        .context("failed to convert class component")?;
    if !output.skipped.is_empty() {
        tracing::info!(skipped = ?output.skipped, "some members were left unconverted");
    }
    Ok(output)
}

/// `import { a, b } from 'module';` lines, a blank line, then the statements.
pub fn render_source(output: &ConversionOutput) -> String {
    let mut source = String::new();
    for decl in &output.imports {
        source.push_str("import { ");
        source.push_str(&decl.named.join(", "));
        source.push_str(" } from '");
        source.push_str(&decl.module);
        source.push_str("';\n");
    }
    if !output.imports.is_empty() && !output.statements.is_empty() {
        source.push('\n');
    }
    source.push_str(&IRPrinter::emit_statements(&output.statements));
    source
}

/// [`convert_class`] followed by [`render_source`].
pub fn convert_class_to_source(
    members: &[ClassMember],
    options: &ConvertOptions,
    oracle: &dyn TypeOracle,
) -> anyhow::Result<String> {
    let output = convert_class(members, options, oracle)?;
    Ok(render_source(&output))
}
