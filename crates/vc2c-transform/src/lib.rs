//! Conversion engine for class-style Vue components.
//!
//! The engine runs in four stages over an in-memory list of fragments:
//!
//! 1. `converters`: one [`ConversionResult`] per class member
//! 2. `mergers`: accessor pairing and property consolidation
//! 3. `rewrite`: `this.x` classification, dependency capture and emission
//!    capture, followed by `reorder`
//! 4. `emits`: one aggregated, typed `emit` declaration
//!
//! [`convert_members`] drives all stages.

pub mod converters;
pub mod emits;
pub mod error;
pub mod member;
pub mod mergers;
pub mod pipeline;
pub mod reorder;
pub mod result;
pub mod rewrite;
pub mod type_oracle;

pub use converters::{ConvertContext, convert_member};
pub use emits::{EmitSignatureTable, synthesize_emit_declaration};
pub use error::ConvertError;
pub use member::{ClassMember, Decorator, MemberKind};
pub use mergers::{merge_computed, merge_props, run_mergers};
pub use pipeline::{ConversionOutput, convert_members};
pub use reorder::reorder;
pub use result::{Attribute, ConversionResult, EmitEvent, ReferenceKind, ResultKind, Tag};
pub use rewrite::{ReferenceIndex, Resolution, RewrittenResult, classify, rewrite_results};
pub use type_oracle::{DeclaredTypeOracle, TableTypeOracle, TypeOracle};
