//! Output IR for the vc2c converter.
//!
//! - `ir`: TypeScript-shaped IR nodes and builder helpers
//! - `types`: type annotations (`TypeNode`)
//! - `fold`: ownership-taking tree fold used by rewrite passes
//! - `ir_printer`: renders IR as TypeScript text

pub mod fold;
pub mod ir;
pub mod ir_printer;
pub mod types;

pub use fold::{IRFolder, for_each_node, walk_node};
pub use ir::{
    ArrowBody, IRComment, IRNode, IRParam, IRProperty, IRPropertyKey, IRPropertyKind,
    SyntheticComments, VarKind,
};
pub use ir_printer::IRPrinter;
pub use types::{TypeMember, TypeNode, TypeParam};
