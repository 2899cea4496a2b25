//! Errors that stop a conversion run.
//!
//! Declining a member is not an error (converters return `Ok(None)`), and
//! neither is a low-confidence rewrite or an unresolvable ordering. Only
//! structurally invalid input ends up here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// `@PropSync` / `@ModelSync` on something other than a class property.
    #[error("@{decorator} can only decorate a class property, but `{member}` is a {shape}")]
    SyncOnNonProperty {
        member: String,
        decorator: String,
        shape: &'static str,
    },
}
