//! Converter options.
//!
//! The options mirror the small configuration surface of the converter:
//! the receiver identifiers that stand in for `props` and the setup context,
//! and a compatibility switch that moves reactive-API imports to the
//! `@vue/composition-api` plugin package.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Import source for the reactive API on Vue 3.
pub const REACTIVE_MODULE: &str = "vue";

/// Import source for the reactive API on Vue 2 with the composition plugin.
pub const COMPATIBLE_REACTIVE_MODULE: &str = "@vue/composition-api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Identifier bound to the component properties object.
    pub setup_props_key: String,
    /// Identifier bound to the setup context object.
    pub setup_context_key: String,
    /// Attribute reactive imports to `@vue/composition-api` instead of `vue`.
    pub compatible: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            setup_props_key: "props".to_string(),
            setup_context_key: "context".to_string(),
            compatible: false,
        }
    }
}

impl ConvertOptions {
    /// Parse options from a JSON object. Missing keys fall back to defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(text).context("failed to parse converter options")?;
        options.validate()?;
        Ok(options)
    }

    /// Reject receiver keys that could never be emitted as identifiers.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("setupPropsKey", &self.setup_props_key),
            ("setupContextKey", &self.setup_context_key),
        ] {
            if !is_identifier(value) {
                anyhow::bail!("option `{field}` must be a valid identifier, got {value:?}");
            }
        }
        if self.setup_props_key == self.setup_context_key {
            anyhow::bail!(
                "options `setupPropsKey` and `setupContextKey` must differ (both {:?})",
                self.setup_props_key
            );
        }
        Ok(())
    }

    /// Module that reactive-API imports (`computed`, `watch`, hooks) come from.
    pub fn reactive_module(&self) -> &'static str {
        if self.compatible {
            COMPATIBLE_REACTIVE_MODULE
        } else {
            REACTIVE_MODULE
        }
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
}
