//! Named imports requested by conversion results.
//!
//! Each conversion result lists the names it needs together with the module
//! they come from. `ImportSet` folds those requests into one declaration per
//! module, dropping duplicate names while keeping first-seen order so output
//! is stable across runs.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Names required from one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRequest {
    pub named: Vec<String>,
    pub module: String,
}

impl ImportRequest {
    pub fn new(named: impl IntoIterator<Item = impl Into<String>>, module: impl Into<String>) -> Self {
        Self {
            named: named.into_iter().map(Into::into).collect(),
            module: module.into(),
        }
    }

    pub fn single(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            named: vec![name.into()],
            module: module.into(),
        }
    }
}

/// One aggregated import declaration: `import { a, b } from 'module'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDecl {
    pub module: String,
    pub named: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    modules: IndexMap<String, IndexSet<String>>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, request: &ImportRequest) {
        // A request with no names contributes nothing, not even an empty import.
        if request.named.is_empty() {
            return;
        }
        let names = self.modules.entry(request.module.clone()).or_default();
        names.extend(request.named.iter().cloned());
    }

    pub fn extend<'a>(&mut self, requests: impl IntoIterator<Item = &'a ImportRequest>) {
        for request in requests {
            self.add(request);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn contains(&self, module: &str, name: &str) -> bool {
        self.modules
            .get(module)
            .is_some_and(|names| names.contains(name))
    }

    pub fn into_decls(self) -> Vec<ImportDecl> {
        self.modules
            .into_iter()
            .map(|(module, names)| ImportDecl {
                module,
                named: names.into_iter().collect(),
            })
            .collect()
    }
}
