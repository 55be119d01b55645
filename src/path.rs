//! Attribute paths.
//!
//! A path locates one attribute inside a resource's schema so that
//! diagnostics can point the user at the offending configuration.

use serde::{Deserialize, Serialize};

/// One step in an attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum PathStep {
    AttributeName(String),
    ElementKeyInt(i64),
    ElementKeyString(String),
}

/// Location of an attribute, e.g. `rules[0].enabled`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// Path to a top-level attribute.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![PathStep::AttributeName(name.into())],
        }
    }

    /// Descend into a nested attribute.
    pub fn at_name(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::AttributeName(name.into()));
        self
    }

    /// Descend into a list element.
    pub fn at_list_index(mut self, index: i64) -> Self {
        self.steps.push(PathStep::ElementKeyInt(index));
        self
    }

    /// Descend into a map element.
    pub fn at_map_key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(PathStep::ElementKeyString(key.into()));
        self
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Display for AttributePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::AttributeName(name) if i == 0 => write!(f, "{}", name)?,
                PathStep::AttributeName(name) => write!(f, ".{}", name)?,
                PathStep::ElementKeyInt(index) => write!(f, "[{}]", index)?,
                PathStep::ElementKeyString(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}
