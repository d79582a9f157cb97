use std::collections::BTreeMap;

use crate::animation::curve::Curve;
use crate::foundation::error::{SceneError, SceneResult};

/// Name of the interpolation function the viewer provides without registration.
pub const BUILTIN_LINEAR: &str = "line";

/// Name-to-curve mapping referenced by primitives through `fu=NAME`.
#[derive(Clone, Debug, Default)]
pub struct FunctionRegistry {
    funcs: BTreeMap<String, Curve>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `curve` under `name`.
    ///
    /// Names must be non-empty, free of whitespace, unique, and distinct from
    /// [`BUILTIN_LINEAR`]. Every sample must be finite.
    pub fn register(&mut self, name: impl Into<String>, curve: Curve) -> SceneResult<&Curve> {
        let name = name.into();
        if name.is_empty() {
            return Err(SceneError::registry("function name must be non-empty"));
        }
        if name.contains(char::is_whitespace) {
            return Err(SceneError::registry(format!(
                "function name '{name}' must not contain whitespace"
            )));
        }
        if name == BUILTIN_LINEAR {
            return Err(SceneError::registry(format!(
                "function name '{name}' is reserved"
            )));
        }
        if self.funcs.contains_key(&name) {
            return Err(SceneError::registry(format!(
                "duplicate function name '{name}'"
            )));
        }
        if let Some(i) = curve.first_non_finite() {
            return Err(SceneError::registry(format!(
                "function '{name}' has a non-finite sample at index {i}"
            )));
        }
        Ok(self.funcs.entry(name).or_insert(curve))
    }

    /// Return `true` when `name` can be referenced by a primitive.
    pub fn contains(&self, name: &str) -> bool {
        name == BUILTIN_LINEAR || self.funcs.contains_key(name)
    }

    /// Curve registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Curve> {
        self.funcs.get(name)
    }

    /// Number of registered curves, the built-in one excluded.
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Return `true` when nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Registered names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.funcs.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/registry.rs"]
mod tests;
