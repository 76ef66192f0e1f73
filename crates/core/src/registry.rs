//! Formatter registry keyed by source unit type.
//!
//! The registry is an ordinary value owned by the caller. Language support is
//! added by an explicit registration step, e.g. [`crate::formats::objc::register`],
//! and the registry is then passed by reference to whatever renders defs.

use std::collections::HashMap;

use crate::format::{DefFormatter, MakeDefFormatter};
use crate::formats::objc;
use crate::types::Def;

/// Errors that can occur during registration or lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A formatter is already registered for this unit type.
    #[error("def formatter already registered for unit type '{0}'")]
    AlreadyRegistered(String),

    /// No formatter is registered for this unit type.
    #[error("no def formatter registered for unit type '{0}'")]
    UnknownUnitType(String),
}

/// Maps unit type names to def formatter constructors.
#[derive(Default)]
pub struct FormatterRegistry {
    makers: HashMap<String, MakeDefFormatter>,
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("unit_types", &self.unit_types())
            .finish()
    }
}

impl FormatterRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in formatter registered.
    #[must_use]
    pub fn with_builtin() -> Self {
        Self::new().with_formatter(objc::UNIT_TYPE, objc::make_def_formatter)
    }

    /// Register a constructor for a unit type.
    ///
    /// The first registration wins; later ones for the same unit type are
    /// rejected and leave the registry unchanged.
    pub fn register(
        &mut self,
        unit_type: impl Into<String>,
        make: MakeDefFormatter,
    ) -> Result<(), RegistryError> {
        let unit_type = unit_type.into();
        if self.makers.contains_key(&unit_type) {
            return Err(RegistryError::AlreadyRegistered(unit_type));
        }
        tracing::debug!(unit_type = %unit_type, "Registered def formatter");
        self.makers.insert(unit_type, make);
        Ok(())
    }

    /// Builder form of [`register`](Self::register). Duplicates are logged and ignored.
    #[must_use]
    pub fn with_formatter(mut self, unit_type: impl Into<String>, make: MakeDefFormatter) -> Self {
        if let Err(e) = self.register(unit_type, make) {
            tracing::warn!(error = %e, "Ignoring duplicate def formatter");
        }
        self
    }

    /// Look up the constructor for a unit type.
    #[must_use]
    pub fn get(&self, unit_type: &str) -> Option<MakeDefFormatter> {
        self.makers.get(unit_type).copied()
    }

    /// Build a formatter for `def` using the constructor registered for `unit_type`.
    pub fn make<'a>(
        &self,
        unit_type: &str,
        def: &'a Def,
    ) -> Result<Box<dyn DefFormatter + 'a>, RegistryError> {
        let make = self.get(unit_type).ok_or_else(|| {
            tracing::trace!(unit_type, "No def formatter for unit type");
            RegistryError::UnknownUnitType(unit_type.to_string())
        })?;
        Ok(make(def))
    }

    /// Build a formatter for `def` keyed by its own unit type.
    pub fn for_def<'a>(&self, def: &'a Def) -> Result<Box<dyn DefFormatter + 'a>, RegistryError> {
        self.make(&def.unit_type, def)
    }

    /// Registered unit types, sorted.
    #[must_use]
    pub fn unit_types(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.makers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Check if no formatters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.makers.is_empty()
    }

    /// Number of registered formatters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.makers.len()
    }
}
