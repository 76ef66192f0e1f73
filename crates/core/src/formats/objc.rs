//! Objective-C def formatter.

use crate::format::DefFormatter;
use crate::registry::{FormatterRegistry, RegistryError};
use crate::types::{Def, DefKind, Qualification};

/// Registry key the Objective-C grapher stamps on its defs.
pub const UNIT_TYPE: &str = "ObjectiveC";

/// Language name reported by the formatter.
pub const LANGUAGE: &str = "Objective-C";

/// Formats defs produced by the Objective-C grapher.
pub struct ObjcDefFormatter<'a> {
    def: &'a Def,
}

impl<'a> ObjcDefFormatter<'a> {
    #[must_use]
    pub fn new(def: &'a Def) -> Self {
        Self { def }
    }
}

/// Constructor registered under [`UNIT_TYPE`].
pub fn make_def_formatter(def: &Def) -> Box<dyn DefFormatter + '_> {
    Box::new(ObjcDefFormatter::new(def))
}

/// Register the Objective-C formatter.
pub fn register(registry: &mut FormatterRegistry) -> Result<(), RegistryError> {
    registry.register(UNIT_TYPE, make_def_formatter)
}

impl DefFormatter for ObjcDefFormatter<'_> {
    fn language(&self) -> &'static str {
        LANGUAGE
    }

    fn def_keyword(&self) -> &'static str {
        match self.def.def_kind() {
            DefKind::Class => "class",
            DefKind::Enum => "enum",
            DefKind::Method => "method",
            _ => "",
        }
    }

    fn kind(&self) -> &str {
        &self.def.kind
    }

    fn name(&self, _qual: Qualification) -> String {
        self.def.name.clone()
    }

    fn type_label(&self, _qual: Qualification) -> String {
        match self.def.def_kind() {
            DefKind::Class => "class".to_string(),
            DefKind::Enum => "enum".to_string(),
            _ => String::new(),
        }
    }

    fn name_and_type_separator(&self) -> &'static str {
        " "
    }
}
