//! Def formatter trait definition.

use serde::Serialize;

use crate::types::{Def, Qualification};

/// Renders one definition for display.
///
/// Implementations wrap a borrowed [`Def`](crate::Def) and answer a fixed set
/// of queries about it. Every query is total: unknown kinds produce empty
/// strings rather than errors.
pub trait DefFormatter: Send + Sync {
    /// Human-readable language name (e.g., "Objective-C").
    fn language(&self) -> &'static str;

    /// Keyword that introduces the definition in source (e.g., "class").
    fn def_keyword(&self) -> &'static str;

    /// Raw kind tag of the definition.
    fn kind(&self) -> &str;

    /// Display name at the given qualification level.
    fn name(&self, qual: Qualification) -> String;

    /// Type label shown after the name.
    fn type_label(&self, qual: Qualification) -> String;

    /// Separator placed between name and type label.
    fn name_and_type_separator(&self) -> &'static str;

    /// Name followed by separator and type label, if there is a type label.
    fn name_and_type(&self, qual: Qualification) -> String {
        let name = self.name(qual);
        let type_label = self.type_label(qual);
        if type_label.is_empty() {
            name
        } else {
            format!("{}{}{}", name, self.name_and_type_separator(), type_label)
        }
    }

    /// One-line rendering: keyword, name and type label.
    fn render(&self, qual: Qualification) -> String {
        let name_and_type = self.name_and_type(qual);
        match self.def_keyword() {
            "" => name_and_type,
            keyword => format!("{} {}", keyword, name_and_type),
        }
    }
}

/// Builds a formatter around a borrowed def.
pub type MakeDefFormatter = for<'a> fn(&'a Def) -> Box<dyn DefFormatter + 'a>;

/// Every query answered for one def, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub path: String,
    pub unit_type: String,
    pub language: String,
    pub keyword: String,
    pub kind: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub separator: String,
    pub rendered: String,
}

impl Rendering {
    /// Collect all query results from `formatter` for `def`.
    #[must_use]
    pub fn new(def: &Def, formatter: &dyn DefFormatter, qual: Qualification) -> Self {
        Self {
            path: def.path.clone(),
            unit_type: def.unit_type.clone(),
            language: formatter.language().to_string(),
            keyword: formatter.def_keyword().to_string(),
            kind: formatter.kind().to_string(),
            name: formatter.name(qual),
            type_label: formatter.type_label(qual),
            separator: formatter.name_and_type_separator().to_string(),
            rendered: formatter.render(qual),
        }
    }
}
