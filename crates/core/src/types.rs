//! Core types for objcdef.
//!
//! These mirror the records a source grapher emits: definitions, references
//! and the graph document that carries both. Keys follow the host's
//! PascalCase JSON layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single definition discovered in a source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Def {
    pub repo: String,
    #[serde(rename = "CommitID")]
    pub commit_id: String,
    /// Source unit type, used as the formatter registry key.
    pub unit_type: String,
    pub unit: String,
    pub path: String,
    pub tree_path: String,
    pub name: String,
    /// Kind tag, e.g. "CLASS" or "METHOD".
    pub kind: String,
    pub file: String,
    pub def_start: u32,
    pub def_end: u32,
    pub exported: bool,
    pub local: bool,
    pub test: bool,
}

impl Def {
    /// Create a def with just a kind tag and a name.
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the unit type.
    #[must_use]
    pub fn with_unit_type(mut self, unit_type: impl Into<String>) -> Self {
        self.unit_type = unit_type.into();
        self
    }

    /// Set the def path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Typed view of the kind tag.
    #[must_use]
    pub fn def_kind(&self) -> DefKind {
        DefKind::from_tag(&self.kind)
    }
}

/// Kind tags produced by the Objective-C grapher.
///
/// Anything outside the known vocabulary is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefKind {
    Class,
    Enum,
    Method,
    /// `VAR`, which the grapher uses for variables, arguments, properties
    /// and enumerators. It has no keyword or type label.
    Var,
    Other(String),
}

impl DefKind {
    /// Parse a kind tag. Never fails; unknown tags become `Other`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "CLASS" => Self::Class,
            "ENUM" => Self::Enum,
            "METHOD" => Self::Method,
            "VAR" => Self::Var,
            other => Self::Other(other.to_string()),
        }
    }

    /// The raw tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Class => "CLASS",
            Self::Enum => "ENUM",
            Self::Method => "METHOD",
            Self::Var => "VAR",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for DefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much scoping context to include when rendering a name.
///
/// Ordered from least to most context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Qualification {
    #[default]
    Unqualified,
    ScopeQualified,
    DepQualified,
    RepositoryWideQualified,
    LanguageWideQualified,
}

impl Qualification {
    /// All levels, least qualified first.
    pub const ALL: [Qualification; 5] = [
        Self::Unqualified,
        Self::ScopeQualified,
        Self::DepQualified,
        Self::RepositoryWideQualified,
        Self::LanguageWideQualified,
    ];

    /// Short name accepted on the command line.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Unqualified => "unqualified",
            Self::ScopeQualified => "scope",
            Self::DepQualified => "dep",
            Self::RepositoryWideQualified => "repo",
            Self::LanguageWideQualified => "lang",
        }
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Unrecognized qualification name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown qualification '{0}' (expected unqualified, scope, dep, repo or lang)")]
pub struct ParseQualificationError(pub String);

impl FromStr for Qualification {
    type Err = ParseQualificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unqualified" => Ok(Self::Unqualified),
            "scope" | "scopequalified" => Ok(Self::ScopeQualified),
            "dep" | "depqualified" => Ok(Self::DepQualified),
            "repo" | "repositorywidequalified" => Ok(Self::RepositoryWideQualified),
            "lang" | "languagewidequalified" => Ok(Self::LanguageWideQualified),
            _ => Err(ParseQualificationError(s.to_string())),
        }
    }
}

/// A reference from a source location to a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Ref {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub def_repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub def_unit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub def_unit: Option<String>,
    pub def_path: String,
    pub file: String,
    pub start: u32,
    pub end: u32,
    /// Whether this reference is also the definition site.
    pub def: bool,
}

/// Grapher output for one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GraphData {
    pub defs: Vec<Def>,
    pub refs: Vec<Ref>,
}
