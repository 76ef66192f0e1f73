//! Rendering whole grapher documents through a registry.

use std::borrow::Cow;

use crate::format::Rendering;
use crate::registry::FormatterRegistry;
use crate::types::{Def, GraphData, Qualification};

/// Options for [`render_graph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Qualification passed to every formatter.
    pub qualification: Qualification,
    /// Unit type assumed for defs whose `UnitType` is empty.
    pub default_unit_type: Option<String>,
    /// Keep only defs with one of these kind tags.
    pub kinds: Option<Vec<String>>,
}

impl RenderOptions {
    #[must_use]
    pub fn new(qualification: Qualification) -> Self {
        Self {
            qualification,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default_unit_type(mut self, unit_type: impl Into<String>) -> Self {
        self.default_unit_type = Some(unit_type.into());
        self
    }

    #[must_use]
    pub fn with_kinds(mut self, kinds: Vec<String>) -> Self {
        self.kinds = Some(kinds);
        self
    }

    fn keeps(&self, def: &Def) -> bool {
        self.kinds
            .as_ref()
            .map_or(true, |kinds| kinds.iter().any(|k| *k == def.kind))
    }

    fn fill_unit_type<'a>(&self, def: &'a Def) -> Cow<'a, Def> {
        match &self.default_unit_type {
            Some(unit_type) if def.unit_type.is_empty() => {
                Cow::Owned(def.clone().with_unit_type(unit_type.as_str()))
            }
            _ => Cow::Borrowed(def),
        }
    }
}

/// Render every def in `graph` that passes the kind filter and has a
/// registered formatter.
///
/// Defs without a formatter for their unit type are skipped with a warning.
#[must_use]
pub fn render_graph(
    registry: &FormatterRegistry,
    graph: &GraphData,
    options: &RenderOptions,
) -> Vec<Rendering> {
    let mut renderings = Vec::with_capacity(graph.defs.len());
    let mut skipped = 0usize;

    for def in graph.defs.iter().filter(|def| options.keeps(def)) {
        let def = options.fill_unit_type(def);
        match registry.for_def(&def) {
            Ok(formatter) => {
                let rendering = Rendering::new(&def, formatter.as_ref(), options.qualification);
                renderings.push(rendering);
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!(path = %def.path, kind = %def.def_kind(), "Skipping def: {}", e);
            }
        };
    }

    tracing::debug!(
        "Rendered {} of {} defs ({} without formatter)",
        renderings.len(),
        graph.defs.len(),
        skipped
    );
    renderings
}
