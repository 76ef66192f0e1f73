//! objcdef Core
//!
//! Renders Objective-C definitions from a source grapher into short
//! keyword/name/type strings for code-indexing hosts.
//!
//! # Quick Start
//!
//! ```
//! use objcdef_core::{Def, FormatterRegistry, Qualification};
//!
//! let registry = FormatterRegistry::with_builtin();
//!
//! let def = Def::new("CLASS", "AppDelegate").with_unit_type("ObjectiveC");
//! let formatter = registry.for_def(&def).unwrap();
//!
//! assert_eq!(formatter.language(), "Objective-C");
//! assert_eq!(formatter.def_keyword(), "class");
//! assert_eq!(formatter.render(Qualification::Unqualified), "class AppDelegate class");
//! ```
//!
//! # Registering Formatters
//!
//! Formatters are looked up by unit type in a [`FormatterRegistry`] owned by
//! the caller. Build one empty and register what you need:
//!
//! ```
//! use objcdef_core::{formats::objc, FormatterRegistry};
//!
//! let mut registry = FormatterRegistry::new();
//! objc::register(&mut registry).unwrap();
//! assert_eq!(registry.unit_types(), vec!["ObjectiveC"]);
//! ```

pub mod format;
pub mod formats;
pub mod registry;
pub mod render;
pub mod types;

pub use format::{DefFormatter, MakeDefFormatter, Rendering};
pub use registry::{FormatterRegistry, RegistryError};
pub use render::{render_graph, RenderOptions};
pub use types::*;
