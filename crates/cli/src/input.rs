//! Reading grapher output from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use objcdef_core::{Def, GraphData};

/// Errors reading or decoding graph input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Input file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input is not a graph document or a def array.
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read the whole input. `None` or `-` reads stdin.
pub fn read_input(path: Option<&str>) -> Result<String, InputError> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| InputError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(buf)
        }
        Some(p) => {
            let path = Path::new(p);
            tracing::debug!("Reading graph from {}", path.display());
            fs::read_to_string(path).map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Decode a `{"Defs": [...], "Refs": [...]}` document or a bare array of defs.
///
/// Blank input decodes to an empty graph.
pub fn parse_graph(text: &str) -> Result<GraphData, InputError> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Ok(GraphData::default());
    }

    if trimmed.starts_with('[') {
        let defs: Vec<Def> = serde_json::from_str(trimmed)?;
        tracing::trace!("Decoded bare def array ({} defs)", defs.len());
        return Ok(GraphData {
            defs,
            refs: Vec::new(),
        });
    }

    let graph: GraphData = serde_json::from_str(trimmed)?;
    tracing::trace!(
        "Decoded graph document ({} defs, {} refs)",
        graph.defs.len(),
        graph.refs.len()
    );
    Ok(graph)
}
