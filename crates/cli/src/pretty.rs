//! Colored one-line rendering of formatted defs.
//!
//! Colors:
//! - Keyword: blue, bold
//! - Name: yellow
//! - Type label: green
//! - Unit type and path (verbose mode): bright black (dimmed)

use colored::{Color, Colorize};
use objcdef_core::Rendering;

/// Configuration for pretty printing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyConfig {
    /// Enable colored output.
    pub color: bool,
    /// Append the def path after the rendering.
    pub show_paths: bool,
}

/// Render one def as a line. Without color this is exactly `rendered`
/// (plus the path when requested).
pub fn pretty_rendering(r: &Rendering, config: &PrettyConfig) -> String {
    let mut output = String::new();

    if !r.keyword.is_empty() {
        output.push_str(&colorize_bold(&r.keyword, Color::Blue, config.color));
        output.push(' ');
    }
    output.push_str(&colorize(&r.name, Color::Yellow, config.color));
    if !r.type_label.is_empty() {
        output.push_str(&r.separator);
        output.push_str(&colorize(&r.type_label, Color::Green, config.color));
    }

    if config.show_paths && !r.path.is_empty() {
        let suffix = format!("  [{}:{}]", r.unit_type, r.path);
        output.push_str(&colorize(&suffix, Color::BrightBlack, config.color));
    }

    output
}

fn colorize(s: &str, color: Color, enabled: bool) -> String {
    if enabled {
        s.color(color).to_string()
    } else {
        s.to_string()
    }
}

fn colorize_bold(s: &str, color: Color, enabled: bool) -> String {
    if enabled {
        s.color(color).bold().to_string()
    } else {
        s.to_string()
    }
}
