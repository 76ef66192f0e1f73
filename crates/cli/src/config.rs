//! Configuration file loading and environment variable handling.
//!
//! Precedence: CLI args > Environment vars > Config file > Defaults

use objcdef_core::Qualification;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Unit type assumed for defs that do not carry one.
pub const DEFAULT_UNIT_TYPE: &str = objcdef_core::formats::objc::UNIT_TYPE;

/// Default config file content for `--config-init`.
pub const DEFAULT_CONFIG: &str = r#"# objcdef configuration
# See: objcdef --help for all options

# Name qualification: unqualified, scope, dep, repo, lang
qualification = "unqualified"

# Unit type used for defs without a UnitType field
unit_type = "ObjectiveC"

# Disable colored output
no_color = false
"#;

/// Configuration loaded from file and environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub qualification: Option<String>,
    pub unit_type: Option<String>,
    pub no_color: Option<bool>,
}

impl Config {
    /// Get the config file path.
    ///
    /// - Linux/macOS: `~/.config/objcdef/config.toml`
    /// - Windows: `%APPDATA%\objcdef\config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("objcdef").join("config.toml"))
    }

    /// Load config from file. Returns default if file doesn't exist.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Get qualification with precedence: env > config > default.
    ///
    /// Unparseable values are reported on stderr and skipped.
    pub fn qualification(&self) -> Qualification {
        std::env::var("OBJCDEF_QUAL")
            .ok()
            .and_then(|s| parse_qualification(&s, "OBJCDEF_QUAL"))
            .or_else(|| {
                self.qualification
                    .as_deref()
                    .and_then(|s| parse_qualification(s, "config file"))
            })
            .unwrap_or_default()
    }

    /// Get unit_type with precedence: env > config > default.
    pub fn unit_type(&self) -> String {
        std::env::var("OBJCDEF_UNIT_TYPE")
            .ok()
            .or_else(|| self.unit_type.clone())
            .unwrap_or_else(|| DEFAULT_UNIT_TYPE.to_string())
    }

    /// Get no_color with precedence: env > config > default.
    ///
    /// Respects the `NO_COLOR` standard (https://no-color.org/).
    pub fn no_color(&self) -> bool {
        if std::env::var("NO_COLOR").is_ok() {
            return true;
        }
        if std::env::var("OBJCDEF_NO_COLOR").is_ok() {
            return true;
        }
        self.no_color.unwrap_or(false)
    }
}

fn parse_qualification(s: &str, source: &str) -> Option<Qualification> {
    match s.parse() {
        Ok(q) => Some(q),
        Err(e) => {
            eprintln!("Warning: Ignoring qualification from {}: {}", source, e);
            None
        }
    }
}

/// Create a default config file at the standard location.
pub fn init_config() -> Result<PathBuf, String> {
    let path = Config::path().ok_or("Cannot determine config directory")?;

    if path.exists() {
        return Err(format!("Config file already exists: {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create directory: {}", e))?;
    }

    fs::write(&path, DEFAULT_CONFIG).map_err(|e| format!("Failed to write config: {}", e))?;

    Ok(path)
}
