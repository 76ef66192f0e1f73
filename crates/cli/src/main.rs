mod config;
mod input;
mod pretty;

use config::Config;

use std::io::IsTerminal;

use clap::Parser;
use colored::{control::set_override, Colorize};
use objcdef_core::{render_graph, FormatterRegistry, Qualification, RenderOptions};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::pretty::{pretty_rendering, PrettyConfig};

const LONG_ABOUT: &str = r##"
objcdef renders Objective-C definitions from grapher output.

Input is the JSON a source grapher writes: either a {"Defs": [...], "Refs": [...]}
document or a bare array of defs. Each def is looked up in the formatter
registry by its UnitType and printed as keyword, name and type label.

EXAMPLES:
  objcdef graph.json                 Render every def in a graph file
  objcdef - < graph.json             Read from stdin
  objcdef -j graph.json              JSON output with every formatter field
  objcdef -k CLASS,ENUM graph.json   Only classes and enums
  objcdef --list-formatters          Show registered unit types

OUTPUT:
  class AppDelegate class
  method viewDidLoad
  enum UIViewAnimationCurve enum

CONFIGURATION:
  Settings can be configured via CLI flags, environment variables, or config file.
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting       | CLI flag        | Env var            | Default
  --------------|-----------------|--------------------|------------
  qualification | -q, --qual      | OBJCDEF_QUAL       | unqualified
  unit_type     | -u, --unit-type | OBJCDEF_UNIT_TYPE  | ObjectiveC
  no_color      | -C, --no-color  | OBJCDEF_NO_COLOR   | false

  Config file location: objcdef --config-path
  Generate default config: objcdef --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"##;

#[derive(Parser)]
#[command(name = "objcdef")]
#[command(version)]
#[command(about = "Render Objective-C definitions from grapher output")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// Graph JSON file to read (`-` or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output results as JSON (for scripting/piping)
    #[arg(long, short = 'j')]
    json: bool,

    /// Name qualification: unqualified, scope, dep, repo, lang
    #[arg(long = "qual", short = 'q', value_name = "LEVEL")]
    qualification: Option<Qualification>,

    /// Unit type assumed for defs without a UnitType field
    #[arg(long, short = 'u', value_name = "NAME")]
    unit_type: Option<String>,

    /// Only render defs with these kind tags (comma-separated)
    ///
    /// Examples: --kind CLASS,ENUM  or  -k METHOD
    #[arg(long, short = 'k', value_delimiter = ',', value_name = "KIND")]
    kind: Option<Vec<String>>,

    /// Append unit type and def path to each line
    #[arg(long)]
    show_paths: bool,

    /// List registered formatter unit types
    #[arg(long)]
    list_formatters: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// Enable verbose logging (use multiple times for more detail)
    ///
    /// -v shows debug messages, -vv shows trace messages.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show config file path
    #[arg(long)]
    config_path: bool,

    /// Generate default config file (see --config-path for location)
    #[arg(long)]
    config_init: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!(
                    "{}: Cannot determine config directory",
                    "error".red().bold()
                );
                std::process::exit(1);
            }
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Initialize tracing based on verbosity level (before config loading for logging)
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let registry = FormatterRegistry::with_builtin();

    if cli.list_formatters {
        for unit_type in registry.unit_types() {
            println!("{}", unit_type);
        }
        return;
    }

    // Load config file and merge with CLI args
    // Precedence: CLI args > Environment vars > Config file > Defaults
    let file_config = Config::load();

    if let Some(path) = Config::path() {
        if path.exists() {
            tracing::debug!("Loaded config from: {}", path.display());
        } else {
            tracing::trace!("No config file at: {}", path.display());
        }
    }

    let qual = match cli.qualification {
        Some(q) => {
            tracing::debug!("qualification = {} (from CLI)", q);
            q
        }
        None => {
            let q = file_config.qualification();
            tracing::debug!("qualification = {} (from env/config/default)", q);
            q
        }
    };

    let default_unit_type = match cli.unit_type {
        Some(u) => {
            tracing::debug!("unit_type = {} (from CLI)", u);
            u
        }
        None => {
            let u = file_config.unit_type();
            tracing::debug!("unit_type = {} (from env/config/default)", u);
            u
        }
    };

    let no_color = cli.no_color || file_config.no_color() || !std::io::stdout().is_terminal();
    if no_color {
        set_override(false);
    }

    let graph = match input::read_input(cli.input.as_deref())
        .and_then(|text| input::parse_graph(&text))
    {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    };

    let mut options = RenderOptions::new(qual)
        .with_default_unit_type(default_unit_type);
    if let Some(kinds) = cli.kind {
        options = options.with_kinds(kinds);
    }
    let renderings = render_graph(&registry, &graph, &options);

    if cli.json {
        match serde_json::to_string_pretty(&renderings) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    let pretty = PrettyConfig {
        color: !no_color,
        show_paths: cli.show_paths,
    };
    for r in &renderings {
        println!("{}", pretty_rendering(r, &pretty));
    }
}
