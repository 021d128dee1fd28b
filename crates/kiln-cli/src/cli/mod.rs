//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use kiln_core::domain::MarkupPolicy;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Spring Boot project skeletons as a zip",
    long_about = "Kiln turns a project description into a ready-to-build \
                  Maven/Spring Boot skeleton, packaged as a single zip archive.",
    after_help = "EXAMPLES:\n\
        \x20 kiln new -g com.example -a demo -d web -d data-jpa\n\
        \x20 kiln new --request project.json --output build/\n\
        \x20 kiln list --format json\n\
        \x20 kiln completions bash > /usr/share/bash-completion/completions/kiln",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project archive.
    #[command(
        visible_alias = "n",
        about = "Generate a new project archive",
        after_help = "EXAMPLES:\n\
            \x20 kiln new -g com.example -a demo\n\
            \x20 kiln new -g com.example -a demo -d web,actuator --java 21\n\
            \x20 kiln new --request project.json --artifact renamed --force\n\
            \x20 kiln new -g com.example -a demo --dry-run"
    )]
    New(NewArgs),

    /// List the dependency catalog.
    #[command(
        visible_alias = "ls",
        about = "List known dependency ids",
        after_help = "EXAMPLES:\n\
            \x20 kiln list\n\
            \x20 kiln list --search data\n\
            \x20 kiln list --format csv"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kiln completions bash > ~/.local/share/bash-completion/completions/kiln\n\
            \x20 kiln completions zsh  > ~/.zfunc/_kiln\n\
            \x20 kiln completions fish > ~/.config/fish/completions/kiln.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Kiln configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kiln config get defaults.java_version\n\
            \x20 kiln config list\n\
            \x20 kiln config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `kiln new`.
///
/// Coordinates are required unless `--request` supplies them; flags given
/// alongside `--request` override the file.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Group id, e.g. `com.example`. One package directory per segment.
    #[arg(
        short = 'g',
        long = "group",
        value_name = "GROUP_ID",
        required_unless_present = "request",
        help = "Maven group id"
    )]
    pub group: Option<String>,

    /// Artifact id; also the archive root and file name.
    #[arg(
        short = 'a',
        long = "artifact",
        value_name = "ARTIFACT_ID",
        required_unless_present = "request",
        help = "Maven artifact id"
    )]
    pub artifact: Option<String>,

    #[arg(
        id = "project_version",
        long = "version",
        value_name = "VERSION",
        help = "Project version (default from config)"
    )]
    pub version: Option<String>,

    #[arg(short = 'n', long = "name", help = "Display name (default: artifact id)")]
    pub name: Option<String>,

    #[arg(long = "description", help = "One-line project description")]
    pub description: Option<String>,

    #[arg(long = "java", value_name = "VERSION", help = "Java release")]
    pub java: Option<String>,

    #[arg(long = "boot", value_name = "VERSION", help = "Spring Boot version")]
    pub boot: Option<String>,

    /// Dependency ids from `kiln list`. Repeat the flag or separate with commas.
    #[arg(
        short = 'd',
        long = "dependency",
        value_name = "ID",
        value_delimiter = ',',
        help = "Dependency id (repeatable)"
    )]
    pub dependencies: Vec<String>,

    /// JSON file holding a complete request, including the cross-cutting
    /// library and environment sections.
    #[arg(long = "request", value_name = "FILE", help = "Load the request from a JSON file")]
    pub request: Option<PathBuf>,

    /// Where to write the archive. An existing directory receives
    /// `<artifact>.zip`; anything else is used as the file path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output file or directory (default: ./<artifact>.zip)"
    )]
    pub output: Option<PathBuf>,

    /// How user text is inserted into `pom.xml`.
    #[arg(long = "markup", value_enum, help = "XML insertion policy")]
    pub markup: Option<MarkupArg>,

    /// Overwrite an existing archive.
    #[arg(long = "force", help = "Overwrite an existing output file")]
    pub force: bool,

    /// Preview the tree without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated")]
    pub dry_run: bool,
}

/// CLI mirror of [`MarkupPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkupArg {
    /// Escape XML special characters.
    Escape,
    /// Insert values verbatim.
    Literal,
}

impl From<MarkupArg> for MarkupPolicy {
    fn from(arg: MarkupArg) -> Self {
        match arg {
            MarkupArg::Escape => MarkupPolicy::Escape,
            MarkupArg::Literal => MarkupPolicy::Literal,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only entries whose id or description contains this text.
    #[arg(short = 's', long = "search", value_name = "TEXT", help = "Filter entries")]
    pub search: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kiln completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kiln config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.java_version`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["kiln", "new", "-g", "com.example", "-a", "demo"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.group.as_deref(), Some("com.example"));
                assert_eq!(args.artifact.as_deref(), Some("demo"));
                assert!(args.dependencies.is_empty());
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn dependencies_accept_commas_and_repeats() {
        let cli = Cli::parse_from([
            "kiln", "new", "-g", "g", "-a", "a", "-d", "web,actuator", "-d", "lombok",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.dependencies, ["web", "actuator", "lombok"]);
    }

    #[test]
    fn subcommand_version_is_the_project_version() {
        let cli = Cli::parse_from(["kiln", "new", "-g", "g", "-a", "a", "--version", "2.0.0"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.version.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn coordinates_required_without_request() {
        assert!(Cli::try_parse_from(["kiln", "new", "-g", "com.example"]).is_err());
        assert!(Cli::try_parse_from(["kiln", "new", "--request", "p.json"]).is_ok());
    }

    #[test]
    fn markup_arg_maps_to_policy() {
        assert_eq!(MarkupPolicy::from(MarkupArg::Literal), MarkupPolicy::Literal);
        assert_eq!(MarkupPolicy::from(MarkupArg::Escape), MarkupPolicy::Escape);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["kiln", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
