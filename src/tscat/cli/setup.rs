use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tscat::compose::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "tscat", bin_name = "tscat", version)]
#[command(about = "Translation string catalog with en.json and messages.js export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Export format as spelled on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// en.json resource file
    Json,
    /// messages.js react-intl module
    Messages,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::ResourceJson,
            FormatArg::Messages => ExportFormat::MessageModule,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List scopes
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a scope
    #[command(display_order = 2)]
    Add {
        /// Scope name
        name: String,
    },

    /// Delete a scope with all of its entries
    #[command(alias = "rm", display_order = 3)]
    Delete {
        /// Scope name
        name: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Set the full scope string used as id prefix
    #[command(display_order = 4)]
    Scope {
        /// Scope name
        name: String,

        /// Full scope string (e.g. app.containers.Auth)
        full_scope_string: String,
    },

    /// Show the entries of a scope
    #[command(alias = "v", display_order = 5)]
    View {
        /// Scope name
        name: String,
    },

    /// Add a translation string to a scope
    #[command(display_order = 10)]
    Entry {
        /// Scope name
        name: String,

        /// Id, appended to the full scope string
        id: String,

        /// Default value (words joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        value: Vec<String>,
    },

    /// Remove a translation string from a scope
    #[command(display_order = 11)]
    Remove {
        /// Scope name
        name: String,

        /// Full id of the entry
        id: String,
    },

    /// Print a scope in an export format
    #[command(display_order = 20)]
    Show {
        /// Scope name
        name: String,

        #[arg(short, long, value_enum, default_value = "json")]
        format: FormatArg,
    },

    /// Copy a scope in an export format to the clipboard
    #[command(alias = "cp", display_order = 21)]
    Copy {
        /// Scope name
        name: String,

        #[arg(short, long, value_enum, default_value = "json")]
        format: FormatArg,
    },

    /// Write a scope to en.json or messages.js
    #[command(display_order = 22)]
    Download {
        /// Scope name
        name: String,

        #[arg(short, long, value_enum, default_value = "json")]
        format: FormatArg,

        /// Target directory (defaults to export-dir, then the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Write the whole catalog to a JSON file
    #[command(display_order = 30)]
    Backup {
        /// File or directory (defaults to a timestamped file in the current directory)
        path: Option<PathBuf>,
    },

    /// Replace the catalog with a backup file
    #[command(display_order = 31)]
    Restore {
        /// Backup file
        path: PathBuf,
    },

    /// Get or set configuration
    #[command(display_order = 40)]
    Config {
        /// Configuration key (slot-key, escape-output, export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
