//! Command-line interface definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use hiki2mw_config::ReportFormat;
use hiki2mw_engine::Mode;
use std::path::PathBuf;

/// Converts Hiki wiki markup to MediaWiki markup and audits page links.
#[derive(Debug, Parser)]
#[command(name = "hiki2mw", version)]
#[command(about = "Hiki to MediaWiki markup converter", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/hiki2mw/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a Hiki document to MediaWiki markup
    Convert {
        /// Hiki document to read (standard input when omitted)
        input: Option<PathBuf>,

        /// File to write (standard output when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// class attribute for emitted tables
        #[arg(long, value_name = "CLASS")]
        table_class: Option<String>,
    },

    /// Report bracketed links, parenthesised page names and WikiNames
    Analyze {
        /// Document to scan (standard input when omitted)
        input: Option<PathBuf>,

        /// File to write the report to (standard output when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Markup dialect of the document (hiki or mediawiki)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Write a config file with default settings
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}
