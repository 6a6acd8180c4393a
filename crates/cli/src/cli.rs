use clap::{Parser, Subcommand, ValueEnum};
use essay_graph::{StatementFormat, TraversalDirection};
use std::path::PathBuf;

/// Decompose an essay's argument graph into explanation chunks
#[derive(Parser, Debug)]
#[command(name = "essay-graph")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Statement rendering (overrides the configuration file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Log debug output to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one chunk per important node, in essay order
    Chunks {
        /// Serialized argument graph
        document: PathBuf,

        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the linearized subgraph around one node
    Subgraph {
        /// Serialized argument graph
        document: PathBuf,

        /// Start node id
        #[arg(short, long)]
        node: String,

        #[arg(short, long, value_enum)]
        direction: DirectionArg,
    },

    /// Print graph statistics
    Stats {
        /// Serialized argument graph
        document: PathBuf,
    },

    /// Load a document and report whether it is valid
    Validate {
        /// Serialized argument graph
        document: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Plain,
    Delimited,
}

impl From<FormatArg> for StatementFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Plain => Self::Plain,
            FormatArg::Delimited => Self::Delimited,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionArg {
    Upstream,
    Downstream,
}

impl From<DirectionArg> for TraversalDirection {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Upstream => Self::Upstream,
            DirectionArg::Downstream => Self::Downstream,
        }
    }
}
