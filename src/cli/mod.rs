//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the lakeapi binary.

use clap::{Parser, Subcommand, ValueEnum};

/// lakeFS Actions API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "lakeapi", about = "lakeFS Actions API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single run by ID.
    Get {
        /// The type of resource to get.
        resource: Resource,

        /// Repository name.
        repository: String,

        /// The run ID.
        id: String,
    },

    /// List runs of a repository or hooks of a run.
    List {
        /// The type of resource to list.
        resource: Resource,

        /// Repository name.
        repository: String,

        /// Run ID (required for hooks).
        #[arg(long)]
        run: Option<String>,

        /// Only runs on this branch.
        #[arg(long)]
        branch: Option<String>,

        /// Only runs for this commit.
        #[arg(long)]
        commit: Option<String>,

        /// Cursor returned by the previous page.
        #[arg(long)]
        after: Option<String>,

        /// Number of items per page (also the page size used by --all).
        #[arg(long)]
        amount: Option<u32>,

        /// Follow cursors and print every page.
        #[arg(long, conflicts_with = "after")]
        all: bool,
    },

    /// Stream the output of a hook run to stdout.
    Output {
        /// Repository name.
        repository: String,

        /// The run ID.
        run_id: String,

        /// The hook run ID.
        hook_run_id: String,
    },
}

/// Resource types that can be operated on.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    /// An action run.
    #[value(alias = "runs")]
    Run,
    /// A hook run within an action run.
    #[value(alias = "hooks")]
    Hook,
}
