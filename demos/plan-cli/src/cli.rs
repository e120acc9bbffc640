//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "plan-cli", version, about = "Create and inspect Bible reading plans")]
pub struct Cli {
    /// Planner configuration (TOML).  Flags below override its values.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Book catalog CSV (`book_id,name,chapters`).  Defaults to the bundled
    /// 66-book canon.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Store plans as JSON files in this directory.
    #[arg(long, global = true, conflicts_with = "sqlite")]
    pub store_dir: Option<PathBuf>,

    /// Store plans in this SQLite database instead.
    #[arg(long, global = true)]
    pub sqlite: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Distribute the chapters of the given books over a number of days.
    Create {
        #[arg(long)]
        name: String,

        /// Plan length in days.
        #[arg(long, allow_negative_numbers = true)]
        days: i64,

        /// Book names, in reading order.
        #[arg(required = true)]
        books: Vec<String>,

        /// Also export the schedule as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the stored JSON document.
        #[arg(long)]
        json: bool,
    },

    /// Print a stored plan, or one day of it.
    Show {
        id: u64,

        #[arg(long)]
        day: Option<u32>,
    },

    /// List stored plans.
    List,

    /// Delete a stored plan.
    Delete { id: u64 },

    /// List the books in the catalog.
    Books,
}
