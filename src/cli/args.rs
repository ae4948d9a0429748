//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Inspect CSV data with the dsakit structures: search trees, merge sort,
/// binary search, and matrices
#[derive(Parser, Debug)]
#[command(name = "dsakit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a search tree from an integer CSV and show it with its traversals
    Tree {
        /// CSV file with integer fields
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print the values of an integer CSV merge-sorted
    Sort {
        /// CSV file with integer fields
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Binary-search an integer CSV for a value
    Search {
        /// CSV file with integer fields
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Value to look for
        value: i64,
    },

    /// Load a numeric CSV as a matrix and show its shape and sum
    Matrix {
        /// CSV file with numeric fields
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
