use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::csv;
use crate::matrix::Matrix;
use crate::searches;
use crate::sorts::merge_sort;
use crate::tree::BinaryTree;
use crate::tree_display::TreeRender;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { file }) => tree(file),
        Some(Commands::Sort { file }) => sort(file),
        Some(Commands::Search { file, value }) => search(file, *value),
        Some(Commands::Matrix { file }) => matrix(file),
        // completions are handled in main before dispatch
        Some(Commands::Completion { .. }) | None => Ok(()),
    }
}

/// Flattens every field of every row into one integer sequence.
fn load_integers(file: &Path) -> CliResult<Vec<i64>> {
    let rows = csv::read_rows(file)?;
    let mut values = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, field) in line.split(',').enumerate() {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let value = field.parse::<i64>().map_err(|_| CliError::ParseInt {
                value: field.to_string(),
                row,
                col,
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

#[instrument]
fn tree(file: &Path) -> CliResult<()> {
    let values = load_integers(file)?;
    debug!("loaded {} values", values.len());
    let tree: BinaryTree<i64> = values.into_iter().collect();

    println!("{}", tree.to_tree_string());
    println!("in-order:   {:?}", tree.in_order());
    println!("pre-order:  {:?}", tree.pre_order());
    println!("post-order: {:?}", tree.post_order());
    println!(
        "{} elements over {} nodes, depth {}",
        tree.len(),
        tree.node_count(),
        tree.depth()
    );
    Ok(())
}

#[instrument]
fn sort(file: &Path) -> CliResult<()> {
    let mut values = load_integers(file)?;
    merge_sort(&mut values);
    println!("{values:?}");
    Ok(())
}

#[instrument]
fn search(file: &Path, value: i64) -> CliResult<()> {
    let values = load_integers(file)?;
    match searches::binary::first_index(&values, &value) {
        Some(index) => println!(
            "found {} at sorted index {} ({} occurrence(s))",
            value,
            index,
            searches::binary::occurrences(&values, &value)
        ),
        None => println!("{value} not found"),
    }
    Ok(())
}

#[instrument]
fn matrix(file: &Path) -> CliResult<()> {
    let rows = csv::read_numeric(file)?;
    let matrix = Matrix::from_rows(rows)?;
    println!("{matrix}");
    println!(
        "{}x{}, sum {}, {}",
        matrix.rows(),
        matrix.cols(),
        matrix.sum(),
        if matrix.is_vector() {
            "vector"
        } else {
            "rectangular"
        }
    );
    Ok(())
}
