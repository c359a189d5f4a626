use anyhow::{ensure, Context, Result};
use infimat::{cell_default, SparseMatrix};
use structopt::StructOpt;
use tracing::debug;

cell_default!(pub MinusOne: i32 = -1);

pub type Grid = SparseMatrix<i32, MinusOne>;

#[derive(Debug, Default, StructOpt)]
pub struct OccupancyOpt {
    /// Print occupied cells as JSON objects instead of `{row}{col}{value}`
    #[structopt(long)]
    pub json: bool,
}

/// Reads an unset cell, writes another one and checks the occupied count
/// after each step.
pub fn walkthrough() -> Result<Grid> {
    let mut matrix = Grid::new();
    ensure!(matrix.occupied_count() == 0, "fresh matrix has occupied cells");

    let a = *matrix.access(0).access(0);
    ensure!(a == -1, "unset cell read as {} instead of -1", a);
    ensure!(matrix.occupied_count() == 0, "reading an unset cell occupied it");

    *matrix.access(100).access(100) = 314;
    let b = *matrix.access(100).access(100);
    ensure!(b == 314, "written cell read back as {}", b);
    ensure!(
        matrix.occupied_count() == 1,
        "expected 1 occupied cell, found {}",
        matrix.occupied_count()
    );

    debug!(stored = matrix.stored_count(), rows = matrix.stored_rows(), "walkthrough passed");
    Ok(matrix)
}

pub fn run(opt: &OccupancyOpt) -> Result<()> {
    let matrix = walkthrough()?;
    for entry in matrix.entries() {
        if opt.json {
            let line = serde_json::to_string(&entry)
                .with_context(|| format!("failed to encode cell ({}, {})", entry.row, entry.col))?;
            println!("{}", line);
        } else {
            println!("{}", entry);
        }
    }
    Ok(())
}
