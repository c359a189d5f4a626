use anyhow::{ensure, Context, Result};
use infimat::SparseMatrix;
use structopt::StructOpt;
use tracing::info;

pub type Grid = SparseMatrix<i32>;

#[derive(Debug, StructOpt)]
pub struct DiagonalOpt {
    /// Last row and column index written by the fill
    #[structopt(long, default_value = "9")]
    pub size: usize,
    /// First row and column of the printed block
    #[structopt(long, default_value = "1")]
    pub from: usize,
    /// Last row and column of the printed block
    #[structopt(long, default_value = "8")]
    pub to: usize,
}

impl DiagonalOpt {
    /// Options as parsed from a bare `diagonal` subcommand.
    pub fn defaults() -> Self {
        Self::from_iter(["diagonal"])
    }
}

/// Writes `i` to `(i, i)` and `size - i` to `(i, size - i)` for every `i` in `0..=size`.
pub fn fill(size: usize) -> Result<Grid> {
    i32::try_from(size).with_context(|| format!("size {} does not fit the cell type", size))?;

    let mut matrix = Grid::new();
    for i in 0..=size {
        let mirrored = size - i;
        *matrix.cell(i, i) = i as i32;
        *matrix.cell(i, mirrored) = mirrored as i32;
    }
    Ok(matrix)
}

// Rows and columns `from..=to`, one line per row. Reading goes through the
// same accessor as writing, so every printed cell ends up stored.
pub fn render_block(matrix: &mut Grid, from: usize, to: usize) -> Result<String> {
    ensure!(from <= to, "block start {} is past its end {}", from, to);

    let lines: Vec<String> = (from..=to)
        .map(|row| {
            (from..=to)
                .map(|col| matrix.cell(row, col).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn run(opt: &DiagonalOpt) -> Result<()> {
    let mut matrix = fill(opt.size)?;
    info!(occupied = matrix.occupied_count(), rows = matrix.stored_rows(), "filled diagonals");

    println!("{}", render_block(&mut matrix, opt.from, opt.to)?);

    info!(
        occupied = matrix.occupied_count(),
        stored = matrix.stored_count(),
        "printed block"
    );
    Ok(())
}
