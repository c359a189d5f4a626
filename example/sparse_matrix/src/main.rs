mod diagonal;
mod occupancy;

use anyhow::Result;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use diagonal::DiagonalOpt;
use occupancy::OccupancyOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "infimat-sparse-matrix", about = "Walks through the sparse matrix API")]
struct Opt {
    #[structopt(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Read and write a matrix defaulting to -1, then list its occupied cells
    Occupancy(OccupancyOpt),
    /// Fill the diagonal and anti-diagonal of a matrix, then print a square block of it
    Diagonal(DiagonalOpt),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Opt::from_args().cmd {
        Some(Command::Occupancy(opt)) => occupancy::run(&opt),
        Some(Command::Diagonal(opt)) => diagonal::run(&opt),
        None => {
            occupancy::run(&OccupancyOpt::default())?;
            diagonal::run(&DiagonalOpt::defaults())
        }
    }
}
