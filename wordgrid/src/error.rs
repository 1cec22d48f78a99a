use growvec::GrowVecError;
use thiserror::Error;
use tokstream::StreamError;

#[derive(Error, Debug)]
pub enum WordGridError {
    #[error(transparent)]
    Core(#[from] GrowVecError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("Grid of {rows} rows by {columns} columns is too large")]
    GridTooLarge { rows: usize, columns: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordGridError>;
