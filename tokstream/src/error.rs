use growvec::GrowVecError;
use thiserror::Error;

use crate::stream::SeekOrigin;

pub type Result<T> = core::result::Result<T, StreamError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error(transparent)]
    Core(#[from] GrowVecError),

    #[error("Invalid seek: offset {offset} from {origin:?} is outside a stream of length {length}")]
    InvalidSeek {
        offset: isize,
        origin: SeekOrigin,
        length: usize,
    },

    #[error("Read from source failed: {0:?}")]
    Source(embedded_io::ErrorKind),
}

impl embedded_io::Error for StreamError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            StreamError::InvalidSeek { .. }
            | StreamError::Core(GrowVecError::InvalidParameter { .. } | GrowVecError::OutOfRange { .. }) => {
                embedded_io::ErrorKind::InvalidInput
            }
            StreamError::Source(kind) => *kind,
            StreamError::Core(_) => embedded_io::ErrorKind::Other,
        }
    }
}
