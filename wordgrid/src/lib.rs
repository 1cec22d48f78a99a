//! `wordgrid`: lay the words of a sentence out as columns and read them
//! back row by row.
//!
//! ```
//! # use growstr::GrowableString;
//! let text = GrowableString::try_from("have a nice day").unwrap();
//! let grid = wordgrid::transform(&text).unwrap();
//!
//! assert_eq!(grid.columns(), 4);
//! assert_eq!(grid.rows(), 4);
//! assert_eq!(wordgrid::encode(&grid).unwrap(), "hand aia vcy ee ");
//! ```

pub mod error;
pub mod grid;
pub mod logging;

pub use error::{Result, WordGridError};
pub use grid::{encode, max_word_length, render, split_words, transform, word_count, Grid};
