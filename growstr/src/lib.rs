#![no_std]

//! `growstr`: a growable, NUL-terminated byte string.
//!
//! [`GrowableString`] is the byte specialization of the `growvec` buffer
//! core: the same amortized growth, the same atomic inserts and the same
//! lifecycle, plus a terminator kept after the last character and a few
//! text operations.
//!
//! ```
//! # use growstr::GrowableString;
//! let text = GrowableString::try_from("hello world").unwrap();
//!
//! assert_eq!(text.find(0, b'o').unwrap(), 4);
//! assert_eq!(text.substr(0, 5).unwrap(), "hello");
//! assert_eq!(text.substr(6, 100).unwrap(), "world");
//! assert_eq!(text.as_bytes_with_nul().last(), Some(&0));
//! ```
//!
//! Searches report a missing match as an error rather than a sentinel:
//!
//! ```
//! # use growstr::{GrowableString, GrowVecError};
//! let text = GrowableString::try_from("abcab").unwrap();
//! assert_eq!(text.find_substring(0, b"ab").unwrap(), 0);
//! assert_eq!(text.find_substring(1, b"ab").unwrap(), 3);
//! assert_eq!(text.find_substring(0, b"abd"), Err(GrowVecError::NotFound));
//! ```
//!
//! Strings implement `growvec::Element`, so they can be stored in a
//! `growvec::Container` and are deep-copied on the way in and out.

mod iter;
pub mod search;
mod string;

pub use growvec::{GrowVecError, Result, State};
pub use iter::Bytes;
pub use string::{GrowableString, DEFAULT_STRING_CAPACITY};
