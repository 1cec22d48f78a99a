#![no_std]

//! `tokstream`: a token stream over a growable byte string.
//!
//! A [`TokenStream`] keeps a [`GrowableString`](growstr::GrowableString)
//! buffer with a read cursor and a write cursor. Writers append (or
//! overwrite, after seeking back); readers pull single bytes or
//! whitespace-delimited tokens.
//!
//! ```
//! # use tokstream::TokenStream;
//! let mut stream = TokenStream::new().unwrap();
//! stream.write_bytes(b"  the quick\tfox ").unwrap();
//!
//! let mut words = Vec::new();
//! while let Some(word) = stream.next_word().unwrap() {
//!     words.push(word.to_string());
//! }
//! assert_eq!(words, ["the", "quick", "fox"]);
//! assert!(stream.at_end());
//! ```
//!
//! The stream also speaks `embedded_io`, so it can be filled from any
//! reader and read through the generic traits:
//!
//! ```
//! # use tokstream::TokenStream;
//! use embedded_io::Read;
//!
//! let mut source: &[u8] = b"abc";
//! let mut stream = TokenStream::new().unwrap();
//! stream.fill_from(&mut source).unwrap();
//!
//! let mut buf = [0u8; 2];
//! assert_eq!(stream.read(&mut buf).unwrap(), 2);
//! assert_eq!(&buf, b"ab");
//! ```

mod error;
mod io;
mod stream;

pub use error::{Result, StreamError};
pub use io::FILL_CHUNK_SIZE;
pub use stream::{SeekOrigin, TokenStream, DEFAULT_STREAM_CAPACITY};
