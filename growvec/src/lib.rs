#![no_std]

//! `growvec`: a growable vector with element policies, amortized growth and
//! generation-checked cursors.
//!
//! A [`Container`] owns one [`RawBuffer`] (the buffer core: capacity, length
//! and an exclusively owned block) and copies elements in and out through
//! their [`Element`] policy. Every fallible operation returns a
//! [`Result`] carrying a [`GrowVecError`]; nothing panics on bad input.
//!
//! This crate is `no_std` and only needs `alloc`.
//!
//! # Growth
//!
//! Appends that run out of room grow to `required * 3 / 2 + 3` slots by
//! default; `reserve` and `resize` grow to exactly what was asked for. The
//! parameters live in [`GrowthPolicy`], which can also impose a hard
//! capacity ceiling:
//!
//! ```
//! # use growvec::{Container, GrowthPolicy, GrowVecError};
//! let policy = GrowthPolicy::new().with_max_capacity(4);
//! let mut container: Container<u32> = Container::with_policy(policy).unwrap();
//!
//! for v in 0..4 {
//!     container.push_back(&v).unwrap();
//! }
//! assert!(matches!(
//!     container.push_back(&4),
//!     Err(GrowVecError::AllocationFailure { .. })
//! ));
//! assert_eq!(container.len(), 4);
//! ```
//!
//! # Element policy
//!
//! Primitive scalars use a trivial policy. Element types that own storage
//! implement [`Element`] with fallible construction and deep copy;
//! containers themselves are elements, so they nest:
//!
//! ```
//! # use growvec::Container;
//! let mut row: Container<u8> = Container::new().unwrap();
//! row.push_back(&1).unwrap();
//!
//! let mut grid: Container<Container<u8>> = Container::new().unwrap();
//! grid.push_back(&row).unwrap();
//! row.push_back(&2).unwrap();
//!
//! // The grid holds an independent copy
//! assert_eq!(grid.get(0).unwrap().len(), 1);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] is an index into a container, checked against the live
//! container on every use. Operations that relocate or resize the storage
//! invalidate earlier cursors:
//!
//! ```
//! # use growvec::{Container, GrowVecError};
//! let mut container: Container<u8> = Container::new().unwrap();
//! container.push_back(&1).unwrap();
//!
//! let cursor = container.begin().unwrap();
//! assert_eq!(*cursor.get(&container).unwrap(), 1);
//!
//! container.reserve(100).unwrap();
//! assert_eq!(cursor.get(&container), Err(GrowVecError::StaleIterator));
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use growvec::Container;
//! let mut container: Container<char> = Container::new().unwrap();
//! container.push_back(&'a').unwrap();
//! container.push_back(&'b').unwrap();
//!
//! let forward: Vec<_> = container.iter().copied().collect();
//! let backward: Vec<_> = container.iter_rev().copied().collect();
//! assert_eq!(forward, ['a', 'b']);
//! assert_eq!(backward, ['b', 'a']);
//! ```

extern crate alloc;

mod config;
mod core;
mod cursor;
mod error;
mod iter;
mod policy;
mod raw;

pub use crate::core::{Container, State};
pub use config::{
    GrowthPolicy, DEFAULT_GROWTH_DENOMINATOR, DEFAULT_GROWTH_NUMERATOR, DEFAULT_INITIAL_CAPACITY,
    DEFAULT_SLACK,
};
pub use cursor::Cursor;
pub use error::{GrowVecError, Result};
pub use iter::{ContainerIter, ContainerRevIter};
pub use policy::Element;
pub use raw::RawBuffer;
