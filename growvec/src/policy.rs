//! Element policy: how a container creates and duplicates its elements.
//!
//! Destruction is `Drop`; a container drops every live element exactly once.

use crate::error::Result;

/// Construct and copy operations a [`Container`](crate::Container) needs from its element type.
///
/// Both operations are fallible so that element types owning heap storage
/// can report allocation failure instead of aborting. `try_clone` must
/// produce a value that shares no ownership with `self`.
pub trait Element: Sized {
    /// Creates one default element for a freshly exposed slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be constructed.
    fn try_default() -> Result<Self>;

    /// Deep-copies one element.
    ///
    /// # Errors
    ///
    /// Returns an error if the copy cannot be made.
    fn try_clone(&self) -> Result<Self>;
}

macro_rules! trivial_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn try_default() -> Result<Self> {
                    Ok(<$t>::default())
                }

                fn try_clone(&self) -> Result<Self> {
                    Ok(*self)
                }
            }
        )*
    };
}

trivial_element!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);
