#![allow(dead_code)]

use std::cell::Cell;

use growvec::{Element, GrowVecError, Result};

thread_local! {
    static COPIES_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

/// Element whose copies can be made to fail after a budget runs out,
/// and which counts how many instances are alive.
#[derive(Debug, PartialEq, Eq)]
pub struct Flaky(pub u32);

impl Flaky {
    pub fn new(value: u32) -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        Flaky(value)
    }
}

impl Drop for Flaky {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}

fn take_copy_budget() -> bool {
    COPIES_LEFT.with(|left| match left.get() {
        None => true,
        Some(0) => false,
        Some(n) => {
            left.set(Some(n - 1));
            true
        }
    })
}

impl Element for Flaky {
    fn try_default() -> Result<Self> {
        if take_copy_budget() {
            Ok(Flaky::new(0))
        } else {
            Err(GrowVecError::AllocationFailure { requested: 1 })
        }
    }

    fn try_clone(&self) -> Result<Self> {
        if take_copy_budget() {
            Ok(Flaky::new(self.0))
        } else {
            Err(GrowVecError::AllocationFailure { requested: 1 })
        }
    }
}

/// Lets the next `n` copies succeed; every copy after that fails.
pub fn fail_after(n: usize) {
    COPIES_LEFT.with(|left| left.set(Some(n)));
}

pub fn never_fail() {
    COPIES_LEFT.with(|left| left.set(None));
}

pub fn live_count() -> isize {
    LIVE.with(Cell::get)
}
