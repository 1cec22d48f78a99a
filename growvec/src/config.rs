use tracing::warn;

use crate::error::{GrowVecError, Result};

pub const DEFAULT_GROWTH_NUMERATOR: usize = 3;
pub const DEFAULT_GROWTH_DENOMINATOR: usize = 2;
pub const DEFAULT_SLACK: usize = 3;
pub const DEFAULT_INITIAL_CAPACITY: usize = 3;

/// Growth parameters shared by every buffer built on [`RawBuffer`](crate::RawBuffer).
///
/// Appends that run out of room grow to
/// `required * numerator / denominator + slack` slots. Explicit requests
/// (`reserve`, `resize`) grow to exactly the requested size.
///
/// `max_capacity` is a hard ceiling: any block larger than it is refused
/// with [`GrowVecError::AllocationFailure`], exactly as if the allocator
/// had failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    numerator: usize,
    denominator: usize,
    slack: usize,
    initial_capacity: usize,
    max_capacity: Option<usize>,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthPolicy {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            numerator: DEFAULT_GROWTH_NUMERATOR,
            denominator: DEFAULT_GROWTH_DENOMINATOR,
            slack: DEFAULT_SLACK,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: None,
        }
    }

    #[must_use]
    pub fn with_factor(mut self, numerator: usize, denominator: usize) -> Self {
        self.numerator = numerator;
        self.denominator = denominator;
        self
    }

    #[must_use]
    pub fn with_slack(mut self, slack: usize) -> Self {
        self.slack = slack;
        self
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    #[must_use]
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    #[must_use]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[must_use]
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    #[must_use]
    pub fn slack(&self) -> usize {
        self.slack
    }

    /// Checks that the parameters describe a usable growth strategy.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::InvalidParameter` if:
    /// - the denominator is zero
    /// - the growth factor is below 1
    /// - the initial capacity is above the ceiling
    pub fn validate(&self) -> Result<()> {
        if self.denominator == 0 {
            return Err(GrowVecError::InvalidParameter {
                reason: "growth denominator must be non-zero",
            });
        }
        if self.numerator < self.denominator {
            return Err(GrowVecError::InvalidParameter {
                reason: "growth factor must be at least 1",
            });
        }
        if let Some(max) = self.max_capacity {
            if self.initial_capacity > max {
                return Err(GrowVecError::InvalidParameter {
                    reason: "initial capacity exceeds max capacity",
                });
            }
        }
        Ok(())
    }

    /// Capacity to grow to when appends need `required` slots.
    ///
    /// The amortized target is clamped to the ceiling as long as `required`
    /// itself still fits, so a bounded buffer can be filled up to its limit.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if the target overflows.
    pub fn append_target(&self, required: usize) -> Result<usize> {
        let scaled = required
            .checked_mul(self.numerator)
            .map(|v| v / self.denominator)
            .and_then(|v| v.checked_add(self.slack))
            .ok_or(GrowVecError::AllocationFailure {
                requested: required,
            })?;
        let target = scaled.max(required);
        Ok(match self.max_capacity {
            Some(max) if target > max && required <= max => max,
            _ => target,
        })
    }

    /// Refuses blocks above the ceiling.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailure` if `capacity` exceeds `max_capacity`.
    pub fn admit(&self, capacity: usize) -> Result<()> {
        match self.max_capacity {
            Some(max) if capacity > max => {
                warn!(capacity, max, "block refused by growth ceiling");
                Err(GrowVecError::AllocationFailure {
                    requested: capacity,
                })
            }
            _ => Ok(()),
        }
    }
}
