// SPDX-License-Identifier: MPL-2.0
//! Queue capacity newtypes.
//!
//! This module provides type-safe wrappers for queue tuning values,
//! ensuring they are always within valid ranges. Out-of-range inputs are
//! clamped rather than rejected: queue construction is total.

// =============================================================================
// Visible Limit
// =============================================================================

/// Visible-slot limit bounds (1 to 8 concurrent toasts).
pub mod visible_limit_bounds {
    /// Minimum number of visible slots.
    pub const MIN: usize = 1;
    /// Maximum number of visible slots.
    pub const MAX: usize = 8;
    /// Default number of visible slots.
    pub const DEFAULT: usize = 3;
}

/// Maximum number of items rendered concurrently by a toast queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLimit(usize);

impl VisibleLimit {
    /// Creates a new visible limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(visible_limit_bounds::MIN, visible_limit_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for VisibleLimit {
    fn default() -> Self {
        Self(visible_limit_bounds::DEFAULT)
    }
}

// =============================================================================
// Backlog Capacity
// =============================================================================

/// Backlog capacity bounds (8 to 10000 queued items).
pub mod backlog_capacity_bounds {
    /// Minimum backlog capacity.
    pub const MIN: usize = 8;
    /// Maximum backlog capacity.
    pub const MAX: usize = 10_000;
    /// Default backlog capacity (the console default; toast queues pass
    /// their own smaller value).
    pub const DEFAULT: usize = 1000;
}

/// Capacity of the unadmitted-item backlog.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (8–10000 items).
///
/// # Example
///
/// ```
/// use panelflow::domain::{backlog_capacity_bounds, BacklogCapacity};
///
/// let capacity = BacklogCapacity::new(250);
/// assert_eq!(capacity.value(), 250);
///
/// // Values outside the range are clamped
/// let too_high = BacklogCapacity::new(100_000);
/// assert_eq!(too_high.value(), backlog_capacity_bounds::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacklogCapacity(usize);

impl BacklogCapacity {
    /// Creates a new backlog capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(backlog_capacity_bounds::MIN, backlog_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= backlog_capacity_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= backlog_capacity_bounds::MAX
    }
}

impl Default for BacklogCapacity {
    fn default() -> Self {
        Self(backlog_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// History Capacity
// =============================================================================

/// Rendered-history capacity bounds (50 to 10000 entries).
pub mod history_capacity_bounds {
    /// Minimum history capacity.
    pub const MIN: usize = 50;
    /// Maximum history capacity.
    pub const MAX: usize = 10_000;
    /// Default history capacity.
    pub const DEFAULT: usize = 500;
}

/// Maximum number of rendered log entries retained before oldest-first
/// trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new history capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_capacity_bounds::MIN, history_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Batch Size
// =============================================================================

/// Batch size bounds (1 to 500 entries per drain cycle).
pub mod batch_size_bounds {
    /// Minimum batch size.
    pub const MIN: usize = 1;
    /// Maximum batch size.
    pub const MAX: usize = 500;
    /// Default batch size.
    pub const DEFAULT: usize = 50;
}

/// Number of entries a batching-mode drain cycle renders as one surface
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize(usize);

impl BatchSize {
    /// Creates a new batch size, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(batch_size_bounds::MIN, batch_size_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(batch_size_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
