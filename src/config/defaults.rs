// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for queue tuning constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: visible-slot limit, auto-dismiss TTL, backlog capacity
//! - **Console**: backlog capacity, batch size, rendered-history capacity
//! - **Rate**: burst detection threshold and trigger count
//! - **Drain**: cooperative yield delays between render batches
//! - **Service**: command channel sizing for the async console service

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Maximum number of toasts visible at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;

/// Auto-dismiss TTL for a toast, in milliseconds.
pub const DEFAULT_TOAST_TTL_MS: u64 = 2200;

/// Capacity of the pending-toast backlog. Pushing beyond it evicts the
/// oldest unadmitted toast.
pub const DEFAULT_TOAST_BACKLOG: usize = 64;

// ==========================================================================
// Console Defaults
// ==========================================================================

/// Capacity of the unrendered log backlog. Appending beyond it evicts the
/// oldest unrendered entry.
pub const DEFAULT_LOG_BACKLOG: usize = 1000;

/// Number of entries rendered per drain cycle while in batching mode.
pub const DEFAULT_LOG_BATCH_SIZE: usize = 50;

/// Maximum number of rendered entries retained; older entries are trimmed
/// oldest-first after every batch append.
pub const DEFAULT_LOG_HISTORY: usize = 500;

// ==========================================================================
// Rate Classification Defaults
// ==========================================================================

/// Two enqueues closer together than this count as a rapid pair.
pub const RAPID_EVENT_THRESHOLD_MS: u64 = 100;

/// Number of consecutive rapid enqueues beyond which batching mode engages.
pub const RAPID_EVENT_TRIGGER: u32 = 5;

// ==========================================================================
// Drain Yield Defaults
// ==========================================================================

/// Cooperative yield between animated single-entry render cycles, in
/// milliseconds.
pub const ANIMATED_YIELD_MS: u64 = 1;

/// Cooperative yield after a full batch in batching mode, and the delay
/// before a freshly started drain runs its first cycle, in milliseconds.
pub const BURST_YIELD_MS: u64 = 0;

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Capacity of the console service command channel. `try_send` producers
/// drop once it fills rather than block.
pub const COMMAND_CHANNEL_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Toast validation
    assert!(DEFAULT_MAX_VISIBLE_TOASTS > 0);
    assert!(DEFAULT_TOAST_TTL_MS > 0);
    assert!(DEFAULT_TOAST_BACKLOG >= DEFAULT_MAX_VISIBLE_TOASTS);

    // Console validation
    assert!(DEFAULT_LOG_BATCH_SIZE > 0);
    assert!(DEFAULT_LOG_BACKLOG >= DEFAULT_LOG_BATCH_SIZE);
    assert!(DEFAULT_LOG_HISTORY >= DEFAULT_LOG_BATCH_SIZE);

    // Rate validation
    assert!(RAPID_EVENT_THRESHOLD_MS > 0);
    assert!(RAPID_EVENT_TRIGGER > 0);

    // A burst yield longer than the animated yield would invert the modes.
    assert!(BURST_YIELD_MS <= ANIMATED_YIELD_MS);

    // Service validation
    assert!(COMMAND_CHANNEL_CAPACITY > 0);
};
