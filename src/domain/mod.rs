// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure queue tuning value objects.
//!
//! This module contains the clamped capacity newtypes shared by both queue
//! instances ([`VisibleLimit`], [`BacklogCapacity`], [`HistoryCapacity`],
//! [`BatchSize`]). It has no dependencies on external crates (except `std`)
//! to ensure testability.

mod limits;

pub use limits::{
    backlog_capacity_bounds, batch_size_bounds, history_capacity_bounds, visible_limit_bounds,
    BacklogCapacity, BatchSize, HistoryCapacity, VisibleLimit,
};
