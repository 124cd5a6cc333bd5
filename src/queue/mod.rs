// SPDX-License-Identifier: MPL-2.0
//! Shared queueing primitives.
//!
//! The toast and console pipelines are the same machine wearing different
//! clothes: a bounded [`Backlog`] in front, a presentation stage behind it,
//! and a [`RateClassifier`] deciding how eagerly to move items across.
//! This module holds those shared parts; the pipelines themselves live in
//! [`crate::toast`] and [`crate::console`].

mod active;
mod backlog;
mod rate;

pub use active::ActiveSet;
pub use backlog::Backlog;
pub use rate::RateClassifier;
