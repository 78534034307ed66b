//! Reusable observers for Pivot.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the root finders and sweeps in `pivot-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIterate`], [`HasIteration`], [`CanStopEarly`])
//! - [`TraceObserver`]: emits a `tracing` event per solver event
//! - [`Recorder`]: keeps the iterate history and optionally caps its length
//!
//! [`Observer`]: pivot_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIterate`]: traits::HasIterate
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod record;
mod trace;

pub use record::{Record, Recorder};
pub use trace::TraceObserver;
