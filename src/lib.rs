//! # Pullseq: Lazy Operators over Pull-Based Sequences
//!
//! Build sequences that produce items only when pulled, chain operators onto
//! them, and drive them synchronously or asynchronously.
//!
//! ## Core Traits
//!
//! - **[`Cursor`]** / **[`AsyncCursor`]**: one traversal, advanced one pull at a
//!   time. Every pull answers a [`Pull`]: an item, exhaustion, or a failure.
//! - **[`Sequence`]** / **[`AsyncSequence`]**: a recipe that opens a fresh cursor
//!   for every traversal.
//!
//! ## Key Features
//!
//! - **Lazy**: building a chain never pulls. Work happens per `advance`.
//! - **Re-traversable**: per-traversal state lives in the cursor, never in the sequence.
//! - **Scoped cleanup**: a [`Traversal`] releases its cursor on exhaustion, failure,
//!   or early drop, exactly once.
//! - **Extensible**: operators are methods on [`Seq`] / [`AsyncSeq`], plain
//!   functions for [`pipe`], or named entries in a [`Registry`].
//!
//! ## Example
//!
//! ```
//! use pullseq::prelude::*;
//!
//! let readings = from_iter(vec![3, 3, 5, 5, 5, 4, 3]);
//!
//! // Lazy: nothing has been pulled yet.
//! let changes = readings.distinct_until_changed();
//! assert_eq!(changes.to_vec().unwrap(), vec![3, 5, 4, 3]);
//!
//! // Reducing operators drain their source and return a plain result.
//! assert_eq!(changes.max(), Ok(5.0));
//! assert_eq!(changes.sequence_equal(&from_iter(vec![3, 5, 4, 3])), Ok(true));
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`from_iter(iterable)`](build::from_iter) - Items of a cloneable collection
//! - [`from_results(iterable)`](build::from_results) - Items until the first `Err`
//! - [`generate(factory)`](build::generate) - A new cursor per traversal
//! - [`from_stream(factory)`](build::from_stream) - A new `Stream` per traversal
//!
//! **Operators:**
//! - `distinct_until_changed()` - Drop contiguous duplicates
//! - `max()` / `max_by(selector)` - Largest value, or [`SeqError::Empty`]
//! - `sequence_equal(&other)` - Lock-step comparison
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, traversal lifecycle and registry changes
//! are reported as `trace`/`debug` events through the `tracing` crate.

mod container;
mod cursor;
mod error;
mod pull;
mod sequence;
mod traversal;

pub mod build;
pub mod operators;
pub mod prelude;
pub mod register;

#[cfg(test)]
mod testing;

pub use container::{AsyncSeq, Seq};
pub use cursor::{AsyncCursor, BoxAsyncCursor, BoxCursor, Cursor, DynAsyncCursor};
pub use error::{RegistryError, SeqError};
pub use pull::Pull;
pub use register::{Operator, Registry, pipe};
pub use sequence::{AsyncSequence, BoxAsyncSequence, BoxSequence, Erased, Sequence};
pub use traversal::Traversal;
