//! Building sequences from raw sources.
//!
//! This module turns collections, closures, cursor factories and streams into
//! sequences wrapped in a [`Seq`](crate::Seq) or [`AsyncSeq`](crate::AsyncSeq),
//! ready for operator chaining.

mod func;
mod iter;
mod lift;

pub use func::{FromFn, Generate, from_fn, generate, generate_async};
pub use iter::{Empty, FromIter, FromResults, IterCursor, ResultsCursor, empty, from_iter, from_results};
pub use lift::{FromStream, Lift, StreamCursor, from_stream};
