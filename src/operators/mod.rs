//! Operators over sequences.
//!
//! Every operator comes in two shapes:
//!
//! - a method on [`Seq`](crate::Seq) and [`AsyncSeq`](crate::AsyncSeq), added by
//!   the operator's own module, for fluent chains;
//! - a free function in this module, for use with
//!   [`pipe`](crate::register::pipe) or a [`Registry`](crate::register::Registry).
//!
//! [`distinct_until_changed`](distinct::distinct_until_changed) is lazy and
//! returns a new sequence. [`max`] and [`sequence_equal`] are reducing operators:
//! they drain their sources during the call and return a plain result.

pub mod compare;
pub mod distinct;
pub mod max;
pub mod sequence_equal;

pub use compare::{Comparer, DefaultComparer, Identity, KeySelector};
pub use distinct::{
    DistinctCursor, DistinctOptions, DistinctUntilChanged, DistinctUntilChangedOp,
    distinct_until_changed,
};
pub use max::{max_by, max_by_async, try_max_by, try_max_by_async};
pub use sequence_equal::{SequenceEqualOptions, sequence_equal_by, sequence_equal_by_async};
