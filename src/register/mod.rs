//! Attaching operators to containers.
//!
//! Built-in operators are methods, added to [`Seq`](crate::Seq) and
//! [`AsyncSeq`](crate::AsyncSeq) by each operator's module. Anything else plugs
//! in through [`Operator`] and [`pipe`], or by name through a [`Registry`].

mod pipe;
pub mod registry;

pub use pipe::{MonoTypeOperator, Operator, OperatorFn, pipe};
pub use registry::{AsyncSeqRegistry, RegisteredOperator, Registry, SeqRegistry};
