//! The base containers operators attach to.
//!
//! [`Seq`] wraps a synchronous [`Sequence`], [`AsyncSeq`] an asynchronous one.
//! A container holds nothing but its source: it is immutable once built, and
//! every traversal gets its own cursor from [`Seq::traverse`] /
//! [`AsyncSeq::traverse`]. Building a container never pulls from the source.
//!
//! Operator methods are not defined here. Each operator module adds its own
//! `impl` block to the containers, so the containers never need to know which
//! operators exist.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let runs = from_iter(vec![1, 1, 2, 2, 3, 1]).distinct_until_changed();
//!
//! // Each traversal starts from scratch.
//! assert_eq!(runs.to_vec().unwrap(), vec![1, 2, 3, 1]);
//! assert_eq!(runs.to_vec().unwrap(), vec![1, 2, 3, 1]);
//! ```

use crate::build::Lift;
use crate::cursor::AsyncCursor;
use crate::pull::Pull;
use crate::register::Operator;
use crate::sequence::{AsyncSequence, BoxAsyncSequence, BoxSequence, Erased, Sequence};
use crate::traversal::Traversal;

/// Fluent wrapper around a synchronous sequence.
///
/// A container always wraps a source given to it. There is no default
/// container, and containers are not compared with each other:
///
/// ```compile_fail
/// use pullseq::Seq;
///
/// let _ = Seq::<()>::default();
/// ```
///
/// ```compile_fail
/// use pullseq::Seq;
///
/// let _ = Seq::new(1) == Seq::new(1);
/// ```
#[derive(Debug, Clone)]
pub struct Seq<S> {
    source: S,
}

impl<S> Seq<S> {
    /// Wrap a source. Nothing is pulled until a traversal starts.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Borrow the wrapped source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Apply an operator to this container.
    ///
    /// See [`Operator`] for how standalone operators plug in.
    pub fn pipe<O>(self, operator: O) -> O::Output
    where
        O: Operator<Self>,
    {
        operator.apply(self)
    }
}

impl<S: Sequence> Seq<S> {
    /// Start a new traversal.
    pub fn traverse(&self) -> Traversal<S::Cursor> {
        Traversal::new(self.source.open())
    }

    /// Drain a fresh traversal into a vector, stopping at the first failure.
    pub fn to_vec(&self) -> Result<Vec<S::Item>, S::Error> {
        self.traverse().collect()
    }

    /// Lift into an asynchronous container whose pulls resolve immediately.
    pub fn into_async(self) -> AsyncSeq<Lift<S>> {
        AsyncSeq::new(Lift::new(self.source))
    }

    /// Erase the source type.
    pub fn boxed(self) -> Seq<BoxSequence<S::Item, S::Error>>
    where
        S: 'static,
        S::Cursor: 'static,
    {
        Seq::new(Box::new(Erased::new(self.source)))
    }
}

impl<S: Sequence> Sequence for Seq<S> {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = S::Cursor;

    fn open(&self) -> Self::Cursor {
        self.source.open()
    }
}

impl<'a, S: Sequence> IntoIterator for &'a Seq<S> {
    type Item = Result<S::Item, S::Error>;
    type IntoIter = Traversal<S::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

/// Fluent wrapper around an asynchronous sequence.
///
/// ```compile_fail
/// use pullseq::AsyncSeq;
///
/// let _ = AsyncSeq::<()>::default();
/// ```
#[derive(Debug, Clone)]
pub struct AsyncSeq<S> {
    source: S,
}

impl<S> AsyncSeq<S> {
    /// Wrap a source. Nothing is pulled until a traversal starts.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Borrow the wrapped source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Apply an operator to this container.
    pub fn pipe<O>(self, operator: O) -> O::Output
    where
        O: Operator<Self>,
    {
        operator.apply(self)
    }
}

impl<S: AsyncSequence> AsyncSeq<S> {
    /// Start a new traversal.
    pub fn traverse(&self) -> Traversal<S::Cursor> {
        Traversal::new(self.source.open())
    }

    /// Drain a fresh traversal into a vector, stopping at the first failure.
    pub async fn to_vec(&self) -> Result<Vec<S::Item>, S::Error> {
        let mut traversal = self.traverse();
        let mut items = Vec::new();
        loop {
            match AsyncCursor::advance(&mut traversal).await {
                Pull::Item(item) => items.push(item),
                Pull::Done => return Ok(items),
                Pull::Failed(err) => return Err(err),
            }
        }
    }

    /// Start a new traversal exposed as a [`futures::Stream`].
    pub fn into_stream(&self) -> impl futures::Stream<Item = Result<S::Item, S::Error>> + use<S> {
        self.traverse().into_stream()
    }

    /// Erase the source type.
    pub fn boxed(self) -> AsyncSeq<BoxAsyncSequence<S::Item, S::Error>>
    where
        S: 'static,
        S::Cursor: 'static,
    {
        AsyncSeq::new(Box::new(Erased::new(self.source)))
    }
}

impl<S: AsyncSequence> AsyncSequence for AsyncSeq<S> {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = S::Cursor;

    fn open(&self) -> Self::Cursor {
        self.source.open()
    }
}
