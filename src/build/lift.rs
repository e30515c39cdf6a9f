use std::future::{Future, ready};
use std::pin::Pin;

use futures::{Stream, StreamExt};

use crate::container::AsyncSeq;
use crate::cursor::{AsyncCursor, Cursor};
use crate::pull::Pull;
use crate::sequence::{AsyncSequence, Sequence};

/// Presents a synchronous sequence (or cursor) through the asynchronous protocol.
///
/// Every pull resolves on its first poll.
#[derive(Debug, Clone)]
pub struct Lift<S>(S);

impl<S> Lift<S> {
    pub fn new(inner: S) -> Self {
        Lift(inner)
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<C: Cursor> AsyncCursor for Lift<C> {
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> impl Future<Output = Pull<C::Item, C::Error>> {
        ready(self.0.advance())
    }
}

impl<S: Sequence> AsyncSequence for Lift<S> {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = Lift<S::Cursor>;

    fn open(&self) -> Self::Cursor {
        Lift(self.0.open())
    }
}

/// An asynchronous sequence backed by a stream factory.
#[derive(Clone)]
pub struct FromStream<F>(F);

/// Create an asynchronous sequence from a factory of `Result` streams.
///
/// A stream can only be consumed once, so the factory is called for every
/// traversal. The stream ends the traversal at its first `Err`.
pub fn from_stream<F, St, T, E>(factory: F) -> AsyncSeq<FromStream<F>>
where
    F: Fn() -> St,
    St: Stream<Item = Result<T, E>>,
{
    AsyncSeq::new(FromStream(factory))
}

/// Cursor over a pinned stream.
pub struct StreamCursor<St>(Pin<Box<St>>);

impl<St, T, E> AsyncCursor for StreamCursor<St>
where
    St: Stream<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    async fn advance(&mut self) -> Pull<T, E> {
        Pull::from(self.0.next().await)
    }
}

impl<F, St, T, E> AsyncSequence for FromStream<F>
where
    F: Fn() -> St,
    St: Stream<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;
    type Cursor = StreamCursor<St>;

    fn open(&self) -> Self::Cursor {
        StreamCursor(Box::pin((self.0)()))
    }
}
