use std::convert::Infallible;
use std::marker::PhantomData;

use crate::container::Seq;
use crate::cursor::Cursor;
use crate::pull::Pull;
use crate::sequence::Sequence;

/// A sequence over a cloneable collection that cannot fail.
#[derive(Debug, Clone)]
pub struct FromIter<I>(I);

/// Create a sequence from anything that can be iterated more than once.
///
/// Every traversal iterates a fresh clone of `iterable`.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let letters = from_iter(["a", "b"]);
/// assert_eq!(letters.to_vec().unwrap(), vec!["a", "b"]);
/// ```
pub fn from_iter<I>(iterable: I) -> Seq<FromIter<I>>
where
    I: IntoIterator + Clone,
{
    Seq::new(FromIter(iterable))
}

/// Cursor over a plain iterator.
#[derive(Debug)]
pub struct IterCursor<It>(It);

impl<It: Iterator> Cursor for IterCursor<It> {
    type Item = It::Item;
    type Error = Infallible;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self.0.next() {
            Some(item) => Pull::Item(item),
            None => Pull::Done,
        }
    }
}

impl<I> Sequence for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Error = Infallible;
    type Cursor = IterCursor<I::IntoIter>;

    fn open(&self) -> Self::Cursor {
        IterCursor(self.0.clone().into_iter())
    }
}

/// A sequence over a cloneable collection of `Result`s.
#[derive(Debug, Clone)]
pub struct FromResults<I>(I);

/// Create a sequence whose traversals fail at the first `Err`.
///
/// Nothing after the first `Err` is ever pulled from the underlying iterator.
pub fn from_results<I, T, E>(iterable: I) -> Seq<FromResults<I>>
where
    I: IntoIterator<Item = Result<T, E>> + Clone,
{
    Seq::new(FromResults(iterable))
}

/// Cursor over an iterator of `Result`s.
#[derive(Debug)]
pub struct ResultsCursor<It>(It);

impl<It, T, E> Cursor for ResultsCursor<It>
where
    It: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<T, E> {
        Pull::from(self.0.next())
    }
}

impl<I, T, E> Sequence for FromResults<I>
where
    I: IntoIterator<Item = Result<T, E>> + Clone,
{
    type Item = T;
    type Error = E;
    type Cursor = ResultsCursor<I::IntoIter>;

    fn open(&self) -> Self::Cursor {
        ResultsCursor(self.0.clone().into_iter())
    }
}

/// A sequence that is exhausted immediately.
pub struct Empty<T, E>(PhantomData<fn() -> (T, E)>);

/// Create a sequence with no items.
pub fn empty<T, E>() -> Seq<Empty<T, E>> {
    Seq::new(Empty(PhantomData))
}

impl<T, E> Clone for Empty<T, E> {
    fn clone(&self) -> Self {
        Empty(PhantomData)
    }
}

impl<T, E> std::fmt::Debug for Empty<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Empty")
    }
}

impl<T, E> Cursor for Empty<T, E> {
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<T, E> {
        Pull::Done
    }
}

impl<T, E> Sequence for Empty<T, E> {
    type Item = T;
    type Error = E;
    type Cursor = Empty<T, E>;

    fn open(&self) -> Self::Cursor {
        Empty(PhantomData)
    }
}
