//! Sequences: re-traversable descriptors that open fresh cursors.
//!
//! A [`Sequence`] (or [`AsyncSequence`]) never holds traversal state itself.
//! Each call to `open` creates a new cursor that owns all mutable state for that
//! traversal, so one sequence can be traversed any number of times, one after
//! another or interleaved, without the traversals observing each other.
//!
//! Opening a cursor must not pull anything. Work starts on the first `advance`.

use either::Either;

use crate::cursor::{AsyncCursor, BoxAsyncCursor, BoxCursor, Cursor};

/// A synchronous sequence.
pub trait Sequence {
    type Item;
    type Error;
    type Cursor: Cursor<Item = Self::Item, Error = Self::Error>;

    /// Start a new, independent traversal.
    fn open(&self) -> Self::Cursor;
}

/// An asynchronous sequence.
pub trait AsyncSequence {
    type Item;
    type Error;
    type Cursor: AsyncCursor<Item = Self::Item, Error = Self::Error>;

    /// Start a new, independent traversal.
    fn open(&self) -> Self::Cursor;
}

/// A type-erased [`Sequence`].
pub type BoxSequence<T, E> = Box<dyn Sequence<Item = T, Error = E, Cursor = BoxCursor<'static, T, E>>>;

/// A type-erased [`AsyncSequence`].
pub type BoxAsyncSequence<T, E> =
    Box<dyn AsyncSequence<Item = T, Error = E, Cursor = BoxAsyncCursor<'static, T, E>>>;

/// Adapter that boxes the cursors of the wrapped sequence.
///
/// This is what lets sequences of different concrete types share one
/// [`BoxSequence`] / [`BoxAsyncSequence`] type.
#[derive(Debug, Clone)]
pub struct Erased<S>(S);

impl<S> Erased<S> {
    pub fn new(source: S) -> Self {
        Erased(source)
    }
}

impl<S> Sequence for Erased<S>
where
    S: Sequence,
    S::Cursor: 'static,
{
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = BoxCursor<'static, S::Item, S::Error>;

    fn open(&self) -> Self::Cursor {
        Box::new(self.0.open())
    }
}

impl<S> AsyncSequence for Erased<S>
where
    S: AsyncSequence,
    S::Cursor: 'static,
{
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = BoxAsyncCursor<'static, S::Item, S::Error>;

    fn open(&self) -> Self::Cursor {
        Box::new(self.0.open())
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = S::Cursor;

    fn open(&self) -> Self::Cursor {
        (**self).open()
    }
}

impl<S: AsyncSequence + ?Sized> AsyncSequence for Box<S> {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = S::Cursor;

    fn open(&self) -> Self::Cursor {
        (**self).open()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = S::Cursor;

    fn open(&self) -> Self::Cursor {
        (**self).open()
    }
}

impl<S: AsyncSequence + ?Sized> AsyncSequence for &S {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = S::Cursor;

    fn open(&self) -> Self::Cursor {
        (**self).open()
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item, Error = L::Error>,
{
    type Item = L::Item;
    type Error = L::Error;
    type Cursor = Either<L::Cursor, R::Cursor>;

    fn open(&self) -> Self::Cursor {
        match self {
            Either::Left(l) => Either::Left(l.open()),
            Either::Right(r) => Either::Right(r.open()),
        }
    }
}

impl<L, R> AsyncSequence for Either<L, R>
where
    L: AsyncSequence,
    R: AsyncSequence<Item = L::Item, Error = L::Error>,
{
    type Item = L::Item;
    type Error = L::Error;
    type Cursor = Either<L::Cursor, R::Cursor>;

    fn open(&self) -> Self::Cursor {
        match self {
            Either::Left(l) => Either::Left(l.open()),
            Either::Right(r) => Either::Right(r.open()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_iter, from_results};
    use crate::pull::Pull;

    #[test]
    fn test_open_creates_independent_cursors() {
        let source = from_iter(vec![1, 2, 3]).into_inner();
        let mut first = source.open();
        let mut second = source.open();

        assert_eq!(first.advance(), Pull::Item(1));
        assert_eq!(first.advance(), Pull::Item(2));
        assert_eq!(second.advance(), Pull::Item(1));
        assert_eq!(first.advance(), Pull::Item(3));
    }

    #[test]
    fn test_erased_sequences_share_a_type() {
        let sources: Vec<BoxSequence<i32, &str>> = vec![
            Box::new(Erased::new(from_results(vec![Ok(1), Err("bad")]))),
            Box::new(Erased::new(from_results(vec![Ok(7)]))),
        ];

        let firsts: Vec<_> = sources.iter().map(|s| s.open().advance()).collect();
        assert_eq!(firsts, vec![Pull::Item(1), Pull::Item(7)]);
    }

    #[test]
    fn test_either_sequence() {
        let choose = |left: bool| -> Either<_, _> {
            if left {
                Either::Left(from_results::<_, i32, ()>(vec![Ok(1)]).into_inner())
            } else {
                Either::Right(from_results::<_, i32, ()>(vec![Err(())]).into_inner())
            }
        };

        assert_eq!(choose(true).open().advance(), Pull::Item(1));
        assert_eq!(choose(false).open().advance(), Pull::Failed(()));
    }
}
