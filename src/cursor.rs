//! The pull protocol: live cursors over a sequence.
//!
//! A cursor is the per-traversal state of a sequence. It is created fresh for
//! every traversal, owned exclusively by whoever drives it, and dropped when the
//! traversal ends or is abandoned.
//!
//! - [`Cursor`] answers every pull immediately.
//! - [`AsyncCursor`] may suspend before answering; other traversals keep running
//!   while it is suspended.
//!
//! Both take `&mut self`, so a traversal can only ever be pulled by one owner at
//! a time. Concurrent pulls against one cursor cannot be expressed.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let mut remaining = 2;
//! let mut countdown = from_fn(move || {
//!     if remaining == 0 {
//!         return Pull::<i32, ()>::Done;
//!     }
//!     remaining -= 1;
//!     Pull::Item(remaining)
//! });
//!
//! assert_eq!(countdown.advance(), Pull::Item(1));
//! assert_eq!(countdown.advance(), Pull::Item(0));
//! assert_eq!(countdown.advance(), Pull::Done);
//! ```

use std::future::Future;

use either::Either;
use futures::future::LocalBoxFuture;

use crate::pull::Pull;

/// A synchronous traversal: every pull is answered without suspending.
pub trait Cursor {
    /// Type of the items produced.
    type Item;
    /// Type of the failure that terminates the traversal.
    type Error;

    /// Pull the next item.
    fn advance(&mut self) -> Pull<Self::Item, Self::Error>;

    /// Erase the concrete cursor type.
    fn boxed<'a>(self) -> BoxCursor<'a, Self::Item, Self::Error>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// A type-erased [`Cursor`].
pub type BoxCursor<'a, T, E> = Box<dyn Cursor<Item = T, Error = E> + 'a>;

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        (**self).advance()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        (**self).advance()
    }
}

impl<L, R> Cursor for Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item, Error = L::Error>,
{
    type Item = L::Item;
    type Error = L::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self {
            Either::Left(l) => l.advance(),
            Either::Right(r) => r.advance(),
        }
    }
}

/// An asynchronous traversal: a pull may suspend before it resolves.
///
/// Between the request and its resolution the caller yields to the surrounding
/// executor. The returned future borrows the cursor mutably, so no second pull
/// can be issued until the first one resolves.
pub trait AsyncCursor {
    /// Type of the items produced.
    type Item;
    /// Type of the failure that terminates the traversal.
    type Error;

    /// Pull the next item, suspending if it is not yet available.
    fn advance(&mut self) -> impl Future<Output = Pull<Self::Item, Self::Error>>;

    /// Erase the concrete cursor type.
    fn boxed<'a>(self) -> BoxAsyncCursor<'a, Self::Item, Self::Error>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// Object-safe companion of [`AsyncCursor`].
///
/// Implemented for every [`AsyncCursor`]; boxes the pull future so the cursor can
/// live behind `dyn`.
pub trait DynAsyncCursor {
    type Item;
    type Error;

    fn advance_boxed(&mut self) -> LocalBoxFuture<'_, Pull<Self::Item, Self::Error>>;
}

impl<C: AsyncCursor> DynAsyncCursor for C {
    type Item = C::Item;
    type Error = C::Error;

    fn advance_boxed(&mut self) -> LocalBoxFuture<'_, Pull<Self::Item, Self::Error>> {
        Box::pin(AsyncCursor::advance(self))
    }
}

/// A type-erased [`AsyncCursor`].
pub type BoxAsyncCursor<'a, T, E> = Box<dyn DynAsyncCursor<Item = T, Error = E> + 'a>;

impl<T, E> AsyncCursor for Box<dyn DynAsyncCursor<Item = T, Error = E> + '_> {
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> impl Future<Output = Pull<T, E>> {
        (**self).advance_boxed()
    }
}

impl<C: AsyncCursor + ?Sized> AsyncCursor for &mut C {
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> impl Future<Output = Pull<Self::Item, Self::Error>> {
        (**self).advance()
    }
}

impl<L, R> AsyncCursor for Either<L, R>
where
    L: AsyncCursor,
    R: AsyncCursor<Item = L::Item, Error = L::Error>,
{
    type Item = L::Item;
    type Error = L::Error;

    async fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        match self {
            Either::Left(l) => l.advance().await,
            Either::Right(r) => r.advance().await,
        }
    }
}
