//! Fused, self-releasing traversals.
//!
//! [`Traversal`] is the single cleanup path for every cursor in this crate. It
//! drops the wrapped cursor, and with it any resource the cursor holds, the moment
//! the cursor reports exhaustion or failure. A consumer that stops pulling early
//! drops the traversal, which drops the cursor through the same `Drop`. Either
//! way the release happens exactly once.
//!
//! After the wrapped cursor is gone every further pull answers [`Pull::Done`].
//! An exhausted sequence never resurrects and a failed traversal stays unusable.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let numbers = from_iter(vec![1, 2, 3]);
//! let mut traversal = numbers.traverse();
//!
//! let firsts: Vec<_> = (&mut traversal).take(2).collect::<Result<_, _>>().unwrap();
//! assert_eq!(firsts, vec![1, 2]);
//! assert!(!traversal.is_finished());
//!
//! assert_eq!(traversal.advance(), Pull::Item(3));
//! assert_eq!(traversal.advance(), Pull::Done);
//! assert!(traversal.is_exhausted());
//! ```

use std::iter::FusedIterator;

use futures::Stream;

use crate::cursor::{AsyncCursor, Cursor};
use crate::pull::Pull;

/// A cursor that releases itself on exhaustion or failure and stays finished.
pub struct Traversal<C> {
    state: TraversalState<C>,
}

enum TraversalState<C> {
    Active(C),
    Exhausted,
    Failed,
}

impl<C> Traversal<C> {
    /// Start tracking a freshly opened cursor.
    pub fn new(cursor: C) -> Self {
        Self {
            state: TraversalState::Active(cursor),
        }
    }

    /// Check whether the traversal ended, by exhaustion or by failure.
    pub fn is_finished(&self) -> bool {
        !matches!(self.state, TraversalState::Active(_))
    }

    /// Check whether the traversal ran to exhaustion.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, TraversalState::Exhausted)
    }

    /// Check whether the traversal ended with a failure.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, TraversalState::Failed)
    }

    /// Record the outcome of a pull, releasing the cursor if it ended the traversal.
    fn settle<T, E>(&mut self, pull: Pull<T, E>) -> Pull<T, E> {
        match pull {
            Pull::Item(item) => Pull::Item(item),
            Pull::Done => {
                self.state = TraversalState::Exhausted;
                #[cfg(feature = "tracing")]
                tracing::trace!("traversal exhausted");
                Pull::Done
            }
            Pull::Failed(err) => {
                self.state = TraversalState::Failed;
                #[cfg(feature = "tracing")]
                tracing::trace!("traversal failed");
                Pull::Failed(err)
            }
        }
    }
}

impl<C: Cursor> Cursor for Traversal<C> {
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        let TraversalState::Active(cursor) = &mut self.state else {
            return Pull::Done;
        };
        let pull = cursor.advance();
        self.settle(pull)
    }
}

impl<C: AsyncCursor> AsyncCursor for Traversal<C> {
    type Item = C::Item;
    type Error = C::Error;

    async fn advance(&mut self) -> Pull<Self::Item, Self::Error> {
        let TraversalState::Active(cursor) = &mut self.state else {
            return Pull::Done;
        };
        let pull = cursor.advance().await;
        self.settle(pull)
    }
}

impl<C: Cursor> Iterator for Traversal<C> {
    type Item = Result<C::Item, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Cursor::advance(self).into_option()
    }
}

impl<C: Cursor> FusedIterator for Traversal<C> {}

impl<C: AsyncCursor> Traversal<C> {
    /// Drive the traversal as a [`Stream`] of `Result` items.
    pub fn into_stream(self) -> impl Stream<Item = Result<C::Item, C::Error>> {
        futures::stream::unfold(self, |mut traversal| async move {
            match AsyncCursor::advance(&mut traversal).await.into_option() {
                Some(item) => Some((item, traversal)),
                None => None,
            }
        })
    }
}

#[cfg(feature = "tracing")]
impl<C> Drop for Traversal<C> {
    fn drop(&mut self) {
        if !self.is_finished() {
            tracing::trace!("traversal abandoned");
        }
    }
}
