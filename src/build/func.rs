use std::future::Future;

use crate::container::{AsyncSeq, Seq};
use crate::cursor::{AsyncCursor, Cursor};
use crate::pull::Pull;
use crate::sequence::{AsyncSequence, Sequence};

/// A cursor driven by a closure.
///
/// With `F: FnMut() -> Pull<T, E>` it is a [`Cursor`]; with
/// `F: FnMut() -> impl Future<Output = Pull<T, E>>` it is an [`AsyncCursor`].
pub struct FromFn<F>(F);

/// Create a cursor from a closure that answers each pull.
///
/// ```rust
/// use pullseq::prelude::*;
///
/// let mut toggle = false;
/// let mut cursor = from_fn(move || {
///     toggle = !toggle;
///     if toggle { Pull::<_, ()>::Item("tick") } else { Pull::Done }
/// });
/// assert_eq!(cursor.advance(), Pull::Item("tick"));
/// assert_eq!(cursor.advance(), Pull::Done);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F, T, E> Cursor for FromFn<F>
where
    F: FnMut() -> Pull<T, E>,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Pull<T, E> {
        (self.0)()
    }
}

impl<F, Fut, T, E> AsyncCursor for FromFn<F>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Pull<T, E>>,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> impl Future<Output = Pull<T, E>> {
        (self.0)()
    }
}

/// A sequence that asks a factory for a new cursor on every traversal.
#[derive(Clone)]
pub struct Generate<F>(F);

/// Create a synchronous sequence from a cursor factory.
///
/// The factory is called once per traversal and never before one starts. The
/// cursor it returns is released through [`Traversal`](crate::Traversal) on
/// exhaustion, failure, or abandonment, which makes this the place to attach
/// cursors that hold resources.
pub fn generate<F, C>(factory: F) -> Seq<Generate<F>>
where
    F: Fn() -> C,
    C: Cursor,
{
    Seq::new(Generate(factory))
}

/// Create an asynchronous sequence from a cursor factory.
pub fn generate_async<F, C>(factory: F) -> AsyncSeq<Generate<F>>
where
    F: Fn() -> C,
    C: AsyncCursor,
{
    AsyncSeq::new(Generate(factory))
}

impl<F, C> Sequence for Generate<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    type Item = C::Item;
    type Error = C::Error;
    type Cursor = C;

    fn open(&self) -> C {
        (self.0)()
    }
}

impl<F, C> AsyncSequence for Generate<F>
where
    F: Fn() -> C,
    C: AsyncCursor,
{
    type Item = C::Item;
    type Error = C::Error;
    type Cursor = C;

    fn open(&self) -> C {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::future::ready;
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;

    #[test]
    fn test_from_fn_async() {
        let mut n = 0;
        let mut cursor = from_fn(move || {
            n += 1;
            ready(if n < 3 { Pull::<i32, ()>::Item(n) } else { Pull::Done })
        });

        block_on(async {
            assert_eq!(cursor.advance().await, Pull::Item(1));
            assert_eq!(cursor.advance().await, Pull::Item(2));
            assert_eq!(cursor.advance().await, Pull::Done);
        });
    }

    #[test]
    fn test_generate_calls_factory_per_traversal() {
        let calls = Rc::new(Cell::new(0));
        let seq = generate({
            let calls = Rc::clone(&calls);
            move || {
                calls.set(calls.get() + 1);
                let mut left = 2;
                from_fn(move || {
                    if left == 0 {
                        return Pull::<u8, ()>::Done;
                    }
                    left -= 1;
                    Pull::Item(left)
                })
            }
        });

        assert_eq!(seq.to_vec(), Ok(vec![1, 0]));
        assert_eq!(seq.to_vec(), Ok(vec![1, 0]));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_generate_async() {
        let seq = generate_async(|| {
            let mut items = vec!["x", "y"].into_iter();
            from_fn(move || ready(Pull::<_, ()>::from(items.next().map(Ok))))
        });

        assert_eq!(block_on(seq.to_vec()), Ok(vec!["x", "y"]));
    }
}
