//! Lock-step comparison of two sequences.
//!
//! Each step pulls once from `this` and then once from `other`. The comparison
//! stops at the first pair that tells the answer: both exhausted (equal), one
//! exhausted (different lengths), or two items the comparer rejects. Nothing is
//! pulled past that point, and both traversals are released before returning.
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let a = from_iter([1, 2, 3]);
//! assert_eq!(a.sequence_equal(&from_iter([1, 2, 3])), Ok(true));
//! assert_eq!(a.sequence_equal(&from_iter([1, 2])), Ok(false));
//! ```
//!
//! A failure from either side is returned as is. If `this` fails, `other` is not
//! pulled in that step.

use std::ops::ControlFlow;

use crate::container::{AsyncSeq, Seq};
use crate::cursor::{AsyncCursor, Cursor};
use crate::operators::compare::{Comparer, DefaultComparer};
use crate::pull::Pull;
use crate::sequence::{AsyncSequence, Sequence};
use crate::traversal::Traversal;

/// Configuration for [`sequence_equal_by`] and the `sequence_equal_with` methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceEqualOptions<C = DefaultComparer> {
    comparer: C,
}

impl SequenceEqualOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> SequenceEqualOptions<C> {
    /// Decide item equality with `comparer`, called as `comparer(this_item, other_item)`.
    pub fn comparer<C2>(self, comparer: C2) -> SequenceEqualOptions<C2> {
        SequenceEqualOptions { comparer }
    }
}

/// One lock-step comparison. `mine` is `None` once `this` is exhausted.
fn compare_step<T, E, C>(mine: Option<T>, theirs: Pull<T, E>, comparer: &C) -> Result<ControlFlow<bool>, E>
where
    C: Comparer<T>,
{
    match (mine, theirs) {
        (_, Pull::Failed(err)) => Err(err),
        (None, Pull::Done) => Ok(ControlFlow::Break(true)),
        (Some(a), Pull::Item(b)) => {
            if comparer.equals(&a, &b) {
                Ok(ControlFlow::Continue(()))
            } else {
                #[cfg(feature = "tracing")]
                tracing::trace!("sequences differ at an item");
                Ok(ControlFlow::Break(false))
            }
        }
        (Some(_), Pull::Done) | (None, Pull::Item(_)) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("sequences differ in length");
            Ok(ControlFlow::Break(false))
        }
    }
}

/// Whether `this` and `other` yield equal items in the same order.
pub fn sequence_equal_by<A, B, C>(this: &A, other: &B, comparer: C) -> Result<bool, A::Error>
where
    A: Sequence,
    B: Sequence<Item = A::Item, Error = A::Error>,
    C: Comparer<A::Item>,
{
    let mut mine = Traversal::new(this.open());
    let mut theirs = Traversal::new(other.open());
    loop {
        let item = match mine.advance() {
            Pull::Item(item) => Some(item),
            Pull::Done => None,
            Pull::Failed(err) => return Err(err),
        };
        if let ControlFlow::Break(equal) = compare_step(item, theirs.advance(), &comparer)? {
            return Ok(equal);
        }
    }
}

/// Asynchronous [`sequence_equal_by`]. The two pulls of a step are awaited one
/// after the other, never concurrently.
pub async fn sequence_equal_by_async<A, B, C>(
    this: &A,
    other: &B,
    comparer: C,
) -> Result<bool, A::Error>
where
    A: AsyncSequence,
    B: AsyncSequence<Item = A::Item, Error = A::Error>,
    C: Comparer<A::Item>,
{
    let mut mine = Traversal::new(this.open());
    let mut theirs = Traversal::new(other.open());
    loop {
        let item = match mine.advance().await {
            Pull::Item(item) => Some(item),
            Pull::Done => None,
            Pull::Failed(err) => return Err(err),
        };
        if let ControlFlow::Break(equal) = compare_step(item, theirs.advance().await, &comparer)? {
            return Ok(equal);
        }
    }
}

impl<S: Sequence> Seq<S> {
    /// Whether this and `other` yield equal items in the same order.
    pub fn sequence_equal<O>(&self, other: &O) -> Result<bool, S::Error>
    where
        O: Sequence<Item = S::Item, Error = S::Error>,
        S::Item: PartialEq,
    {
        sequence_equal_by(self.get_ref(), other, DefaultComparer)
    }

    /// [`Seq::sequence_equal`] with a custom comparer.
    pub fn sequence_equal_with<O, C>(
        &self,
        other: &O,
        options: SequenceEqualOptions<C>,
    ) -> Result<bool, S::Error>
    where
        O: Sequence<Item = S::Item, Error = S::Error>,
        C: Comparer<S::Item>,
    {
        sequence_equal_by(self.get_ref(), other, options.comparer)
    }
}

impl<S: AsyncSequence> AsyncSeq<S> {
    /// Whether this and `other` yield equal items in the same order.
    pub async fn sequence_equal<O>(&self, other: &O) -> Result<bool, S::Error>
    where
        O: AsyncSequence<Item = S::Item, Error = S::Error>,
        S::Item: PartialEq,
    {
        sequence_equal_by_async(self.get_ref(), other, DefaultComparer).await
    }

    /// [`AsyncSeq::sequence_equal`] with a custom comparer.
    pub async fn sequence_equal_with<O, C>(
        &self,
        other: &O,
        options: SequenceEqualOptions<C>,
    ) -> Result<bool, S::Error>
    where
        O: AsyncSequence<Item = S::Item, Error = S::Error>,
        C: Comparer<S::Item>,
    {
        sequence_equal_by_async(self.get_ref(), other, options.comparer).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::build::{empty, from_fn, from_iter, from_results, generate, generate_async};
    use crate::testing::suspending;

    /// A sequence over `items` that counts every pull and panics on any pull
    /// beyond `limit`.
    fn strict(
        items: Vec<i32>,
        limit: usize,
        pulls: Rc<Cell<usize>>,
    ) -> Seq<impl Sequence<Item = i32, Error = &'static str>> {
        generate(move || {
            let mut items = items.clone().into_iter();
            let pulls = Rc::clone(&pulls);
            from_fn(move || {
                pulls.set(pulls.get() + 1);
                assert!(pulls.get() <= limit, "pulled past the short-circuit point");
                Pull::<i32, &'static str>::from(items.next().map(Ok))
            })
        })
    }

    #[test]
    fn test_equal_sequences() {
        let a = from_iter(vec![1, 2, 3]);
        assert_eq!(a.sequence_equal(&from_iter(vec![1, 2, 3])), Ok(true));
        assert_eq!(a.sequence_equal(&a), Ok(true));
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(empty::<i32, ()>().sequence_equal(&empty()), Ok(true));
    }

    #[test]
    fn test_shorter_other_stops_after_its_exhaustion() {
        let pulls = Rc::new(Cell::new(0));
        let this = strict(vec![1, 2, 3], 3, Rc::clone(&pulls));
        let other = from_results::<_, i32, &str>(vec![Ok(1), Ok(2)]);

        assert_eq!(this.sequence_equal(&other), Ok(false));
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_shorter_this_never_pulls_past_the_next_item_of_other() {
        let pulls = Rc::new(Cell::new(0));
        let this = from_results::<_, i32, &str>(vec![Ok(1), Ok(2)]);
        let other = strict(vec![1, 2, 3, 4, 5], 3, Rc::clone(&pulls));

        assert_eq!(this.sequence_equal(&other), Ok(false));
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_mismatch_short_circuits() {
        let pulls = Rc::new(Cell::new(0));
        let this = strict(vec![1, 9, 3, 4], 2, Rc::clone(&pulls));
        let other = from_results::<_, i32, &str>(vec![Ok(1), Ok(2), Ok(3), Ok(4)]);

        assert_eq!(this.sequence_equal(&other), Ok(false));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_custom_comparer() {
        let this = from_iter(vec!["Rust", "ASYNC"]);
        let other = from_iter(vec!["rust", "async"]);
        let options = SequenceEqualOptions::new().comparer(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b));

        assert_eq!(this.sequence_equal(&other), Ok(false));
        assert_eq!(this.sequence_equal_with(&other, options), Ok(true));
    }

    #[test]
    fn test_failure_of_this_is_returned_before_other_is_pulled() {
        let pulls = Rc::new(Cell::new(0));
        let this = from_results(vec![Ok(1), Err("left")]);
        let other = strict(vec![1, 2], 1, Rc::clone(&pulls));

        assert_eq!(this.sequence_equal(&other), Err("left"));
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_failure_of_other_propagates() {
        let this = from_results::<_, i32, &str>(vec![Ok(1)]);
        let other = from_results(vec![Ok(1), Err("right")]);

        assert_eq!(this.sequence_equal(&other), Err("right"));
    }

    #[test]
    fn test_async_lock_step_with_suspension() {
        let this = generate_async(|| suspending::<i32, ()>(vec![Ok(1), Ok(2), Ok(3)]));
        let same = generate_async(|| suspending::<i32, ()>(vec![Ok(1), Ok(2), Ok(3)]));
        let shorter = from_results(vec![Ok(1), Ok(2)]).into_async();

        assert_eq!(block_on(this.sequence_equal(&same)), Ok(true));
        assert_eq!(block_on(this.sequence_equal(&shorter)), Ok(false));
    }

    #[test]
    fn test_async_failure_and_comparer() {
        let this = from_results(vec![Ok(1), Err("late")]).into_async();
        let other = generate_async(|| suspending::<i32, &'static str>(vec![Ok(1), Ok(2)]));
        assert_eq!(block_on(this.sequence_equal(&other)), Err("late"));

        let options = SequenceEqualOptions::new().comparer(|a: &i32, b: &i32| a % 10 == b % 10);
        let this = from_iter(vec![11, 22]).into_async();
        let other = from_iter(vec![1, 2]).into_async();
        assert_eq!(block_on(this.sequence_equal_with(&other, options)), Ok(true));
    }
}
