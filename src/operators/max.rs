//! The largest value of a sequence, as `f64`.
//!
//! `max` is a reducing operator: it drains its source during the call and
//! returns a plain result instead of a new sequence. An empty source is an error
//! ([`SeqError::Empty`]), never a sentinel value.
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let words = from_iter(["a", "bbb", "cc"]);
//! assert_eq!(words.max_by(|w| w.len() as f64), Ok(3.0));
//!
//! let nothing = empty::<f64, ()>();
//! assert_eq!(nothing.max(), Err(SeqError::Empty));
//! ```
//!
//! The running maximum starts at negative infinity and is replaced only by a
//! strictly greater value, so `NaN` selections never become the result.

use std::future::Future;

use futures::FutureExt;

use crate::container::{AsyncSeq, Seq};
use crate::cursor::{AsyncCursor, Cursor};
use crate::error::SeqError;
use crate::pull::Pull;
use crate::sequence::{AsyncSequence, Sequence};
use crate::traversal::Traversal;

/// Running maximum plus whether anything was observed.
#[derive(Debug)]
struct MaxState {
    value: f64,
    seen: bool,
}

impl MaxState {
    fn new() -> Self {
        Self {
            value: f64::NEG_INFINITY,
            seen: false,
        }
    }

    fn observe(&mut self, value: f64) {
        self.seen = true;
        if value > self.value {
            self.value = value;
        }
    }

    fn finish<E>(self) -> Result<f64, SeqError<E>> {
        if !self.seen {
            #[cfg(feature = "tracing")]
            tracing::debug!("max over an empty sequence");
            return Err(SeqError::Empty);
        }
        Ok(self.value)
    }
}

/// Largest selected value, with a selector that may fail.
///
/// A selector failure ends the traversal just like an upstream failure and is
/// reported as [`SeqError::Upstream`].
pub fn try_max_by<S, F>(source: &S, mut selector: F) -> Result<f64, SeqError<S::Error>>
where
    S: Sequence,
    F: FnMut(S::Item) -> Result<f64, S::Error>,
{
    let mut traversal = Traversal::new(source.open());
    let mut state = MaxState::new();
    loop {
        match traversal.advance() {
            Pull::Item(item) => state.observe(selector(item).map_err(SeqError::Upstream)?),
            Pull::Done => return state.finish(),
            Pull::Failed(err) => return Err(SeqError::Upstream(err)),
        }
    }
}

/// Largest selected value.
pub fn max_by<S, F>(source: &S, mut selector: F) -> Result<f64, SeqError<S::Error>>
where
    S: Sequence,
    F: FnMut(S::Item) -> f64,
{
    try_max_by(source, |item| Ok(selector(item)))
}

/// Largest selected value of an asynchronous sequence, with a selector that may
/// suspend and may fail.
pub async fn try_max_by_async<S, F, Fut>(
    source: &S,
    mut selector: F,
) -> Result<f64, SeqError<S::Error>>
where
    S: AsyncSequence,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = Result<f64, S::Error>>,
{
    let mut traversal = Traversal::new(source.open());
    let mut state = MaxState::new();
    loop {
        match traversal.advance().await {
            Pull::Item(item) => state.observe(selector(item).await.map_err(SeqError::Upstream)?),
            Pull::Done => return state.finish(),
            Pull::Failed(err) => return Err(SeqError::Upstream(err)),
        }
    }
}

/// Largest selected value of an asynchronous sequence, with a selector that may
/// suspend.
pub async fn max_by_async<S, F, Fut>(source: &S, mut selector: F) -> Result<f64, SeqError<S::Error>>
where
    S: AsyncSequence,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = f64>,
{
    try_max_by_async(source, |item| selector(item).map(Ok)).await
}

impl<S: Sequence> Seq<S> {
    /// Largest item.
    ///
    /// Only items that convert to `f64` without loss qualify, so `i64`, `u64`
    /// and `usize` items need an explicit conversion through
    /// [`max_by`](Seq::max_by), e.g. `seq.max_by(|n| n as f64)`.
    pub fn max(&self) -> Result<f64, SeqError<S::Error>>
    where
        S::Item: Into<f64>,
    {
        max_by(self.get_ref(), Into::into)
    }

    /// Largest value `selector` returns for any item.
    pub fn max_by<F>(&self, selector: F) -> Result<f64, SeqError<S::Error>>
    where
        F: FnMut(S::Item) -> f64,
    {
        max_by(self.get_ref(), selector)
    }

    /// Largest value a fallible `selector` returns for any item.
    pub fn try_max_by<F>(&self, selector: F) -> Result<f64, SeqError<S::Error>>
    where
        F: FnMut(S::Item) -> Result<f64, S::Error>,
    {
        try_max_by(self.get_ref(), selector)
    }
}

impl<S: AsyncSequence> AsyncSeq<S> {
    /// Largest item.
    ///
    /// As with [`Seq::max`], `i64`, `u64` and `usize` items go through
    /// [`max_by`](AsyncSeq::max_by) instead.
    pub async fn max(&self) -> Result<f64, SeqError<S::Error>>
    where
        S::Item: Into<f64>,
    {
        self.max_by(Into::into).await
    }

    /// Largest value `selector` returns for any item.
    pub async fn max_by<F>(&self, mut selector: F) -> Result<f64, SeqError<S::Error>>
    where
        F: FnMut(S::Item) -> f64,
    {
        max_by_async(self.get_ref(), |item| std::future::ready(selector(item))).await
    }

    /// Largest value an asynchronous `selector` returns for any item.
    pub async fn max_by_async<F, Fut>(&self, selector: F) -> Result<f64, SeqError<S::Error>>
    where
        F: FnMut(S::Item) -> Fut,
        Fut: Future<Output = f64>,
    {
        max_by_async(self.get_ref(), selector).await
    }

    /// Largest value an asynchronous, fallible `selector` returns for any item.
    pub async fn try_max_by_async<F, Fut>(&self, selector: F) -> Result<f64, SeqError<S::Error>>
    where
        F: FnMut(S::Item) -> Fut,
        Fut: Future<Output = Result<f64, S::Error>>,
    {
        try_max_by_async(self.get_ref(), selector).await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::build::{empty, from_iter, from_results, generate_async};
    use crate::testing::{suspending, yield_now};

    #[test]
    fn test_max_of_numbers() {
        assert_eq!(from_iter(vec![3, 9, -1, 9, 4]).max(), Ok(9.0));
    }

    #[test]
    fn test_max_of_negative_numbers_is_not_zero() {
        assert_eq!(from_iter(vec![-5.5, -2.0, -9.25]).max(), Ok(-2.0));
    }

    #[test]
    fn test_max_by_selector() {
        let words = from_iter(vec!["a", "bbb", "cc"]);
        assert_eq!(words.max_by(|w| w.len() as f64), Ok(3.0));
    }

    #[test]
    fn test_empty_is_a_semantic_failure() {
        let err = empty::<i32, &str>().max().unwrap_err();
        assert!(err.is_empty_sequence());
        assert_eq!(err.upstream(), None);
    }

    #[test]
    fn test_upstream_failure_is_distinguishable() {
        let seq = from_results(vec![Ok(1), Err("disk"), Ok(100)]);
        assert_eq!(seq.max(), Err(SeqError::Upstream("disk")));
    }

    #[test]
    fn test_selector_failure_propagates() {
        let seq = from_results::<_, &str, &str>(vec![Ok("1"), Ok("x"), Ok("3")]);
        let parsed = seq.try_max_by(|s| s.parse::<f64>().map_err(|_| "not a number"));
        assert_eq!(parsed, Err(SeqError::Upstream("not a number")));
    }

    #[test]
    fn test_wide_integers_go_through_max_by() {
        let big = from_iter(vec![3_i64, 1 << 40, -7]);
        assert_eq!(big.max_by(|n| n as f64), Ok((1_i64 << 40) as f64));

        let sizes = from_iter(vec![2_usize, 9, 4]).into_async();
        assert_eq!(block_on(sizes.max_by(|n| n as f64)), Ok(9.0));
    }

    #[test]
    fn test_nan_never_wins() {
        assert_eq!(from_iter(vec![1.0, f64::NAN, 0.5]).max(), Ok(1.0));
    }

    #[test]
    fn test_async_max_with_suspending_source() {
        let seq = generate_async(|| suspending::<i32, ()>(vec![Ok(2), Ok(7), Ok(5)]));
        assert_eq!(block_on(seq.max()), Ok(7.0));
    }

    #[test]
    fn test_async_selector_may_suspend() {
        let seq = from_iter(vec!["aa", "a", "aaaa"]).into_async();
        let longest = block_on(seq.max_by_async(|w| async move {
            yield_now().await;
            w.len() as f64
        }));
        assert_eq!(longest, Ok(4.0));
    }

    #[test]
    fn test_async_empty_and_failure() {
        let nothing = empty::<u8, &str>().into_async();
        assert_eq!(block_on(nothing.max()), Err(SeqError::Empty));

        let broken = generate_async(|| suspending(vec![Ok(1u8), Err("net")]));
        assert_eq!(block_on(broken.max()), Err(SeqError::Upstream("net")));
    }

    #[test]
    fn test_async_fallible_selector() {
        let seq = from_results::<_, i32, &str>(vec![Ok(1), Ok(-1)]).into_async();
        let result = block_on(seq.try_max_by_async(|n| async move {
            if n < 0 { Err("negative") } else { Ok(f64::from(n)) }
        }));
        assert_eq!(result, Err(SeqError::Upstream("negative")));
    }
}
