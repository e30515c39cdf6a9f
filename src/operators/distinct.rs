//! Collapsing contiguous runs of equal items.
//!
//! `distinct_until_changed` emits an item only when its key differs from the key
//! of the last emitted item. Only *contiguous* duplicates are dropped: a key that
//! comes back after a different one is emitted again, so this is not global
//! deduplication.
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let words = from_iter(["apple", "avocado", "banana", "blueberry", "apricot"]);
//! let by_initial = words.distinct_until_changed_with(
//!     DistinctOptions::new().key_selector(|w: &&str| w.as_bytes()[0]),
//! );
//! assert_eq!(by_initial.to_vec().unwrap(), vec!["apple", "banana", "apricot"]);
//! ```
//!
//! All per-traversal state lives in the cursor, so a distinct sequence can be
//! traversed again and again as long as its source can.

use std::sync::Arc;

use crate::container::{AsyncSeq, Seq};
use crate::cursor::{AsyncCursor, Cursor};
use crate::operators::compare::{Comparer, DefaultComparer, Identity, KeySelector};
use crate::pull::Pull;
use crate::register::Operator;
use crate::sequence::{AsyncSequence, Sequence};
use crate::traversal::Traversal;

/// Configuration for [`distinct_until_changed`].
///
/// Both fields are independently optional: the key selector defaults to
/// [`Identity`] and the comparer to [`DefaultComparer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DistinctOptions<K = Identity, C = DefaultComparer> {
    key_selector: K,
    comparer: C,
}

impl DistinctOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, C> DistinctOptions<K, C> {
    /// Compare items by the key `selector` derives from them.
    pub fn key_selector<K2>(self, selector: K2) -> DistinctOptions<K2, C> {
        DistinctOptions {
            key_selector: selector,
            comparer: self.comparer,
        }
    }

    /// Decide key equality with `comparer`.
    ///
    /// It is called as `comparer(current_key, new_key)`.
    pub fn comparer<C2>(self, comparer: C2) -> DistinctOptions<K, C2> {
        DistinctOptions {
            key_selector: self.key_selector,
            comparer,
        }
    }
}

/// The per-traversal state: the key of the last emitted item, if any.
#[derive(Debug)]
struct DistinctState<Key> {
    current: Option<Key>,
}

impl<Key> DistinctState<Key> {
    fn new() -> Self {
        Self { current: None }
    }

    /// Decide whether an item with `key` is emitted, remembering its key if so.
    fn admit<C: Comparer<Key>>(&mut self, key: Key, comparer: &C) -> bool {
        match &self.current {
            Some(current) if comparer.equals(current, &key) => false,
            _ => {
                self.current = Some(key);
                true
            }
        }
    }
}

/// Sequence returned by `distinct_until_changed`.
pub struct DistinctUntilChanged<S, K, C> {
    source: S,
    options: Arc<DistinctOptions<K, C>>,
}

impl<S, K, C> DistinctUntilChanged<S, K, C> {
    pub fn new(source: S, options: DistinctOptions<K, C>) -> Self {
        Self {
            source,
            options: Arc::new(options),
        }
    }
}

impl<S: Clone, K, C> Clone for DistinctUntilChanged<S, K, C> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            options: Arc::clone(&self.options),
        }
    }
}

/// Cursor of a [`DistinctUntilChanged`] traversal.
pub struct DistinctCursor<U, K, C, Key> {
    upstream: Traversal<U>,
    options: Arc<DistinctOptions<K, C>>,
    state: DistinctState<Key>,
}

impl<U, K, C, Key> DistinctCursor<U, K, C, Key> {
    fn new(upstream: U, options: Arc<DistinctOptions<K, C>>) -> Self {
        Self {
            upstream: Traversal::new(upstream),
            options,
            state: DistinctState::new(),
        }
    }
}

impl<U, K, C> Cursor for DistinctCursor<U, K, C, K::Key>
where
    U: Cursor,
    K: KeySelector<U::Item>,
    C: Comparer<K::Key>,
{
    type Item = U::Item;
    type Error = U::Error;

    fn advance(&mut self) -> Pull<U::Item, U::Error> {
        loop {
            let item = match self.upstream.advance() {
                Pull::Item(item) => item,
                other => return other,
            };
            let key = self.options.key_selector.key(&item);
            if self.state.admit(key, &self.options.comparer) {
                return Pull::Item(item);
            }
        }
    }
}

impl<U, K, C> AsyncCursor for DistinctCursor<U, K, C, K::Key>
where
    U: AsyncCursor,
    K: KeySelector<U::Item>,
    C: Comparer<K::Key>,
{
    type Item = U::Item;
    type Error = U::Error;

    async fn advance(&mut self) -> Pull<U::Item, U::Error> {
        loop {
            let item = match self.upstream.advance().await {
                Pull::Item(item) => item,
                other => return other,
            };
            let key = self.options.key_selector.key(&item);
            if self.state.admit(key, &self.options.comparer) {
                return Pull::Item(item);
            }
        }
    }
}

impl<S, K, C> Sequence for DistinctUntilChanged<S, K, C>
where
    S: Sequence,
    K: KeySelector<S::Item>,
    C: Comparer<K::Key>,
{
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = DistinctCursor<S::Cursor, K, C, K::Key>;

    fn open(&self) -> Self::Cursor {
        DistinctCursor::new(self.source.open(), Arc::clone(&self.options))
    }
}

impl<S, K, C> AsyncSequence for DistinctUntilChanged<S, K, C>
where
    S: AsyncSequence,
    K: KeySelector<S::Item>,
    C: Comparer<K::Key>,
{
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = DistinctCursor<S::Cursor, K, C, K::Key>;

    fn open(&self) -> Self::Cursor {
        DistinctCursor::new(self.source.open(), Arc::clone(&self.options))
    }
}

impl<S: Sequence> Seq<S> {
    /// Drop items equal to the item emitted just before them.
    pub fn distinct_until_changed(self) -> Seq<DistinctUntilChanged<S, Identity, DefaultComparer>>
    where
        S::Item: Clone + PartialEq,
    {
        self.distinct_until_changed_with(DistinctOptions::new())
    }

    /// Drop items whose key equals the key of the item emitted just before them.
    pub fn distinct_until_changed_with<K, C>(
        self,
        options: DistinctOptions<K, C>,
    ) -> Seq<DistinctUntilChanged<S, K, C>>
    where
        K: KeySelector<S::Item>,
        C: Comparer<K::Key>,
    {
        Seq::new(DistinctUntilChanged::new(self.into_inner(), options))
    }
}

impl<S: AsyncSequence> AsyncSeq<S> {
    /// Drop items equal to the item emitted just before them.
    pub fn distinct_until_changed(
        self,
    ) -> AsyncSeq<DistinctUntilChanged<S, Identity, DefaultComparer>>
    where
        S::Item: Clone + PartialEq,
    {
        self.distinct_until_changed_with(DistinctOptions::new())
    }

    /// Drop items whose key equals the key of the item emitted just before them.
    pub fn distinct_until_changed_with<K, C>(
        self,
        options: DistinctOptions<K, C>,
    ) -> AsyncSeq<DistinctUntilChanged<S, K, C>>
    where
        K: KeySelector<S::Item>,
        C: Comparer<K::Key>,
    {
        AsyncSeq::new(DistinctUntilChanged::new(self.into_inner(), options))
    }
}

/// Standalone form of `distinct_until_changed`, for use with `pipe`.
///
/// Applies to both [`Seq`] and [`AsyncSeq`].
///
/// ```rust
/// use pullseq::prelude::*;
/// use pullseq::operators::distinct_until_changed;
///
/// let seq = from_iter(vec![3, 3, 4]).pipe(distinct_until_changed(DistinctOptions::new()));
/// assert_eq!(seq.to_vec().unwrap(), vec![3, 4]);
/// ```
pub fn distinct_until_changed<K, C>(options: DistinctOptions<K, C>) -> DistinctUntilChangedOp<K, C> {
    DistinctUntilChangedOp { options }
}

/// Operator value produced by [`distinct_until_changed`].
#[derive(Debug, Clone, Copy)]
pub struct DistinctUntilChangedOp<K, C> {
    options: DistinctOptions<K, C>,
}

impl<S, K, C> Operator<Seq<S>> for DistinctUntilChangedOp<K, C>
where
    S: Sequence,
    K: KeySelector<S::Item>,
    C: Comparer<K::Key>,
{
    type Output = Seq<DistinctUntilChanged<S, K, C>>;

    fn apply(self, source: Seq<S>) -> Self::Output {
        source.distinct_until_changed_with(self.options)
    }
}

impl<S, K, C> Operator<AsyncSeq<S>> for DistinctUntilChangedOp<K, C>
where
    S: AsyncSequence,
    K: KeySelector<S::Item>,
    C: Comparer<K::Key>,
{
    type Output = AsyncSeq<DistinctUntilChanged<S, K, C>>;

    fn apply(self, source: AsyncSeq<S>) -> Self::Output {
        source.distinct_until_changed_with(self.options)
    }
}
