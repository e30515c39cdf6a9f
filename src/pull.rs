/// Outcome of a single pull against a traversal.
///
/// Every cursor answers "pull next" with exactly one of three outcomes: an item
/// (more may follow), exhaustion, or a failure that ends the traversal.
///
/// # Examples
///
/// ```rust
/// use pullseq::Pull;
///
/// let item: Pull<i32, String> = Pull::Item(42);
/// assert_eq!(item.map_item(|v| v * 2), Pull::Item(84));
///
/// let done: Pull<i32, String> = Pull::Done;
/// assert!(done.is_done());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T, E> {
    /// An item was produced; the traversal may continue.
    Item(T),
    /// The traversal is exhausted.
    Done,
    /// The traversal failed and must not be pulled again.
    Failed(E),
}

impl<T, E> Pull<T, E> {
    /// Returns `true` if the pull produced an item.
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Pull::Item(_))
    }

    /// Returns `true` if the pull signalled exhaustion.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Pull::Done)
    }

    /// Returns `true` if the pull failed.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Pull::Failed(_))
    }

    /// Converts from `Pull<T, E>` to `Option<T>`, discarding exhaustion and failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Pull;
    ///
    /// let x: Pull<i32, &str> = Pull::Item(42);
    /// assert_eq!(x.item(), Some(42));
    ///
    /// let y: Pull<i32, &str> = Pull::Failed("boom");
    /// assert_eq!(y.item(), None);
    /// ```
    #[inline]
    pub fn item(self) -> Option<T> {
        match self {
            Pull::Item(item) => Some(item),
            Pull::Done | Pull::Failed(_) => None,
        }
    }

    /// Converts from `Pull<T, E>` to `Option<E>`, discarding items and exhaustion.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Pull::Failed(err) => Some(err),
            Pull::Item(_) | Pull::Done => None,
        }
    }

    /// Maps a `Pull<T, E>` to `Pull<U, E>` by applying a function to the item.
    #[inline]
    pub fn map_item<U, F>(self, f: F) -> Pull<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Item(item) => Pull::Item(f(item)),
            Pull::Done => Pull::Done,
            Pull::Failed(err) => Pull::Failed(err),
        }
    }

    /// Maps a `Pull<T, E>` to `Pull<T, E2>` by applying a function to the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pullseq::Pull;
    ///
    /// let x: Pull<i32, &str> = Pull::Failed("boom");
    /// assert_eq!(x.map_err(str::len), Pull::Failed(4));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Pull<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Pull::Item(item) => Pull::Item(item),
            Pull::Done => Pull::Done,
            Pull::Failed(err) => Pull::Failed(f(err)),
        }
    }

    /// Converts from `&Pull<T, E>` to `Pull<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Pull<&T, &E> {
        match self {
            Pull::Item(item) => Pull::Item(item),
            Pull::Done => Pull::Done,
            Pull::Failed(err) => Pull::Failed(err),
        }
    }

    /// Converts into the `Iterator`-shaped `Option<Result<T, E>>`.
    ///
    /// Exhaustion maps to `None`, so a traversal can back an iterator directly.
    #[inline]
    pub fn into_option(self) -> Option<Result<T, E>> {
        match self {
            Pull::Item(item) => Some(Ok(item)),
            Pull::Done => None,
            Pull::Failed(err) => Some(Err(err)),
        }
    }

    /// Returns the contained item, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is not an `Item`.
    #[inline]
    #[track_caller]
    pub fn expect_item(self, msg: &str) -> T {
        match self {
            Pull::Item(item) => item,
            Pull::Done | Pull::Failed(_) => panic!("{msg}"),
        }
    }

    /// Returns the contained item, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an `Item`.
    ///
    /// ```should_panic
    /// use pullseq::Pull;
    ///
    /// let x: Pull<i32, &str> = Pull::Done;
    /// x.unwrap_item(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_item(self) -> T {
        match self {
            Pull::Item(item) => item,
            Pull::Done => panic!("called `Pull::unwrap_item()` on a `Done` value"),
            Pull::Failed(_) => panic!("called `Pull::unwrap_item()` on a `Failed` value"),
        }
    }

    /// Returns the contained failure, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is not `Failed`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failed(self) -> E {
        match self {
            Pull::Failed(err) => err,
            Pull::Item(_) => panic!("called `Pull::unwrap_failed()` on an `Item` value"),
            Pull::Done => panic!("called `Pull::unwrap_failed()` on a `Done` value"),
        }
    }
}

impl<T, E> From<Option<Result<T, E>>> for Pull<T, E> {
    fn from(value: Option<Result<T, E>>) -> Self {
        match value {
            Some(Ok(item)) => Pull::Item(item),
            Some(Err(err)) => Pull::Failed(err),
            None => Pull::Done,
        }
    }
}

impl<T, E> From<Pull<T, E>> for Option<Result<T, E>> {
    fn from(value: Pull<T, E>) -> Self {
        value.into_option()
    }
}
