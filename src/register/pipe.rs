/// A transformation applied to a whole container.
///
/// Any `FnOnce(S) -> O` is an operator, so most third-party operators are plain
/// functions or closures. Operators that need to work on both [`Seq`](crate::Seq)
/// and [`AsyncSeq`](crate::AsyncSeq) implement the trait twice, as
/// [`DistinctUntilChangedOp`](crate::operators::DistinctUntilChangedOp) does.
pub trait Operator<S> {
    type Output;

    fn apply(self, source: S) -> Self::Output;
}

impl<S, O, F> Operator<S> for F
where
    F: FnOnce(S) -> O,
{
    type Output = O;

    fn apply(self, source: S) -> O {
        self(source)
    }
}

/// A boxed operator from `S` to `O`.
pub type OperatorFn<S, O> = Box<dyn FnOnce(S) -> O>;

/// A boxed operator that keeps the container type.
pub type MonoTypeOperator<S> = OperatorFn<S, S>;

/// Apply `operator` to `source`.
///
/// Use the [`pipe!`](crate::pipe!) macro to apply several in order.
pub fn pipe<S, O>(source: S, operator: O) -> O::Output
where
    O: Operator<S>,
{
    operator.apply(source)
}

/// Apply operators left to right: `pipe!(source, a, b)` is `b(a(source))`.
///
/// ```rust
/// use pullseq::prelude::*;
/// use pullseq::operators::distinct_until_changed;
///
/// let runs = pullseq::pipe!(
///     from_iter(vec![1, 1, 2, 2, 1]),
///     distinct_until_changed(DistinctOptions::new()),
///     |seq: Seq<_>| seq.to_vec(),
/// );
/// assert_eq!(runs, Ok(vec![1, 2, 1]));
/// ```
#[macro_export]
macro_rules! pipe {
    ($source:expr $(,)?) => {
        $source
    };
    ($source:expr, $operator:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!($crate::register::pipe($source, $operator) $(, $rest)*)
    };
}
