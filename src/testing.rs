//! Helpers shared by the unit tests.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::build::{FromFn, from_fn};
use crate::pull::Pull;

/// Future that is pending on its first poll and ready on the second.
pub(crate) struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

pub(crate) fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}

/// An async cursor over `items` that suspends once before every pull resolves.
pub(crate) fn suspending<T, E>(
    items: Vec<Result<T, E>>,
) -> FromFn<impl FnMut() -> Pin<Box<dyn Future<Output = Pull<T, E>>>>>
where
    T: 'static,
    E: 'static,
{
    let mut items = items.into_iter();
    from_fn(move || {
        let next = Pull::from(items.next());
        Box::pin(async move {
            yield_now().await;
            next
        }) as Pin<Box<dyn Future<Output = Pull<T, E>>>>
    })
}
