use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_task::noop_waker_ref;

/// Assert that a single poll of `future` returns
/// [`Poll::Pending`](core::task::Poll::Pending).
///
/// The poll uses a waker that ignores wakes, so this is only meaningful
/// for futures expected never to settle; a future that is merely not
/// ready *yet* would also pass.
///
/// # Panics
///
/// Panics if the future is ready.
pub fn assert_unsettled<F>(future: &mut F)
where
    F: Future + Unpin,
{
    let mut cx = Context::from_waker(noop_waker_ref());
    if let Poll::Ready(_) = Pin::new(future).poll(&mut cx) {
        panic!("assertion failed: future settled");
    }
}
