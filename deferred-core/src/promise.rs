//! The promise-side adapter for deferred values.

use core::fmt;
use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_channel::oneshot;
use futures_core::future::FusedFuture;

/// Future for the settlement of a [`Deferred`](crate::Deferred) value.
///
/// A `Promise` yields the settled value exactly once. If the producing
/// side goes away without settling (the channel sender is dropped, or the
/// promise was created with [`Promise::never`]), every poll returns
/// [`Poll::Pending`], forever. Abandonment is not an error and is never
/// reported as one.
#[must_use = "promises do nothing unless polled"]
pub struct Promise<T> {
    state: State<T>,
}

enum State<T> {
    Waiting(oneshot::Receiver<T>),
    Ready(T),
    Never,
    Done,
}

impl<T> Promise<T> {
    /// A promise that never settles.
    pub fn never() -> Self {
        Promise {
            state: State::Never,
        }
    }

    /// A promise that has already settled with `value`.
    pub fn settled(value: T) -> Self {
        Promise {
            state: State::Ready(value),
        }
    }
}

impl<T> From<oneshot::Receiver<T>> for Promise<T> {
    /// A promise settling with the value sent on the channel.
    ///
    /// Dropping the sender without sending leaves the promise pending
    /// indefinitely.
    fn from(rx: oneshot::Receiver<T>) -> Self {
        Promise {
            state: State::Waiting(rx),
        }
    }
}

impl<T> Future for Promise<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();
        match mem::replace(&mut this.state, State::Done) {
            State::Waiting(mut rx) => match Pin::new(&mut rx).poll(cx) {
                Poll::Ready(Ok(value)) => Poll::Ready(value),
                Poll::Ready(Err(oneshot::Canceled)) => {
                    // The producer is gone; nothing will ever arrive.
                    this.state = State::Never;
                    Poll::Pending
                }
                Poll::Pending => {
                    this.state = State::Waiting(rx);
                    Poll::Pending
                }
            },
            State::Ready(value) => Poll::Ready(value),
            State::Never => {
                this.state = State::Never;
                Poll::Pending
            }
            State::Done => panic!("`Promise` polled after completion"),
        }
    }
}

impl<T> FusedFuture for Promise<T> {
    fn is_terminated(&self) -> bool {
        match self.state {
            State::Done => true,
            _ => false,
        }
    }
}

// The inner value is only ever moved out, never pinned.
impl<T> Unpin for Promise<T> {}

impl<T> fmt::Debug for Promise<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Waiting(_) => "Waiting",
            State::Ready(_) => "Ready",
            State::Never => "Never",
            State::Done => "Done",
        };
        f.debug_struct("Promise").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_task::noop_waker_ref;

    fn poll_once<T>(promise: &mut Promise<T>) -> Poll<T> {
        let mut cx = Context::from_waker(noop_waker_ref());
        Pin::new(promise).poll(&mut cx)
    }

    #[test]
    fn never_stays_pending() {
        let mut promise = Promise::<u32>::never();
        assert!(poll_once(&mut promise).is_pending());
        assert!(poll_once(&mut promise).is_pending());
        assert!(!promise.is_terminated());
    }

    #[test]
    fn settled_yields_then_terminates() {
        let mut promise = Promise::settled(5);
        assert!(!promise.is_terminated());
        assert_eq!(poll_once(&mut promise), Poll::Ready(5));
        assert!(promise.is_terminated());
    }

    #[test]
    #[should_panic(expected = "polled after completion")]
    fn poll_after_completion_panics() {
        let mut promise = Promise::settled(1);
        let _ = poll_once(&mut promise);
        let _ = poll_once(&mut promise);
    }

    #[test]
    fn abandoned_sender_stays_pending() {
        let (tx, rx) = oneshot::channel::<u32>();
        let mut promise = Promise::from(rx);
        drop(tx);
        assert!(poll_once(&mut promise).is_pending());
        assert!(poll_once(&mut promise).is_pending());
        assert!(!promise.is_terminated());
    }
}
