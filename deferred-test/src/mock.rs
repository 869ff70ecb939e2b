use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use deferred_core::{Deferred, Done, Promise};
use futures_channel::oneshot;

/// A settable [`Deferred`] test double.
///
/// Continuations registered before settlement are held and invoked in
/// registration order when [`settle`](MockDeferred::settle) is called;
/// continuations registered afterwards are invoked immediately with a
/// clone of the settled value. Calls to both capabilities are counted so
/// tests can assert how a dispatcher used them.
pub struct MockDeferred<T> {
    state: Mutex<State<T>>,
    done_calls: AtomicUsize,
    promise_calls: AtomicUsize,
}

enum State<T> {
    Pending(Vec<Done<T>>),
    Settled(T),
}

impl<T> MockDeferred<T> {
    /// Create a mock that has not settled yet.
    pub fn new() -> Self {
        MockDeferred {
            state: Mutex::new(State::Pending(Vec::new())),
            done_calls: AtomicUsize::new(0),
            promise_calls: AtomicUsize::new(0),
        }
    }

    /// Settle with `value`, invoking every registered continuation in
    /// registration order.
    ///
    /// # Panics
    ///
    /// Panics if the mock has already settled.
    pub fn settle(&self, value: T)
    where
        T: Clone,
    {
        let mut state = self.state.lock().unwrap();
        match mem::replace(&mut *state, State::Settled(value.clone())) {
            State::Pending(continuations) => {
                // Run continuations outside the lock so they may register
                // more.
                drop(state);
                for continuation in continuations {
                    continuation(value.clone());
                }
            }
            State::Settled(_) => panic!("`MockDeferred` settled twice"),
        }
    }

    /// How many times the `done` capability has been invoked.
    pub fn done_calls(&self) -> usize {
        self.done_calls.load(Ordering::SeqCst)
    }

    /// How many times the `promise` capability has been invoked.
    pub fn promise_calls(&self) -> usize {
        self.promise_calls.load(Ordering::SeqCst)
    }
}

impl<T> Default for MockDeferred<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for MockDeferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockDeferred")
            .field("done_calls", &self.done_calls)
            .field("promise_calls", &self.promise_calls)
            .finish()
    }
}

impl<T: Clone + Send + 'static> Deferred for MockDeferred<T> {
    type Output = T;

    fn done(&self, continuation: Done<T>) {
        self.done_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        match &mut *state {
            State::Pending(continuations) => continuations.push(continuation),
            State::Settled(value) => {
                let value = value.clone();
                drop(state);
                continuation(value);
            }
        }
    }

    fn promise(&self) -> Promise<T> {
        self.promise_calls.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = oneshot::channel();
        self.done(Box::new(move |value| {
            let _ = tx.send(value);
        }));
        Promise::from(rx)
    }
}
