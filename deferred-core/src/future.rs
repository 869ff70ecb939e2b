//! The [`Deferred`] trait.

use futures_channel::oneshot;

use crate::promise::Promise;

/// A continuation registered through [`Deferred::done`].
///
/// Invoked with the eventual value if the underlying computation settles,
/// and dropped unseen if it never does.
pub type Done<T> = Box<dyn FnOnce(T) + Send>;

/// A deferred, possibly never-settling value.
///
/// A conforming implementation exposes two capabilities, and both must
/// observe the same eventual outcome: a value that settles with `v`
/// invokes every registered continuation with `v` and yields `v` from its
/// [`Promise`], while a value that never settles invokes nothing and
/// yields a promise that stays pending indefinitely.
///
/// When and on which thread continuations run is owned entirely by the
/// implementation; the usual contract is registration order, at most once
/// per registration. Registration cannot be undone.
pub trait Deferred {
    /// The type of value this computation eventually produces.
    ///
    /// Continuations may be invoked from whichever thread the
    /// implementation settles on, so the value must be sendable.
    type Output: Send + 'static;

    /// Register `continuation` to be invoked with the eventual value.
    ///
    /// Registration must not invoke `continuation` on behalf of a value
    /// that has not settled yet, and must never invoke it at all for a
    /// value that never settles.
    fn done(&self, continuation: Done<Self::Output>);

    /// Adapt this value into a [`Promise`] settling with the same outcome
    /// that continuations registered through [`done`](Deferred::done)
    /// observe.
    ///
    /// The default implementation funnels `done` through a oneshot
    /// channel and is therefore consistent by construction. Implementations
    /// that override it take on the consistency obligation themselves.
    fn promise(&self) -> Promise<Self::Output> {
        let (tx, rx) = oneshot::channel();
        self.done(Box::new(move |value| {
            let _ = tx.send(value);
        }));
        Promise::from(rx)
    }
}
