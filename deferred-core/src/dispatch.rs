//! Uniform dispatch over any [`Deferred`] implementation.
//!
//! These free functions are thin, synchronous forwarders with no state of
//! their own; they never observe the value being produced. Conformance is
//! checked statically: a value without the required capability is rejected
//! at the call boundary by the [`Deferred`] bound rather than failing
//! somewhere inside generic code.

use crate::future::{Deferred, Done};
use crate::promise::Promise;

/// Register `continuation` with `future`.
///
/// Forwards the continuation unchanged, exactly once, to the target's
/// [`Deferred::done`], without wrapping or delaying it. Whatever the
/// target does during registration, including panicking, propagates to
/// the caller untouched.
pub fn done<D>(continuation: Done<D::Output>, future: &D)
where
    D: Deferred + ?Sized,
{
    future.done(continuation)
}

/// Adapt `future` into a [`Promise`].
///
/// Returns exactly what the target's [`Deferred::promise`] returns,
/// unmodified. For a target that never settles the promise stays pending
/// on every poll; it does not degrade into an error or a default value.
///
/// # Examples
///
/// ```
/// use deferred_core::{promise, NEVER};
///
/// // Implements `std::future::Future` and stays pending forever.
/// let adapted = promise(&NEVER);
/// # drop(adapted);
/// ```
pub fn promise<D>(future: &D) -> Promise<D::Output>
where
    D: Deferred + ?Sized,
{
    future.promise()
}
