//! The canonical never-settling value.

use core::any::Any;

use crate::future::{Deferred, Done};
use crate::promise::Promise;

/// A value that can never exist.
///
/// `Unsettled` is the output type of [`NEVER`]: a computation that never
/// settles never produces a value, so its continuations take an argument
/// no caller can construct. This is a stable equivalent to the `!` type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Unsettled {}

impl Unsettled {
    /// Convert the `Unsettled` type into any other type.
    pub fn into_any<T>(self) -> T {
        match self {}
    }
}

/// The type of the [`NEVER`] sentinel.
///
/// No constructor is exposed, so [`NEVER`] is the only instance that can
/// ever exist; this is what lets [`is_never`] treat a dynamic type check
/// as an identity check.
#[derive(Debug)]
pub struct Never {
    _private: (),
}

/// The deferred value that never settles.
///
/// `NEVER` lives for the whole process and is never mutated. It is *a*
/// never-settling value rather than the only conforming one; any
/// implementation that never invokes its continuations is equally valid.
/// It is, however, the single instance [`is_never`] recognizes.
pub static NEVER: Never = Never { _private: () };

impl Deferred for Never {
    type Output = Unsettled;

    fn done(&self, continuation: Done<Unsettled>) {
        // No `Unsettled` value will ever exist to invoke it with.
        drop(continuation);
    }

    fn promise(&self) -> Promise<Unsettled> {
        Promise::never()
    }
}

/// Returns `true` iff `value` is the canonical [`NEVER`] sentinel.
///
/// Total over every `'static` type: primitives, closures, options,
/// trait objects and other never-settling [`Deferred`] implementations
/// all answer `false`, and nothing makes it panic. This answers "is this
/// specifically the canonical never value", not "will this ever settle".
///
/// # Examples
///
/// ```
/// use deferred_core::{is_never, NEVER};
///
/// assert!(is_never(&NEVER));
/// assert!(!is_never(&42));
/// assert!(!is_never(&"still pending"));
/// ```
pub fn is_never(value: &dyn Any) -> bool {
    value.is::<Never>()
}
