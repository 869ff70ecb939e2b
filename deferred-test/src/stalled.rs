use core::marker::PhantomData;

use deferred_core::{Deferred, Done, Promise};

/// A deferred value that never settles.
///
/// Unlike the canonical `NEVER` sentinel this type is freely
/// constructible, which makes it the right tool for checking that
/// identity-sensitive code does not confuse "never settles" with "is the
/// canonical never value".
#[derive(Debug)]
pub struct Stalled<T> {
    _marker: PhantomData<T>,
}

impl<T> Stalled<T> {
    /// Create a new never-settling value.
    pub fn new() -> Self {
        Stalled {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Stalled<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Deferred for Stalled<T> {
    type Output = T;

    fn done(&self, continuation: Done<T>) {
        drop(continuation);
    }

    fn promise(&self) -> Promise<T> {
        Promise::never()
    }
}
