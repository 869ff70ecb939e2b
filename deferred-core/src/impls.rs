use std::sync::Arc;

use crate::future::{Deferred, Done};
use crate::promise::Promise;

impl<D: ?Sized + Deferred> Deferred for &D {
    type Output = D::Output;

    fn done(&self, continuation: Done<Self::Output>) {
        (**self).done(continuation)
    }

    fn promise(&self) -> Promise<Self::Output> {
        (**self).promise()
    }
}

impl<D: ?Sized + Deferred> Deferred for Box<D> {
    type Output = D::Output;

    fn done(&self, continuation: Done<Self::Output>) {
        (**self).done(continuation)
    }

    fn promise(&self) -> Promise<Self::Output> {
        (**self).promise()
    }
}

impl<D: ?Sized + Deferred> Deferred for Arc<D> {
    type Output = D::Output;

    fn done(&self, continuation: Done<Self::Output>) {
        (**self).done(continuation)
    }

    fn promise(&self) -> Promise<Self::Output> {
        (**self).promise()
    }
}
