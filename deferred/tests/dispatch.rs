use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use deferred::{dispatch, Deferred, Done};
use deferred_test::MockDeferred;

/// Records the raw data pointer of every continuation forwarded to it.
#[derive(Default)]
struct Recording {
    forwarded: Mutex<Vec<usize>>,
}

impl Deferred for Recording {
    type Output = u32;

    fn done(&self, continuation: Done<u32>) {
        let data = &*continuation as *const (dyn FnOnce(u32) + Send) as *const () as usize;
        self.forwarded.lock().unwrap().push(data);
    }
}

#[test]
fn forwards_the_continuation_unchanged() {
    let target = Recording::default();
    // Capture something so the closure is not zero-sized and the box
    // points at a real allocation.
    let payload = String::from("continuation");
    let continuation: Done<u32> = Box::new(move |_| drop(payload));
    let expected = &*continuation as *const (dyn FnOnce(u32) + Send) as *const () as usize;

    dispatch::done(continuation, &target);

    assert_eq!(*target.forwarded.lock().unwrap(), vec![expected]);
}

#[test]
fn dispatches_through_a_trait_object() {
    let mock = MockDeferred::new();
    let seen = Arc::new(AtomicUsize::new(0));
    let observed = Arc::clone(&seen);

    let target: &dyn Deferred<Output = u32> = &mock;
    dispatch::done(
        Box::new(move |value| {
            observed.store(value as usize, Ordering::SeqCst);
        }),
        target,
    );

    assert_eq!(mock.done_calls(), 1);
    mock.settle(7);
    assert_eq!(seen.load(Ordering::SeqCst), 7);
}

#[test]
fn dispatches_through_forwarding_impls() {
    let mock = Arc::new(MockDeferred::new());
    let hits = Arc::new(AtomicUsize::new(0));
    let observed = Arc::clone(&hits);

    dispatch::done(
        Box::new(move |value: u32| {
            observed.fetch_add(value as usize, Ordering::SeqCst);
        }),
        &mock,
    );

    mock.settle(5);
    assert_eq!(hits.load(Ordering::SeqCst), 5);
}

#[test]
fn target_panics_reach_the_caller() {
    struct Exploding;

    impl Deferred for Exploding {
        type Output = u32;

        fn done(&self, _continuation: Done<u32>) {
            panic!("registration failed");
        }
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        dispatch::done(Box::new(|_| {}), &Exploding);
    }));

    assert!(result.is_err());
}
