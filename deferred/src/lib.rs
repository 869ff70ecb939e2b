//! A minimal protocol for deferred, possibly never-settling values.
//!
//! Three ideas make up this crate:
//!
//! - [`Deferred`], the capability surface a value exposes to be treated
//!   as a deferred value: registering a continuation
//!   ([`Deferred::done`]) and adapting into Rust's own future type
//!   ([`Deferred::promise`]).
//! - The dispatchers [`done`] and [`promise`], which forward uniformly to
//!   any implementation, concrete or `dyn`, without requiring a common
//!   base type.
//! - [`NEVER`], the canonical value that permanently does not settle,
//!   recognized by identity through [`is_never`].
//!
//! The protocol deliberately stops there: combinators, executors and
//! channels are producers and consumers of [`Deferred`] values, not part
//! of the contract.
//!
//! # Examples
//!
//! ```
//! use deferred::{done, is_never, Unsettled, NEVER};
//!
//! // The sentinel is recognized by identity, nothing else is.
//! assert!(is_never(&NEVER));
//! assert!(!is_never(&42));
//!
//! // Registering a continuation with it is a permanent no-op; the
//! // continuation's argument type guarantees it can never run.
//! done(Box::new(|value: Unsettled| value.into_any()), &NEVER);
//! ```

#![warn(missing_docs)]

pub use deferred_core::{Deferred, Done, Never, Promise, Unsettled, NEVER};

pub use deferred_core::{done, is_never, promise};

/// The dispatch functions, re-exported for qualified use.
pub mod dispatch {
    pub use deferred_core::dispatch::{done, promise};
}

/// The never sentinel and its predicate, re-exported for qualified use.
pub mod never {
    pub use deferred_core::never::{is_never, Never, Unsettled, NEVER};
}
