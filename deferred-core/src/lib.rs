//! The core protocol for deferred, possibly never-settling values.
//!
//! A *deferred* value is a computation that will, or may never, produce a
//! result asynchronously. This crate defines the capability surface such a
//! value exposes (registering a continuation, and adapting into Rust's own
//! future type), the dispatch functions that forward uniformly to any
//! implementation, and the canonical [`NEVER`] value that permanently does
//! not settle.
//!
//! Construction of concrete deferred values (combinators, channels,
//! executors) is deliberately left to other crates; anything implementing
//! [`Deferred`] participates.

#![warn(missing_docs)]

pub mod dispatch;
pub mod future;
pub mod never;

mod impls;
mod promise;

pub use self::dispatch::{done, promise};
pub use self::future::{Deferred, Done};
pub use self::never::{is_never, Never, Unsettled, NEVER};
pub use self::promise::Promise;
