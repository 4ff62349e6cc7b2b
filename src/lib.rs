//! Explicit, panic-free error propagation built from a handful of small pieces.
//!
//! - [`Outcome`] - a success value or a failure value, with `Option`-returning
//!   accessors and transformations that rewrite one side only
//! - [`Error`] - a message plus an optional pre-rendered location report
//! - [`SourceLocation`] / [`runtime_info!`] - call-site capture
//! - [`ErrorInfo`](traits::ErrorInfo) - the `{msg, info}` contract any error type can meet
//!
//! # Examples
//!
//! ## Basic Outcome
//!
//! ```
//! use etl::{Error, Outcome};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, Error> {
//!     if b == 0 {
//!         Outcome::failure(Error::create("division by zero"))
//!     } else {
//!         Outcome::success(a / b)
//!     }
//! }
//!
//! assert_eq!(divide(10, 2).ok(), Some(5));
//! assert_eq!(divide(10, 0).ok(), None);
//! assert_eq!(divide(10, 0).err().unwrap().msg(), "division by zero");
//! ```
//!
//! ## Located Errors
//!
//! ```
//! use etl::{located, Outcome};
//!
//! let failed: Outcome<u8, etl::Error> = Outcome::failure(located!("sensor {} offline", 3));
//! let err = failed.err().unwrap();
//!
//! assert_eq!(err.msg(), "sensor 3 offline");
//! assert!(err.info().starts_with("Error: sensor 3 offline\nFunction: "));
//! ```
//!
//! ## Polymorphic Errors
//!
//! ```
//! use etl::traits::{ErrorInfo, SharedError};
//! use etl::{Error, Outcome};
//! use std::sync::Arc;
//!
//! let outcome: Outcome<(), SharedError> = Outcome::failure(Arc::new(Error::create("disk full")));
//! assert_eq!(outcome.err().unwrap().msg(), "disk full");
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Call-site capture and error construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability contracts and extension traits
pub mod traits;
/// Outcome, Error and SourceLocation
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use traits::{BoxedError, ErrorInfo, OutcomeExt, SharedError};
pub use types::{
    accumulate, partition, Accumulator, Error, ErrorVec, Outcome, OwnedOutcome, SourceLocation,
};
