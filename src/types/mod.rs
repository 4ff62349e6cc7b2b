//! Outcome, Error and SourceLocation.
//!
//! # Examples
//!
//! ```
//! use etl::{Error, Outcome, SourceLocation};
//!
//! let loc = SourceLocation::new("db.rs", 42, "app::db::connect");
//! let result: Outcome<(), Error> = Outcome::failure(Error::located("connection refused", loc));
//!
//! println!("{:#}", result.err().unwrap());
//! // Error: connection refused
//! // Function: app::db::connect
//! // File: db.rs:42
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod alloc_type;
pub mod error;
pub mod outcome;
pub mod owned;
pub mod source_location;

pub use accumulator::*;
pub use error::*;
pub use outcome::*;
pub use owned::*;
pub use source_location::SourceLocation;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, the common case when a batch
/// fails on a single item.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
