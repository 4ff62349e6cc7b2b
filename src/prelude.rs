//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use etl::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`located!`], [`runtime_info!`]
//! - **Types**: [`Outcome`], [`Error`], [`SourceLocation`], [`OwnedOutcome`]
//! - **Traits**: [`ErrorInfo`], [`OutcomeExt`]
//!
//! # Examples
//!
//! ```
//! use etl::prelude::*;
//!
//! fn read_port(raw: &str) -> Outcome<u16, Error> {
//!     raw.parse::<u16>().into_located_error(runtime_info!())
//! }
//!
//! assert_eq!(read_port("8080").ok(), Some(8080));
//! assert!(read_port("http").err().unwrap().has_location());
//! ```

// Macros
pub use crate::{located, runtime_info};

// Core types
pub use crate::types::{Error, Outcome, OwnedOutcome, SourceLocation};

// Traits
pub use crate::traits::{ErrorInfo, OutcomeExt};

#[cfg(feature = "tracing")]
pub use crate::trace::TraceOutcome;
