//! Core traits.
//!
//! - [`ErrorInfo`]: the `{msg, info}` contract shared by every error type
//! - [`OutcomeExt`]: conversions from standard library `Result`s
//!
//! # Examples
//!
//! ```
//! use etl::traits::{ErrorInfo, OutcomeExt};
//!
//! let outcome = "7".parse::<u8>().into_error();
//! assert_eq!(outcome.ok(), Some(7));
//!
//! let boxed: etl::traits::BoxedError = Box::new(etl::Error::create("closed"));
//! assert_eq!(boxed.info(), "closed");
//! ```

pub mod error_info;
pub mod outcome_ext;

pub use error_info::{BoxedError, ErrorInfo, SharedError};
pub use outcome_ext::OutcomeExt;
