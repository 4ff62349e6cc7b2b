//! Call-site capture and error construction macros.
//!
//! - [`macro@crate::runtime_info`] - Captures a [`SourceLocation`](crate::types::SourceLocation)
//!   for the current file, line and enclosing function.
//! - [`macro@crate::located`] - Builds a located [`Error`](crate::types::Error) from a format
//!   string in one step.
//! - [`macro@crate::impl_error_info`] - Implements [`ErrorInfo`](crate::traits::ErrorInfo)
//!   for a `Display` type.
//!
//! # Examples
//!
//! ```
//! use etl::{located, runtime_info, Error, Outcome};
//!
//! fn open(path: &str) -> Outcome<(), Error> {
//!     if path.is_empty() {
//!         return Outcome::failure(located!("empty path"));
//!     }
//!     Outcome::success(())
//! }
//!
//! let err = open("").err().unwrap();
//! assert!(err.info().starts_with("Error: empty path\nFunction: "));
//! assert!(err.info().contains("::open"));
//!
//! let loc = runtime_info!();
//! assert_eq!(loc.line(), line!() - 1);
//! ```

/// Captures the current file, line and enclosing function as a
/// [`SourceLocation`](crate::types::SourceLocation).
///
/// The function is reported by its fully-qualified path, for example
/// `my_app::net::connect`. Closure frames are folded into the named
/// function that contains them.
///
/// # Examples
///
/// ```
/// use etl::{runtime_info, Error};
///
/// fn load() -> Error {
///     Error::located("config missing", runtime_info!())
/// }
///
/// let err = load();
/// assert!(err.info().contains("Function: "));
/// assert!(err.info().contains("::load"));
/// ```
#[macro_export]
macro_rules! runtime_info {
    () => {{
        fn __etl_marker() {}
        fn __etl_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::types::SourceLocation::new(
            file!(),
            line!(),
            $crate::types::source_location::enclosing_function(__etl_type_name_of(__etl_marker)),
        )
    }};
}

/// Builds an [`Error`](crate::types::Error) with a location report from a
/// format string.
///
/// # Examples
///
/// ```
/// use etl::located;
///
/// let attempts = 3;
/// let err = located!("gave up after {} attempts", attempts);
/// assert_eq!(err.msg(), "gave up after 3 attempts");
/// assert!(err.has_location());
/// ```
#[macro_export]
macro_rules! located {
    ($($arg:tt)+) => {
        $crate::types::Error::located(
            $crate::types::alloc_type::format!($($arg)+),
            $crate::runtime_info!(),
        )
    };
}

/// Implements [`ErrorInfo`](crate::traits::ErrorInfo) for a type through
/// its `Display` implementation.
///
/// `{}` becomes `msg()` and `{:#}` becomes `info()`, so types whose
/// alternate form adds detail get a detailed report for free.
///
/// # Examples
///
/// ```
/// use etl::{impl_error_info, traits::ErrorInfo};
/// use std::fmt;
///
/// struct HttpError {
///     status: u16,
/// }
///
/// impl fmt::Display for HttpError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         if f.alternate() {
///             write!(f, "request failed with HTTP status {}", self.status)
///         } else {
///             write!(f, "HTTP {}", self.status)
///         }
///     }
/// }
///
/// impl_error_info!(HttpError);
///
/// let err = HttpError { status: 404 };
/// assert_eq!(err.msg(), "HTTP 404");
/// assert_eq!(err.info(), "request failed with HTTP status 404");
/// ```
#[macro_export]
macro_rules! impl_error_info {
    ($type:ty) => {
        impl $crate::traits::ErrorInfo for $type {
            fn msg(&self) -> $crate::types::alloc_type::String {
                $crate::types::alloc_type::format!("{}", self)
            }

            fn info(&self) -> $crate::types::alloc_type::String {
                $crate::types::alloc_type::format!("{:#}", self)
            }
        }
    };
}
