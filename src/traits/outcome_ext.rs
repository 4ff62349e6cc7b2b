use crate::types::alloc_type::ToString;
use crate::types::{Error, Outcome, SourceLocation};
use core::fmt::Display;

/// Bridges standard library `Result`s into [`Outcome`].
///
/// # Examples
///
/// ```
/// use etl::traits::OutcomeExt;
///
/// let parsed = "42".parse::<i32>().into_outcome();
/// assert_eq!(parsed.ok(), Some(42));
///
/// let failed = "x".parse::<i32>().into_error();
/// assert_eq!(failed.err().unwrap().msg(), "invalid digit found in string");
/// ```
pub trait OutcomeExt<T, E> {
    /// Converts into an [`Outcome`] without touching either side.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts into an [`Outcome`] whose failure is an [`Error`] built
    /// from the original error's `Display` output.
    fn into_error(self) -> Outcome<T, Error>
    where
        E: Display;

    /// Like [`into_error`](Self::into_error), with a location report.
    fn into_located_error(self, location: SourceLocation) -> Outcome<T, Error>
    where
        E: Display;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }

    #[inline]
    fn into_error(self) -> Outcome<T, Error>
    where
        E: Display,
    {
        self.into_outcome().map_err(|e| Error::create(e.to_string()))
    }

    #[inline]
    fn into_located_error(self, location: SourceLocation) -> Outcome<T, Error>
    where
        E: Display,
    {
        self.into_outcome()
            .map_err(|e| Error::located(e.to_string(), location))
    }
}
