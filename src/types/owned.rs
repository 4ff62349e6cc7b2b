//! Outcomes whose success value is an exclusively owned heap allocation.
//!
//! The success handle is taken by move, so the caller's binding is no
//! longer usable once the outcome exists. [`Outcome::ok`] on such an
//! outcome never moves the allocation out: `Box<T>: Clone` allocates a
//! fresh, independent copy of the pointee. Use [`Outcome::into_ok`] to
//! take ownership back.
//!
//! `map`/`map_err` move their input, so they work unchanged on owned
//! payloads, including payloads that cannot be cloned at all.
use crate::types::alloc_type::Box;
use crate::types::Outcome;

/// Outcome carrying an exclusively owned success value.
pub type OwnedOutcome<T, E> = Outcome<Box<T>, E>;

impl<T, E> Outcome<Box<T>, E> {
    /// Takes ownership of an already boxed success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use etl::{Error, OwnedOutcome, Outcome};
    ///
    /// let mut slot = Some(Box::new(vec![1, 2, 3]));
    /// let outcome: OwnedOutcome<Vec<i32>, Error> = Outcome::from_owned(slot.take().unwrap());
    ///
    /// assert!(slot.is_none());
    /// assert!(outcome.is_ok());
    /// ```
    #[inline]
    pub fn from_owned(value: Box<T>) -> Self {
        Self::Ok(value)
    }

    /// Boxes `value` and stores it as the success value.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::Ok(Box::new(value))
    }

    /// Borrows the pointee of the success handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use etl::{OwnedOutcome, Outcome};
    ///
    /// let outcome: OwnedOutcome<String, &str> = Outcome::from_value("socket".to_string());
    /// assert_eq!(outcome.as_owned().map(String::as_str), Some("socket"));
    /// ```
    #[must_use]
    #[inline]
    pub fn as_owned(&self) -> Option<&T> {
        self.as_ok().map(|value| &**value)
    }
}
