//! Gathering many outcomes without stopping at the first failure.
//!
//! Collecting into `Outcome<Vec<T>, E>` fails fast. When every failure is
//! worth reporting (validating a batch of records, say), feed the outcomes
//! to an [`Accumulator`] or use [`accumulate`] instead.
use crate::types::alloc_type::Vec;
use crate::types::{ErrorVec, Outcome};

/// Running tally of successes and failures.
///
/// # Examples
///
/// ```
/// use etl::{Accumulator, Outcome};
///
/// let mut acc = Accumulator::new();
/// acc.push(Outcome::<i32, &str>::success(1));
/// acc.push(Outcome::failure("bad row 2"));
/// acc.push(Outcome::failure("bad row 3"));
///
/// assert_eq!(acc.error_count(), 2);
/// let errors = acc.finish().into_err().unwrap();
/// assert_eq!(errors.as_slice(), &["bad row 2", "bad row 3"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator<T, E> {
    values: Vec<T>,
    errors: ErrorVec<E>,
}

impl<T, E> Default for Accumulator<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Accumulator<T, E> {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            errors: ErrorVec::new(),
        }
    }

    /// Records one outcome.
    #[inline]
    pub fn push(&mut self, outcome: Outcome<T, E>) {
        match outcome {
            Outcome::Ok(value) => self.values.push(value),
            Outcome::Err(error) => self.errors.push(error),
        }
    }

    /// Returns `true` if no failure has been recorded.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of successes recorded so far.
    #[inline]
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Number of failures recorded so far.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Failures recorded so far, in arrival order.
    #[inline]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// All successes, or all failures if there was at least one.
    pub fn finish(self) -> Outcome<Vec<T>, ErrorVec<E>> {
        if self.errors.is_empty() {
            Outcome::Ok(self.values)
        } else {
            Outcome::Err(self.errors)
        }
    }

    /// Both halves, regardless of whether anything failed.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, ErrorVec<E>) {
        (self.values, self.errors)
    }
}

impl<T, E> Extend<Outcome<T, E>> for Accumulator<T, E> {
    fn extend<I: IntoIterator<Item = Outcome<T, E>>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

impl<T, E> FromIterator<Outcome<T, E>> for Accumulator<T, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Collects every success, or every failure if any occurred.
///
/// # Examples
///
/// ```
/// use etl::{accumulate, Outcome};
///
/// let parsed = accumulate(["1", "x", "3", "y"].iter().map(|s| {
///     Outcome::from(s.parse::<i32>()).map_err(|_| format!("not a number: {s}"))
/// }));
///
/// let errors = parsed.into_err().unwrap();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0], "not a number: x");
/// ```
pub fn accumulate<T, E, I>(outcomes: I) -> Outcome<Vec<T>, ErrorVec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect::<Accumulator<T, E>>().finish()
}

/// Splits outcomes into successes and failures, keeping their order.
pub fn partition<T, E, I>(outcomes: I) -> (Vec<T>, ErrorVec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect::<Accumulator<T, E>>().into_parts()
}
