//! The two-alternative [`Outcome`] type.
//!
//! An [`Outcome<T, E>`] is either a success carrying `T` or a failure
//! carrying `E`. The enum tag is the only discriminant, so the accessor
//! pairs (`is_ok`/`ok`, `is_err`/`err`) can never disagree.
//!
//! Extraction is total: [`Outcome::ok`] and [`Outcome::err`] hand back an
//! `Option`, so asking for the wrong alternative yields `None` instead of
//! a panic.
use core::fmt::{self, Display};

/// Success value or failure value, never both.
///
/// # Examples
///
/// ```
/// use etl::{Error, Outcome};
///
/// fn divide(a: i32, b: i32) -> Outcome<i32, Error> {
///     if b == 0 {
///         return Outcome::failure(Error::create("division by zero"));
///     }
///     Outcome::success(a / b)
/// }
///
/// let half = divide(10, 2);
/// assert!(half.is_ok());
/// assert_eq!(half.ok(), Some(5));
///
/// let broken = divide(10, 0);
/// assert!(broken.is_err());
/// assert_eq!(broken.err().unwrap().msg(), "division by zero");
/// ```
#[must_use = "this `Outcome` may be a failure, which should be handled"]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    /// Success.
    Ok(T),
    /// Failure.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a success value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Ok(value)
    }

    /// Wraps a failure value.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` for a success.
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for a failure.
    #[must_use]
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns a copy of the success value, or `None` for a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use etl::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("nope");
    /// assert_eq!(failed.ok(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn ok(&self) -> Option<T>
    where
        T: Clone,
    {
        self.as_ok().cloned()
    }

    /// Returns a copy of the failure value, or `None` for a success.
    #[must_use]
    #[inline]
    pub fn err(&self) -> Option<E>
    where
        E: Clone,
    {
        self.as_err().cloned()
    }

    /// Borrows the success value.
    #[must_use]
    #[inline]
    pub const fn as_ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrows the failure value.
    #[must_use]
    #[inline]
    pub const fn as_err(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Consumes the outcome, returning the success value.
    #[must_use]
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Consumes the outcome, returning the failure value.
    #[must_use]
    #[inline]
    pub fn into_err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the success value, carrying a failure through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use etl::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::success(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Ok(42));
    ///
    /// let failed = Outcome::<i32, &str>::failure("bad").map(|x| x * 2);
    /// assert_eq!(failed, Outcome::Err("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the failure value, carrying a success through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use etl::Outcome;
    ///
    /// let failed = Outcome::<i32, u16>::failure(404).map_err(|code| format!("HTTP {code}"));
    /// assert_eq!(failed.err().as_deref(), Some("HTTP 404"));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Transforms whichever alternative is present.
    #[inline]
    pub fn bimap<U, G, F, H>(self, on_ok: F, on_err: H) -> Outcome<U, G>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(on_ok(value)),
            Self::Err(error) => Outcome::Err(on_err(error)),
        }
    }

    /// Chains a fallible step onto a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use etl::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half).and_then(half), Outcome::Ok(2));
    /// assert_eq!(Outcome::success(6).and_then(half).and_then(half), Outcome::Err("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Attempts to recover from a failure.
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Returns the success value or `default`.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure.
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Calls `f` with the success value, if any, and returns `self`.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the failure value, if any, and returns `self`.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Converts into a standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

/// Collects successes until the first failure, which is returned instead.
///
/// # Examples
///
/// ```
/// use etl::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Ok(vec![1, 2]));
///
/// let first_failure: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_failure, Outcome::Err("a"));
/// ```
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut failure = None;
        let collected: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Self::Err(error),
            None => Self::Ok(collected),
        }
    }
}

impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value})"),
            Self::Err(error) => write!(f, "Err({error})"),
        }
    }
}
