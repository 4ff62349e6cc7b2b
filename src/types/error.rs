//! The stock [`ErrorInfo`] implementation.
//!
//! An [`Error`] is a short message plus, when it was created with a
//! [`SourceLocation`], a pre-rendered multi-line report:
//!
//! ```text
//! Error: {msg}
//! Function: {function}
//! File: {file}:{line}
//! ```
use crate::traits::ErrorInfo;
use crate::types::alloc_type::{format, String, ToOwned};
use crate::types::SourceLocation;
use core::fmt::{self, Display};

/// Message-carrying error with an optional location report.
///
/// There is no public constructor; use [`Error::create`], [`Error::located`]
/// or the [`located!`](crate::located) macro.
///
/// # Examples
///
/// ```
/// use etl::{Error, SourceLocation};
///
/// let plain = Error::create("boom");
/// assert_eq!(plain.info(), plain.msg());
///
/// let located = Error::located("boom", SourceLocation::new("main.rs", 7, "app::main"));
/// assert_eq!(located.info(), "Error: boom\nFunction: app::main\nFile: main.rs:7");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    msg: String,
    info: String,
}

impl Error {
    /// Creates an error with only a message; `info()` equals `msg()`.
    #[inline]
    pub fn create(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            info: String::new(),
        }
    }

    /// Creates an error and renders the location report.
    ///
    /// The location is consumed; only the rendered report is kept.
    pub fn located(msg: impl Into<String>, location: SourceLocation) -> Self {
        let msg = msg.into();
        let info = format!(
            "Error: {}\nFunction: {}\nFile: {}:{}",
            msg,
            location.function(),
            location.file(),
            location.line()
        );
        Self { msg, info }
    }

    /// Short message.
    #[inline]
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Location report, or the message when no location was captured.
    #[inline]
    pub fn info(&self) -> &str {
        if self.info.is_empty() {
            &self.msg
        } else {
            &self.info
        }
    }

    /// Returns `true` if the error was created with a location.
    #[inline]
    pub fn has_location(&self) -> bool {
        !self.info.is_empty()
    }

    /// Replaces the short message.
    ///
    /// A location report rendered at construction is left as it was, so
    /// `info()` keeps the original message for located errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use etl::{Error, Outcome};
    ///
    /// let result: Outcome<i32, Error> = Outcome::failure(Error::create("not found"));
    /// let renamed = result.map_err(|mut err| {
    ///     err.set("user not found");
    ///     err
    /// });
    /// assert_eq!(renamed.err().unwrap().msg(), "user not found");
    /// ```
    #[inline]
    pub fn set(&mut self, msg: impl Into<String>) {
        self.msg = msg.into();
    }

    /// Consumes the error, returning the short message.
    #[inline]
    pub fn into_msg(self) -> String {
        self.msg
    }
}

impl ErrorInfo for Error {
    #[inline]
    fn msg(&self) -> String {
        self.msg.clone()
    }

    #[inline]
    fn info(&self) -> String {
        Error::info(self).to_owned()
    }
}

impl Display for Error {
    /// `{}` prints the message, `{:#}` prints the full report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.info())
        } else {
            f.write_str(&self.msg)
        }
    }
}

impl core::error::Error for Error {}

impl From<String> for Error {
    #[inline]
    fn from(msg: String) -> Self {
        Self::create(msg)
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(msg: &str) -> Self {
        Self::create(msg)
    }
}
