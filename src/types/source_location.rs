//! Call-site information attached to located errors.
//!
//! A [`SourceLocation`] is normally produced by the [`runtime_info!`](crate::runtime_info)
//! macro, which records the file, line and fully-qualified path of the enclosing
//! function. [`SourceLocation::caller`] is the `#[track_caller]` alternative for
//! helpers that want the location of *their* caller instead.
use crate::types::alloc_type::{String, ToOwned};
use core::fmt::{self, Display};

/// Placeholder used when the enclosing function cannot be named.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// Immutable file/line/function triple.
///
/// There is no `Default` implementation: every location has
/// to be captured explicitly at its use site.
///
/// # Examples
///
/// ```
/// use etl::SourceLocation;
///
/// let loc = SourceLocation::new("src/math.rs", 12, "app::math::divide");
/// assert_eq!(loc.file(), "src/math.rs");
/// assert_eq!(loc.line(), 12);
/// assert_eq!(loc.function(), "app::math::divide");
/// assert_eq!(loc.short_function(), "divide");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: String,
    line: u32,
    function: String,
}

impl SourceLocation {
    /// Builds a location from its three parts.
    #[inline]
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Captures the file and line of the caller through `#[track_caller]`.
    ///
    /// Rust has no native way to name the calling function, so it has to
    /// be supplied by the caller. Pass an empty string to record
    /// [`UNKNOWN_FUNCTION`].
    ///
    /// # Examples
    ///
    /// ```
    /// use etl::SourceLocation;
    ///
    /// let loc = SourceLocation::caller("main");
    /// assert!(loc.file().ends_with(".rs"));
    /// assert_eq!(loc.function(), "main");
    /// ```
    #[track_caller]
    pub fn caller(function: &str) -> Self {
        let location = core::panic::Location::caller();
        let function = if function.is_empty() {
            UNKNOWN_FUNCTION
        } else {
            function
        };
        Self::new(location.file(), location.line(), function)
    }

    /// Name of the file where the location was captured.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number where the location was captured.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Function name as captured, usually a fully-qualified path.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Last path segment of [`function`](Self::function).
    #[inline]
    pub fn short_function(&self) -> &str {
        short_name(&self.function)
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.function, self.file, self.line)
    }
}

fn short_name(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Turns the `type_name` of a marker fn nested in the caller into the
/// caller's path. Used by [`runtime_info!`](crate::runtime_info).
#[doc(hidden)]
pub fn enclosing_function(marker_path: &str) -> String {
    let mut path = marker_path
        .strip_suffix("::__etl_marker")
        .unwrap_or(marker_path);
    // Closures show up as `{{closure}}` segments. Report the named fn around them.
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    if path.is_empty() {
        return UNKNOWN_FUNCTION.to_owned();
    }
    path.to_owned()
}
