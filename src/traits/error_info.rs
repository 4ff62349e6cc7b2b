use crate::types::alloc_type::{Arc, Box, Rc, String, ToOwned};

/// Capability contract for anything that can describe a failure.
///
/// `msg` is the short, one-line message; `info` is the detailed report and
/// falls back to `msg` when there is nothing more to say. Implementations
/// must be deterministic and free of side effects.
///
/// The contract is structural: any type can implement it, and smart
/// pointers to implementors implement it too, so an `Outcome` can carry a
/// plain value, a `Box<dyn ErrorInfo>` or a [`SharedError`] alike.
///
/// # Examples
///
/// ```
/// use etl::traits::ErrorInfo;
///
/// struct Timeout {
///     millis: u64,
/// }
///
/// impl ErrorInfo for Timeout {
///     fn msg(&self) -> String {
///         "timed out".to_string()
///     }
///
///     fn info(&self) -> String {
///         format!("timed out after {}ms", self.millis)
///     }
/// }
///
/// fn describe(err: &dyn ErrorInfo) -> String {
///     err.info()
/// }
///
/// assert_eq!(describe(&Timeout { millis: 250 }), "timed out after 250ms");
/// assert_eq!(describe(&etl::Error::create("boom")), "boom");
/// ```
pub trait ErrorInfo {
    /// Short message.
    fn msg(&self) -> String;

    /// Detailed message; equal to [`msg`](Self::msg) when no detail exists.
    fn info(&self) -> String;
}

/// Reference-counted, thread-shareable handle to any [`ErrorInfo`].
pub type SharedError = Arc<dyn ErrorInfo + Send + Sync>;

/// Owned handle to any [`ErrorInfo`].
pub type BoxedError = Box<dyn ErrorInfo>;

impl ErrorInfo for str {
    #[inline]
    fn msg(&self) -> String {
        self.to_owned()
    }

    #[inline]
    fn info(&self) -> String {
        self.to_owned()
    }
}

impl ErrorInfo for String {
    #[inline]
    fn msg(&self) -> String {
        self.clone()
    }

    #[inline]
    fn info(&self) -> String {
        self.clone()
    }
}

macro_rules! forward_error_info {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: ErrorInfo + ?Sized> ErrorInfo for $ptr {
                #[inline]
                fn msg(&self) -> String {
                    (**self).msg()
                }

                #[inline]
                fn info(&self) -> String {
                    (**self).info()
                }
            }
        )*
    };
}

forward_error_info!(&T, Box<T>, Rc<T>, Arc<T>);
