use crate::common::error::FanoutError;
use std::path::PathBuf;

/// Result alias used across the crate.
///
/// # Examples
///
/// ```
/// use fanout::common::result::FanoutResult;
/// use fanout::common::error::FanoutError;
///
/// fn example_function() -> FanoutResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> FanoutResult<()> {
///     Err(FanoutError::internal_error("Something went wrong"))
/// }
/// ```
pub type FanoutResult<T> = Result<T, FanoutError>;

/// Conversion helpers from `Option` into `FanoutResult`.
pub trait OptionExt<T> {
    /// Turn `None` into the given error.
    ///
    /// # Arguments
    ///
    /// * `error` - Error returned when the value is `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use fanout::common::result::{FanoutResult, OptionExt};
    /// use fanout::common::error::FanoutError;
    ///
    /// let none_value: Option<String> = None;
    /// let result: FanoutResult<String> =
    ///     none_value.ok_or_fanout(FanoutError::profile_not_found("work"));
    /// assert!(result.is_err());
    /// ```
    fn ok_or_fanout(self, error: FanoutError) -> FanoutResult<T>;

    /// Turn `None` into an internal error with the given message.
    ///
    /// # Arguments
    ///
    /// * `message` - Message of the resulting [`FanoutError::InternalError`]
    ///
    /// # Examples
    ///
    /// ```
    /// use fanout::common::result::{FanoutResult, OptionExt};
    ///
    /// let none_value: Option<String> = None;
    /// let result: FanoutResult<String> = none_value.ok_or_internal_error("Value not found");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_internal_error(self, message: impl Into<String>) -> FanoutResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_fanout(self, error: FanoutError) -> FanoutResult<T> {
        self.ok_or(error)
    }

    fn ok_or_internal_error(self, message: impl Into<String>) -> FanoutResult<T> {
        self.ok_or_else(|| FanoutError::internal_error(message))
    }
}

/// Conversion helpers from foreign `Result`s into `FanoutResult`.
pub trait ResultExt<T, E> {
    /// Map the error with a custom conversion.
    ///
    /// # Arguments
    ///
    /// * `f` - Conversion from the foreign error into a [`FanoutError`]
    ///
    /// # Examples
    ///
    /// ```
    /// use fanout::common::result::{FanoutResult, ResultExt};
    /// use fanout::common::error::FanoutError;
    ///
    /// let parsed: Result<u32, std::num::ParseIntError> = "x".parse();
    /// let result: FanoutResult<u32> =
    ///     parsed.map_fanout_err(|_| FanoutError::invalid_choice("x"));
    /// assert!(matches!(result, Err(FanoutError::InvalidChoice { .. })));
    /// ```
    fn map_fanout_err<F>(self, f: F) -> FanoutResult<T>
    where
        F: FnOnce(E) -> FanoutError;

    /// Wrap the error as a configuration error tied to `path`.
    ///
    /// # Arguments
    ///
    /// * `message` - What was being done with the configuration
    /// * `path` - Configuration file involved, if known
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use fanout::common::result::{FanoutResult, ResultExt};
    /// use fanout::common::error::FanoutError;
    ///
    /// let read: std::io::Result<String> =
    ///     Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
    /// let result: FanoutResult<String> =
    ///     read.with_config_error("Cannot read config", Some(PathBuf::from("/home/me/.fanout.json")));
    /// assert!(matches!(result, Err(FanoutError::ConfigError { .. })));
    /// ```
    fn with_config_error(self, message: impl Into<String>, path: Option<PathBuf>) -> FanoutResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_fanout_err<F>(self, f: F) -> FanoutResult<T>
    where
        F: FnOnce(E) -> FanoutError,
    {
        self.map_err(f)
    }

    fn with_config_error(self, message: impl Into<String>, path: Option<PathBuf>) -> FanoutResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| FanoutError::config_error_with_source(message, path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_ext_ok_or_fanout() {
        let some_value = Some("test".to_string());
        let result = some_value.ok_or_fanout(FanoutError::internal_error("error"));
        assert_eq!(result.unwrap(), "test");

        let none_value: Option<String> = None;
        let result = none_value.ok_or_fanout(FanoutError::profile_not_found("home"));
        assert!(matches!(result, Err(FanoutError::ProfileNotFound { .. })));
    }

    #[test]
    fn test_option_ext_ok_or_internal_error() {
        let none_value: Option<String> = None;
        let result = none_value.ok_or_internal_error("test error");

        if let Err(FanoutError::InternalError { message, .. }) = result {
            assert_eq!(message, "test error");
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_result_ext_with_config_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let result: Result<String, std::io::Error> = Err(io_error);
        let path = Some(PathBuf::from("/home/me/.fanout.json"));

        match result.with_config_error("cannot read config", path.clone()) {
            Err(FanoutError::ConfigError { path: p, source, .. }) => {
                assert_eq!(p, path);
                assert!(source.is_some());
            }
            _ => panic!("Expected ConfigError"),
        }
    }
}
