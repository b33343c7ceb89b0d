use crate::common::error::HoundgenError;

/// Result alias used across the crate
///
/// # Examples
///
/// ```
/// use houndgen::common::result::HoundgenResult;
/// use houndgen::common::error::HoundgenError;
///
/// fn example_function() -> HoundgenResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> HoundgenResult<()> {
///     Err(HoundgenError::config_error("Something went wrong"))
/// }
/// ```
pub type HoundgenResult<T> = Result<T, HoundgenError>;

/// Conversion helpers from foreign `Result`s into `HoundgenResult`
pub trait ResultExt<T, E> {
    /// Wrap an I/O error as a `FileSystemError` tied to a path
    ///
    /// ```
    /// use houndgen::common::result::{HoundgenResult, ResultExt};
    /// use std::path::PathBuf;
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let mapped: HoundgenResult<String> =
    ///     result.with_filesystem_error("read failed", Some(PathBuf::from("config.json")));
    /// assert!(mapped.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> HoundgenResult<T>
    where
        E: Into<std::io::Error>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> HoundgenResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| HoundgenError::filesystem_error_with_source(message, path, e.into()))
    }
}
