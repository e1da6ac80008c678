use crate::{fmt::LogItem, log_vec, Loggable, StatusCode};

/// An NT status code that indicates a non-success condition.
///
/// Obtained through [`StatusCode::as_error`] or [`StatusCode::to_result`].
/// Its [`Display`](core::fmt::Display) output is exactly the symbolic name
/// of the code, e.g. `TIMEOUT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NtStatusError {
    code: StatusCode,
}

impl NtStatusError {
    pub(crate) const fn new(code: StatusCode) -> Self {
        Self { code }
    }

    /// The status code that caused this error.
    pub const fn code(&self) -> StatusCode {
        self.code
    }

    /// The symbolic name of the status code that caused this error.
    pub const fn name(&self) -> &'static str {
        self.code.name()
    }
}

impl core::fmt::Display for NtStatusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::error::Error for NtStatusError {}

impl From<NtStatusError> for StatusCode {
    fn from(value: NtStatusError) -> Self {
        value.code
    }
}

impl Loggable for NtStatusError {
    fn as_log(&self) -> Vec<LogItem> {
        log_vec![
            (0, "NT status error"),
            (1, "Name", self.name()),
            (1, "Code", format!("0x{:08X}", self.code.value()))
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_name() {
        let error = StatusCode::ACCESS_DENIED.as_error().unwrap();

        assert_eq!(error.to_string(), "ACCESS_DENIED");
        assert_eq!(error.name(), "ACCESS_DENIED");
        assert_eq!(error.code(), StatusCode::ACCESS_DENIED);
    }

    #[test]
    fn has_no_source() {
        use std::error::Error;

        let error = StatusCode::SHARING_VIOLATION.as_error().unwrap();
        assert!(error.source().is_none());
    }

    #[test]
    fn boxes_into_dyn_error() {
        fn open() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            StatusCode::OBJECT_NAME_NOT_FOUND.to_result()?;
            Ok(())
        }

        let error = open().unwrap_err();
        assert_eq!(error.to_string(), "OBJECT_NAME_NOT_FOUND");

        let error = error.downcast::<NtStatusError>().unwrap();
        assert_eq!(StatusCode::from(*error), StatusCode::OBJECT_NAME_NOT_FOUND);
    }
}
