use super::Error;

/// Error when a request names an operation outside the supported set.
///
/// This occurs when:
/// - A request-level override carries an operation name that does not parse
/// - An endpoint is configured with an operation the adapter does not implement
///
/// The message always names the offending value so callers can see exactly
/// what was requested.
#[derive(Debug)]
pub(super) struct UnsupportedOperationError {
    pub(super) value: Box<str>,
}

impl std::error::Error for UnsupportedOperationError {}

impl core::fmt::Display for UnsupportedOperationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operation: {}", self.value)
    }
}

impl Error {
    /// Creates an unsupported operation error naming the rejected value.
    pub fn unsupported_operation(value: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperation(
            UnsupportedOperationError {
                value: value.into().into(),
            },
        ))
    }

    /// Returns `true` if this error or any of its causes is an unsupported
    /// operation error.
    pub fn is_unsupported_operation(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::UnsupportedOperation(_)))
    }
}
