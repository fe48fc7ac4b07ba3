use super::Error;

/// Error when the endpoint or request configuration is incomplete.
///
/// This occurs when:
/// - A required endpoint field is missing (keyspace, table for table-bound operations)
/// - An operation's required request field is absent (field maps, counter slots, batch slots)
/// - An unknown result format name is configured
///
/// These errors are caught during endpoint validation or statement building,
/// before anything reaches the store.
#[derive(Debug)]
pub(super) struct InvalidConfigurationError {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidConfigurationError {}

impl core::fmt::Display for InvalidConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfiguration(
            InvalidConfigurationError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error or any of its causes is an invalid
    /// configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidConfiguration(_)))
    }
}
