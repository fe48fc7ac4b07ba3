use super::Error;

/// Error when the store rejects or fails to run a statement.
///
/// This covers:
/// - Query text the store cannot parse
/// - Statements against a missing keyspace or table
/// - Pulling a cursor past its buffered page after the connection closed
///
/// Failures originating in a store client are wrapped here rather than
/// leaked raw.
#[derive(Debug)]
pub(super) struct ExecutionError {
    pub(super) kind: ExecutionErrorKind,
}

#[derive(Debug)]
pub(super) enum ExecutionErrorKind {
    Message(Box<str>),
    Source(Box<dyn std::error::Error + Send + Sync>),
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ExecutionErrorKind::Source(inner) => Some(inner.as_ref()),
            ExecutionErrorKind::Message(_) => None,
        }
    }
}

impl core::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ExecutionErrorKind::Message(message) => {
                write!(f, "execution failed: {}", message)
            }
            ExecutionErrorKind::Source(inner) => {
                // Display the error and walk its source chain
                write!(f, "execution failed: {}", inner)?;
                let mut source = inner.source();
                while let Some(err) = source {
                    write!(f, ": {}", err)?;
                    source = err.source();
                }
                Ok(())
            }
        }
    }
}

impl Error {
    /// Creates an execution error with a message describing the failure.
    pub fn execution(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Execution(ExecutionError {
            kind: ExecutionErrorKind::Message(message.into().into()),
        }))
    }

    /// Creates an execution error wrapping a store client error.
    ///
    /// This is the preferred way to convert store-specific errors into
    /// cassata errors.
    pub fn execution_source(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Execution(ExecutionError {
            kind: ExecutionErrorKind::Source(Box::new(err)),
        }))
    }

    /// Returns `true` if this error or any of its causes is an execution
    /// error.
    pub fn is_execution(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::Execution(_)))
    }
}
