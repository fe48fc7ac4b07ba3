use super::Statement;

/// Verbatim query text, passed to the store untranslated.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub text: String,
}

impl From<&str> for Raw {
    fn from(src: &str) -> Self {
        Self {
            text: src.to_string(),
        }
    }
}

impl From<String> for Raw {
    fn from(src: String) -> Self {
        Self { text: src }
    }
}

impl Statement {
    pub fn is_raw(&self) -> bool {
        matches!(self, Statement::Raw(_))
    }

    /// Attempts to return a reference to an inner [`Raw`].
    pub fn as_raw(&self) -> Option<&Raw> {
        match self {
            Self::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Raw`].
    pub fn into_raw(self) -> Option<Raw> {
        match self {
            Self::Raw(raw) => Some(raw),
            _ => None,
        }
    }
}

impl From<Raw> for Statement {
    fn from(value: Raw) -> Self {
        Statement::Raw(value)
    }
}
