/// A table reference, optionally qualified by a keyspace.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    /// Keyspace qualifier, when the statement names one
    pub keyspace: Option<String>,

    /// Table name
    pub name: String,
}

impl TableRef {
    pub fn new(keyspace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            keyspace: Some(keyspace.into()),
            name: name.into(),
        }
    }

    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            keyspace: None,
            name: name.into(),
        }
    }
}

impl From<&str> for TableRef {
    /// Parses `"keyspace.table"` into a qualified reference, anything else
    /// into an unqualified one.
    fn from(src: &str) -> Self {
        match src.split_once('.') {
            Some((keyspace, name)) => Self::new(keyspace, name),
            None => Self::unqualified(src),
        }
    }
}

impl From<String> for TableRef {
    fn from(src: String) -> Self {
        Self::from(src.as_str())
    }
}
