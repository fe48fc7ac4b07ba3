use super::{Assignments, Statement, TableRef};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table receiving the row
    pub into: TableRef,

    /// Column values for the new row, in field order
    pub values: Assignments,
}

impl Insert {
    pub fn new(into: impl Into<TableRef>) -> Self {
        Self {
            into: into.into(),
            values: Assignments::default(),
        }
    }
}

impl Statement {
    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }

    /// Attempts to return a reference to an inner [`Insert`].
    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Self::Insert(insert) => Some(insert),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Insert`].
    pub fn into_insert(self) -> Option<Insert> {
        match self {
            Self::Insert(insert) => Some(insert),
            _ => None,
        }
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
