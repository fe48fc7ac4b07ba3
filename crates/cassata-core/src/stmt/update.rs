use super::{Assignments, Filter, Statement, TableRef};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table holding the rows
    pub table: TableRef,

    /// Column assignments
    pub assignments: Assignments,

    /// Which rows to update
    pub filter: Filter,
}

impl Update {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            assignments: Assignments::default(),
            filter: Filter::default(),
        }
    }
}

impl Statement {
    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }

    /// Attempts to return a reference to an inner [`Update`].
    pub fn as_update(&self) -> Option<&Update> {
        match self {
            Self::Update(update) => Some(update),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Update`].
    pub fn into_update(self) -> Option<Update> {
        match self {
            Self::Update(update) => Some(update),
            _ => None,
        }
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
