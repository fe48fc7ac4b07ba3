use super::{Columns, Filter, Statement, TableRef};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table to delete from
    pub from: TableRef,

    /// Whole-row removal, or a named column to clear on matching rows
    pub columns: Columns,

    /// Which rows to delete
    pub filter: Filter,
}

impl Delete {
    /// Remove whole rows.
    pub fn rows(from: impl Into<TableRef>) -> Self {
        Self {
            from: from.into(),
            columns: Columns::All,
            filter: Filter::default(),
        }
    }

    /// Clear a single column on matching rows.
    pub fn column(from: impl Into<TableRef>, column: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            columns: Columns::Named(vec![column.into()]),
            filter: Filter::default(),
        }
    }
}

impl Statement {
    pub fn is_delete(&self) -> bool {
        matches!(self, Statement::Delete(_))
    }

    /// Attempts to return a reference to an inner [`Delete`].
    pub fn as_delete(&self) -> Option<&Delete> {
        match self {
            Self::Delete(delete) => Some(delete),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Delete`].
    pub fn into_delete(self) -> Option<Delete> {
        match self {
            Self::Delete(delete) => Some(delete),
            _ => None,
        }
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
