use super::{Filter, OrderBy, Statement, TableRef};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table to scan
    pub from: TableRef,

    /// The projection part of the query
    pub columns: Columns,

    /// Query filter
    pub filter: Filter,

    /// Optional sort clause
    pub order_by: Option<OrderBy>,

    /// Optional row cap
    pub limit: Option<u64>,
}

/// Projection of a select or delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Columns {
    /// Every column of the table
    #[default]
    All,

    /// A named subset, in projection order
    Named(Vec<String>),
}

impl Select {
    /// A full-table scan with no filter, ordering, or limit.
    pub fn all(from: impl Into<TableRef>) -> Self {
        Self {
            from: from.into(),
            columns: Columns::All,
            filter: Filter::default(),
            order_by: None,
            limit: None,
        }
    }

    /// A scan restricted to a single named column.
    pub fn column(from: impl Into<TableRef>, column: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            columns: Columns::Named(vec![column.into()]),
            filter: Filter::default(),
            order_by: None,
            limit: None,
        }
    }
}

impl Columns {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Statement {
    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    /// Attempts to return a reference to an inner [`Select`].
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Select`].
    pub fn into_select(self) -> Option<Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
