use crate::stmt::RowCursor;

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a cursor of rows
    Cursor(RowCursor),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn cursor(rows: impl Into<RowCursor>) -> Self {
        Self {
            rows: Rows::cursor(rows),
        }
    }

    pub fn empty_cursor() -> Self {
        Self {
            rows: Rows::Cursor(RowCursor::default()),
        }
    }
}

impl Rows {
    pub fn cursor(rows: impl Into<RowCursor>) -> Self {
        Self::Cursor(rows.into())
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_cursor(&self) -> bool {
        matches!(self, Self::Cursor(_))
    }

    #[track_caller]
    pub fn into_count(self) -> u64 {
        match self {
            Rows::Count(count) => count,
            _ => panic!("expected `Count`, found a cursor"),
        }
    }

    #[track_caller]
    pub fn into_cursor(self) -> RowCursor {
        match self {
            Self::Cursor(rows) => rows,
            Self::Count(count) => panic!("expected `Cursor`, found count {count}"),
        }
    }
}
