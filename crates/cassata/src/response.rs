use crate::stmt::{Row, RowCursor, Value};

use indexmap::IndexMap;

/// The outcome of a dispatched request.
///
/// `metadata` is the request's metadata, echoed back unchanged. The result
/// itself lives in `body`; the request body never round-trips.
#[derive(Debug)]
pub struct Response {
    /// The originating request's metadata.
    pub metadata: IndexMap<String, Value>,

    /// The shaped result.
    pub body: Body,
}

/// A result body, shaped by the endpoint's response format.
#[derive(Debug)]
pub enum Body {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a cursor of rows
    Cursor(RowCursor),

    /// Operation result, fully materialized
    Rows(Vec<Row>),
}

impl Response {
    pub(crate) fn new(metadata: IndexMap<String, Value>, body: Body) -> Self {
        Self { metadata, body }
    }
}

impl Body {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_cursor(&self) -> bool {
        matches!(self, Self::Cursor(_))
    }

    pub fn is_rows(&self) -> bool {
        matches!(self, Self::Rows(_))
    }

    #[track_caller]
    pub fn into_count(self) -> u64 {
        match self {
            Body::Count(count) => count,
            Body::Cursor(_) => panic!("expected `Count`, found a cursor"),
            Body::Rows(rows) => panic!("expected `Count`, found {} rows", rows.len()),
        }
    }

    #[track_caller]
    pub fn into_cursor(self) -> RowCursor {
        match self {
            Body::Cursor(cursor) => cursor,
            Body::Count(count) => panic!("expected `Cursor`, found count {count}"),
            Body::Rows(rows) => panic!("expected `Cursor`, found {} rows", rows.len()),
        }
    }

    #[track_caller]
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Body::Rows(rows) => rows,
            Body::Count(count) => panic!("expected `Rows`, found count {count}"),
            Body::Cursor(_) => panic!("expected `Rows`, found a cursor"),
        }
    }
}
