mod assignments;
pub use assignments::{Assignment, AssignmentOp, Assignments};

mod batch;
pub use batch::Batch;

mod delete;
pub use delete::Delete;

mod direction;
pub use direction::Direction;

mod filter;
pub use filter::{Filter, Predicate};

mod insert;
pub use insert::Insert;

mod operator;
pub use operator::Operator;

mod order_by;
pub use order_by::OrderBy;

mod raw;
pub use raw::Raw;

mod row;
pub use row::Row;

mod row_cursor;
pub use row_cursor::RowCursor;

mod select;
pub use select::{Columns, Select};

mod table_ref;
pub use table_ref::TableRef;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod value_cmp;

use std::fmt;

#[derive(Clone, PartialEq)]
pub enum Statement {
    /// Bind one query template over a list of parameter tuples
    Batch(Batch),

    /// Remove matching rows, or one column of the matching rows
    Delete(Delete),

    /// Append a row to a table
    Insert(Insert),

    /// Verbatim query text, passed to the store untranslated
    Raw(Raw),

    /// Scan rows out of a table
    Select(Select),

    /// Apply assignments to matching rows
    Update(Update),
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batch(v) => v.fmt(f),
            Self::Delete(v) => v.fmt(f),
            Self::Insert(v) => v.fmt(f),
            Self::Raw(v) => v.fmt(f),
            Self::Select(v) => v.fmt(f),
            Self::Update(v) => v.fmt(f),
        }
    }
}
