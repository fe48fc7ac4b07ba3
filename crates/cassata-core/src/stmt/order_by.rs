use super::Direction;

/// Sort clause: a single column and direction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: String,

    /// Ascending or descending
    pub direction: Direction,
}

impl OrderBy {
    pub fn new(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }
}
