use std::fmt;

/// Sort direction for an order clause.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn is_asc(self) -> bool {
        matches!(self, Self::Asc)
    }

    pub fn is_desc(self) -> bool {
        matches!(self, Self::Desc)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => "ASC".fmt(f),
            Self::Desc => "DESC".fmt(f),
        }
    }
}
