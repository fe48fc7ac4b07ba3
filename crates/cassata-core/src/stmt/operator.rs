use super::Direction;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter operator carried by a request.
///
/// Comparison operators contribute a predicate to the statement's filter.
/// `Asc` and `Desc` are ordering hints: they contribute nothing to a
/// predicate and only matter through [`Operator::direction`].
#[derive(Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Asc,
    Desc,
}

impl Operator {
    /// Parses a wire name into an operator.
    ///
    /// Unknown names yield `None`; callers omit the corresponding clause
    /// rather than failing the request.
    pub fn parse(s: &str) -> Option<Operator> {
        Some(match s {
            "eq" => Self::Eq,
            "gt" => Self::Gt,
            "gte" => Self::Gte,
            "lt" => Self::Lt,
            "lte" => Self::Lte,
            "in" => Self::In,
            "asc" => Self::Asc,
            "desc" => Self::Desc,
            _ => return None,
        })
    }

    pub fn is_comparison(self) -> bool {
        !matches!(self, Self::Asc | Self::Desc)
    }

    pub fn is_ordering(self) -> bool {
        matches!(self, Self::Asc | Self::Desc)
    }

    /// The sort direction this operator implies when used in an order clause.
    ///
    /// Only `Desc` sorts descending; every other operator sorts ascending.
    pub fn direction(self) -> Direction {
        match self {
            Self::Desc => Direction::Desc,
            _ => Direction::Asc,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Operator::*;

        match self {
            Eq => "=".fmt(f),
            Gt => ">".fmt(f),
            Gte => ">=".fmt(f),
            Lt => "<".fmt(f),
            Lte => "<=".fmt(f),
            In => "IN".fmt(f),
            Asc => "ASC".fmt(f),
            Desc => "DESC".fmt(f),
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!(Operator::parse("eq"), Some(Operator::Eq));
        assert_eq!(Operator::parse("lte"), Some(Operator::Lte));
        assert_eq!(Operator::parse("in"), Some(Operator::In));
        assert_eq!(Operator::parse("desc"), Some(Operator::Desc));
    }

    #[test]
    fn parse_unknown_name_is_none() {
        assert_eq!(Operator::parse("between"), None);
        assert_eq!(Operator::parse("EQ"), None);
        assert_eq!(Operator::parse(""), None);
    }

    #[test]
    fn only_desc_sorts_descending() {
        assert!(Operator::Desc.direction().is_desc());
        assert!(Operator::Asc.direction().is_asc());
        assert!(Operator::Eq.direction().is_asc());
        assert!(Operator::Lte.direction().is_asc());
    }
}
