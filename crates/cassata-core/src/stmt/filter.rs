use super::{Operator, Statement, Value};

/// Conjunction of predicates applied to a scan, update, or delete.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

/// One comparison between a column and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: Operator,
    pub value: Value,
}

impl Filter {
    /// Appends one predicate when the operator is a comparison.
    ///
    /// Ordering operators (`Asc`, `Desc`) contribute nothing here; they only
    /// matter for the statement's order clause.
    pub fn apply(&mut self, column: impl Into<String>, value: impl Into<Value>, op: Operator) {
        if !op.is_comparison() {
            return;
        }
        self.predicates.push(Predicate {
            column: column.into(),
            op,
            value: value.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Predicate> {
        self.predicates.iter()
    }
}

impl From<Predicate> for Filter {
    fn from(value: Predicate) -> Self {
        Self {
            predicates: vec![value],
        }
    }
}

impl<'a> IntoIterator for &'a Filter {
    type Item = &'a Predicate;
    type IntoIter = std::slice::Iter<'a, Predicate>;

    fn into_iter(self) -> Self::IntoIter {
        self.predicates.iter()
    }
}

impl Statement {
    pub fn filter(&self) -> Option<&Filter> {
        match self {
            Statement::Delete(delete) => Some(&delete.filter),
            Statement::Select(select) => Some(&select.filter),
            Statement::Update(update) => Some(&update.filter),
            Statement::Batch(_) | Statement::Insert(_) | Statement::Raw(_) => None,
        }
    }
}
