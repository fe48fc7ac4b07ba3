use super::Value;

use indexmap::IndexMap;

/// Ordered column assignments for an insert or update.
///
/// Backed by an [`IndexMap`] so serialization and application preserve the
/// order assignments were made in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignments {
    assignments: IndexMap<String, Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Assignment operation
    pub op: AssignmentOp,

    /// Value applied by the assignment
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssignmentOp {
    /// Set a column, replacing the current value.
    Set,

    /// Add a delta to a counter column.
    Add,

    /// Subtract a delta from a counter column.
    Sub,
}

impl Assignments {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assignments: IndexMap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.assignments.contains_key(column)
    }

    pub fn get(&self, column: &str) -> Option<&Assignment> {
        self.assignments.get(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.assignments.insert(
            column.into(),
            Assignment {
                op: AssignmentOp::Set,
                value: value.into(),
            },
        );
    }

    /// Add a delta to a counter column.
    pub fn add(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.assignments.insert(
            column.into(),
            Assignment {
                op: AssignmentOp::Add,
                value: value.into(),
            },
        );
    }

    /// Subtract a delta from a counter column.
    pub fn sub(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.assignments.insert(
            column.into(),
            Assignment {
                op: AssignmentOp::Sub,
                value: value.into(),
            },
        );
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.assignments.keys().map(|key| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Assignment)> + '_ {
        self.assignments
            .iter()
            .map(|(column, assignment)| (column.as_str(), assignment))
    }
}

impl IntoIterator for Assignments {
    type Item = (String, Assignment);

    type IntoIter = indexmap::map::IntoIter<String, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.into_iter()
    }
}

impl AssignmentOp {
    pub fn is_set(self) -> bool {
        matches!(self, Self::Set)
    }
}
