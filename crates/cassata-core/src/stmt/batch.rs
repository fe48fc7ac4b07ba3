use super::{Statement, Value};

/// One query template bound over a list of parameter tuples.
///
/// The batch executes as a single unit: the template is prepared once and
/// bound with each tuple in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Query text with positional placeholders
    pub template: String,

    /// One tuple of bind values per bound statement
    pub bindings: Vec<Vec<Value>>,
}

impl Batch {
    pub fn new(template: impl Into<String>, bindings: Vec<Vec<Value>>) -> Self {
        Self {
            template: template.into(),
            bindings,
        }
    }

    /// Number of bound statements in the batch.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Statement {
    pub fn is_batch(&self) -> bool {
        matches!(self, Statement::Batch(_))
    }

    /// Attempts to return a reference to an inner [`Batch`].
    pub fn as_batch(&self) -> Option<&Batch> {
        match self {
            Self::Batch(batch) => Some(batch),
            _ => None,
        }
    }

    /// Consumes `self` and attempts to return the inner [`Batch`].
    pub fn into_batch(self) -> Option<Batch> {
        match self {
            Self::Batch(batch) => Some(batch),
            _ => None,
        }
    }
}

impl From<Batch> for Statement {
    fn from(value: Batch) -> Self {
        Statement::Batch(value)
    }
}
