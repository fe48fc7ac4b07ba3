use crate::{stmt::Operator, stmt::Value, Operation, Result};

use indexmap::IndexMap;

/// A single unit of work handed to [`Endpoint::dispatch`].
///
/// `metadata` is carried through to the response untouched. `body` is raw
/// statement text; when present and non-blank it takes precedence over every
/// configured or overridden operation.
///
/// [`Endpoint::dispatch`]: crate::Endpoint::dispatch
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Caller metadata, echoed on the response.
    pub metadata: IndexMap<String, Value>,

    /// Per-request field slots.
    pub fields: Fields,

    /// Raw statement text.
    pub body: Option<String>,
}

/// Per-request field slots.
///
/// Each slot is optional; an absent slot disables the clause it feeds. Slots
/// an operation strictly requires (the insert map for `insert`, the counter
/// pair for counters, ...) fail statement building when absent.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    /// Overrides the endpoint's configured operation for this request.
    pub operation: Option<OperationArg>,

    /// Overrides the endpoint's contact points for this request.
    pub contact_points: Option<Vec<String>>,

    /// Overrides the endpoint's port for this request.
    pub port: Option<u16>,

    /// Column read by the column-scan operations.
    pub select_column: Option<String>,

    /// Column cleared by `delete-column-filtered`.
    pub delete_column: Option<String>,

    /// Filter column; a predicate needs column, value, and operator together.
    pub filter_column: Option<String>,

    /// Filter comparand.
    pub filter_value: Option<Value>,

    /// Filter operator; doubles as the order direction when ordering.
    pub filter_operator: Option<Operator>,

    /// Column the filtered scans order by.
    pub order_column: Option<String>,

    /// Column/value map written by `insert`.
    pub insert_values: Option<IndexMap<String, Value>>,

    /// Column/value map assigned by `update`.
    pub update_values: Option<IndexMap<String, Value>>,

    /// Counter column targeted by the counter operations.
    pub counter_column: Option<String>,

    /// Delta applied to the counter column.
    pub counter_delta: Option<i64>,

    /// Statement template for `batch-execute`.
    pub batch_query: Option<String>,

    /// One tuple of bind values per batched statement.
    pub batch_params: Option<Vec<Vec<Value>>>,

    /// Row cap applied by the filtered scans.
    pub limit: Option<u64>,
}

/// An operation override as a request carries it.
///
/// Callers that know the operation at compile time pass the enum; callers
/// forwarding wire input pass the raw string. Either way the value decodes
/// exactly once, during dispatch resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationArg {
    /// An already-typed operation.
    Kind(Operation),
    /// A wire name, parsed at resolution time.
    Name(String),
}

impl OperationArg {
    /// Resolves the override to a typed operation.
    ///
    /// A `Name` that does not parse fails with an unsupported-operation error
    /// naming the value.
    pub fn resolve(&self) -> Result<Operation> {
        match self {
            OperationArg::Kind(operation) => Ok(*operation),
            OperationArg::Name(name) => Operation::parse(name),
        }
    }
}

impl From<Operation> for OperationArg {
    fn from(operation: Operation) -> Self {
        OperationArg::Kind(operation)
    }
}

impl From<&str> for OperationArg {
    fn from(name: &str) -> Self {
        OperationArg::Name(name.to_string())
    }
}

impl From<String> for OperationArg {
    fn from(name: String) -> Self {
        OperationArg::Name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_override_resolves_to_itself() {
        let arg = OperationArg::from(Operation::Update);
        assert_eq!(arg.resolve().unwrap(), Operation::Update);
    }

    #[test]
    fn named_override_parses_the_wire_name() {
        let arg = OperationArg::from("increment-counter");
        assert_eq!(arg.resolve().unwrap(), Operation::IncrementCounter);
    }

    #[test]
    fn named_override_fails_with_the_offending_value() {
        let arg = OperationArg::from("compact".to_string());
        let err = arg.resolve().unwrap_err();
        assert!(err.is_unsupported_operation());
        assert!(err.to_string().contains("compact"));
    }
}
