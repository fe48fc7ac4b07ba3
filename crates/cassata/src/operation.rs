use cassata_core::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operation an endpoint performs against the store.
///
/// Every request resolves to exactly one operation: the endpoint's configured
/// default, unless the request carries an override. Wire names are the
/// kebab-case forms (`scan-all`, `increment-counter`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Read every row of the table.
    #[default]
    ScanAll,
    /// Read rows matching the request filter, optionally ordered and limited.
    ScanAllFiltered,
    /// Read a single column of every row.
    ScanColumn,
    /// Read a single column of the rows matching the request filter.
    ScanColumnFiltered,
    /// Write one row from the request's insert values.
    Insert,
    /// Assign columns on the rows matching the request filter.
    Update,
    /// Remove the rows matching the request filter.
    DeleteFiltered,
    /// Clear a single column on the rows matching the request filter.
    DeleteColumnFiltered,
    /// Add a delta to a counter column.
    IncrementCounter,
    /// Subtract a delta from a counter column.
    DecrementCounter,
    /// Execute one statement template against a list of bound tuples.
    BatchExecute,
    /// Execute the request body as a raw statement.
    RawQuery,
}

impl Operation {
    /// Parses a wire name into an operation.
    ///
    /// Matching is exact; unknown names fail with an unsupported-operation
    /// error carrying the rejected value.
    pub fn parse(s: &str) -> Result<Operation> {
        Ok(match s {
            "scan-all" => Self::ScanAll,
            "scan-all-filtered" => Self::ScanAllFiltered,
            "scan-column" => Self::ScanColumn,
            "scan-column-filtered" => Self::ScanColumnFiltered,
            "insert" => Self::Insert,
            "update" => Self::Update,
            "delete-filtered" => Self::DeleteFiltered,
            "delete-column-filtered" => Self::DeleteColumnFiltered,
            "increment-counter" => Self::IncrementCounter,
            "decrement-counter" => Self::DecrementCounter,
            "batch-execute" => Self::BatchExecute,
            "raw-query" => Self::RawQuery,
            _ => return Err(Error::unsupported_operation(s)),
        })
    }

    /// The operation's wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ScanAll => "scan-all",
            Self::ScanAllFiltered => "scan-all-filtered",
            Self::ScanColumn => "scan-column",
            Self::ScanColumnFiltered => "scan-column-filtered",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::DeleteFiltered => "delete-filtered",
            Self::DeleteColumnFiltered => "delete-column-filtered",
            Self::IncrementCounter => "increment-counter",
            Self::DecrementCounter => "decrement-counter",
            Self::BatchExecute => "batch-execute",
            Self::RawQuery => "raw-query",
        }
    }

    /// Whether the operation targets a configured table.
    ///
    /// Raw statements and batch templates name their tables inline, so those
    /// two operations work without one.
    pub fn requires_table(self) -> bool {
        !matches!(self, Self::RawQuery | Self::BatchExecute)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_name() {
        let all = [
            Operation::ScanAll,
            Operation::ScanAllFiltered,
            Operation::ScanColumn,
            Operation::ScanColumnFiltered,
            Operation::Insert,
            Operation::Update,
            Operation::DeleteFiltered,
            Operation::DeleteColumnFiltered,
            Operation::IncrementCounter,
            Operation::DecrementCounter,
            Operation::BatchExecute,
            Operation::RawQuery,
        ];

        for operation in all {
            assert_eq!(Operation::parse(operation.name()).unwrap(), operation);
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = Operation::parse("vacuum").unwrap_err();
        assert!(err.is_unsupported_operation());
        assert!(err.to_string().contains("vacuum"));

        // Matching is exact: no case folding, no aliases
        assert!(Operation::parse("ScanAll").is_err());
        assert!(Operation::parse("scan_all").is_err());
        assert!(Operation::parse("").is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Operation::IncrementCounter).unwrap();
        assert_eq!(json, "\"increment-counter\"");

        let parsed: Operation = serde_json::from_str("\"delete-column-filtered\"").unwrap();
        assert_eq!(parsed, Operation::DeleteColumnFiltered);
    }

    #[test]
    fn only_raw_and_batch_skip_the_table() {
        assert!(!Operation::RawQuery.requires_table());
        assert!(!Operation::BatchExecute.requires_table());
        assert!(Operation::ScanAll.requires_table());
        assert!(Operation::Insert.requires_table());
        assert!(Operation::DeleteFiltered.requires_table());
    }

    #[test]
    fn default_is_scan_all() {
        assert_eq!(Operation::default(), Operation::ScanAll);
    }
}
