use crate::{
    request::Fields,
    stmt::{self, TableRef},
    Error, Operation, Result,
};

/// Builds the statement for one resolved operation from the request fields.
///
/// `table` is the endpoint's configured table. It is re-checked here because
/// a request override can switch an endpoint validated without a table onto
/// a table-bound operation.
pub(crate) fn build(
    operation: Operation,
    fields: &Fields,
    table: Option<&str>,
) -> Result<stmt::Statement> {
    match operation {
        Operation::ScanAll => Ok(stmt::Select::all(required_table(operation, table)?).into()),
        Operation::ScanAllFiltered => {
            let mut select = stmt::Select::all(required_table(operation, table)?);
            apply_filter(&mut select.filter, fields);
            select.order_by = order_by(fields);
            select.limit = fields.limit;
            Ok(select.into())
        }
        Operation::ScanColumn => {
            let column = required(fields.select_column.as_deref(), "a select column", operation)?;
            Ok(stmt::Select::column(required_table(operation, table)?, column).into())
        }
        Operation::ScanColumnFiltered => {
            let column = required(fields.select_column.as_deref(), "a select column", operation)?;
            let mut select = stmt::Select::column(required_table(operation, table)?, column);
            apply_filter(&mut select.filter, fields);
            select.order_by = order_by(fields);
            select.limit = fields.limit;
            Ok(select.into())
        }
        Operation::Insert => {
            let values = fields.insert_values.as_ref().filter(|map| !map.is_empty());
            let values = required(values, "insert values", operation)?;

            let mut insert = stmt::Insert::new(required_table(operation, table)?);
            for (column, value) in values {
                insert.values.set(column, value.clone());
            }
            Ok(insert.into())
        }
        Operation::Update => {
            let values = fields.update_values.as_ref().filter(|map| !map.is_empty());
            let values = required(values, "update values", operation)?;

            let mut update = stmt::Update::new(required_table(operation, table)?);
            for (column, value) in values {
                update.assignments.set(column, value.clone());
            }
            apply_filter(&mut update.filter, fields);
            Ok(update.into())
        }
        Operation::DeleteFiltered => {
            let mut delete = stmt::Delete::rows(required_table(operation, table)?);
            apply_filter(&mut delete.filter, fields);
            Ok(delete.into())
        }
        Operation::DeleteColumnFiltered => {
            let column = required(fields.delete_column.as_deref(), "a delete column", operation)?;
            let mut delete = stmt::Delete::column(required_table(operation, table)?, column);
            apply_filter(&mut delete.filter, fields);
            Ok(delete.into())
        }
        Operation::IncrementCounter | Operation::DecrementCounter => {
            let column = required(fields.counter_column.as_deref(), "a counter column", operation)?;
            let delta = required(fields.counter_delta, "a counter delta", operation)?;

            let mut update = stmt::Update::new(required_table(operation, table)?);
            if operation == Operation::IncrementCounter {
                update.assignments.add(column, delta);
            } else {
                update.assignments.sub(column, delta);
            }
            apply_filter(&mut update.filter, fields);
            Ok(update.into())
        }
        Operation::BatchExecute => {
            let query = required(fields.batch_query.as_deref(), "a batch query", operation)?;
            let params = required(fields.batch_params.as_ref(), "batch parameters", operation)?;
            Ok(stmt::Batch::new(query, params.clone()).into())
        }
        // Raw statements come from the request body, which dispatch handles
        // before operation resolution
        Operation::RawQuery => Err(Error::invalid_configuration(
            "the raw-query operation requires a request body",
        )),
    }
}

fn required<T>(value: Option<T>, what: &str, operation: Operation) -> Result<T> {
    value.ok_or_else(|| {
        Error::invalid_configuration(format!("the {operation} operation requires {what}"))
    })
}

fn required_table(operation: Operation, table: Option<&str>) -> Result<TableRef> {
    match table {
        Some(table) => Ok(table.into()),
        None => Err(Error::invalid_configuration(format!(
            "a table must be specified for the {operation} operation"
        ))),
    }
}

/// Appends the request's predicate when the column, value, and operator
/// slots are all present. A partial triple contributes nothing.
fn apply_filter(filter: &mut stmt::Filter, fields: &Fields) {
    let (Some(column), Some(value), Some(op)) = (
        fields.filter_column.as_deref(),
        fields.filter_value.as_ref(),
        fields.filter_operator,
    ) else {
        return;
    };

    filter.apply(column, value.clone(), op);
}

/// The order clause for a filtered scan.
///
/// Ordering needs an order column, and takes its direction from the filter
/// operator slot: `desc` sorts descending, anything else ascending.
fn order_by(fields: &Fields) -> Option<stmt::OrderBy> {
    let column = fields.order_column.as_deref()?;
    let op = fields.filter_operator?;

    Some(stmt::OrderBy::new(column, op.direction()))
}
