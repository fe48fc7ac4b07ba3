use cassata_core::{
    stmt::{
        Assignment, AssignmentOp, Assignments, Columns, Delete, Filter, Operator, Predicate, Row,
        Select, Update, Value,
    },
    Result,
};

use indexmap::IndexMap;
use std::cmp::Ordering;
use std::sync::Mutex;

/// Tables shared by every connection of a [`Mem`](crate::Mem) driver.
///
/// Keyspace and table entries appear on first write; rows keep insertion
/// order. There is no schema, no primary key, and no upsert: every insert
/// appends a new row.
#[derive(Debug, Default)]
pub(crate) struct Store {
    keyspaces: Mutex<IndexMap<String, Keyspace>>,
}

type Keyspace = IndexMap<String, Table>;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Row>,
}

impl Store {
    pub(crate) fn insert(&self, keyspace: &str, table: &str, values: &Assignments) -> u64 {
        let mut keyspaces = self.keyspaces.lock().unwrap();
        let table = keyspaces
            .entry(keyspace.to_string())
            .or_default()
            .entry(table.to_string())
            .or_default();

        // An insert writes cell values; assignment ops only matter to updates
        let row = values
            .iter()
            .map(|(column, assignment)| (column, assignment.value.clone()))
            .collect();
        table.rows.push(row);

        1
    }

    /// Matching rows, ordered, capped, and projected. Tables never written
    /// to read as empty.
    pub(crate) fn select(&self, keyspace: &str, table: &str, select: &Select) -> Vec<Row> {
        let keyspaces = self.keyspaces.lock().unwrap();
        let Some(table) = keyspaces.get(keyspace).and_then(|tables| tables.get(table)) else {
            return vec![];
        };

        let mut rows: Vec<_> = table
            .rows
            .iter()
            .filter(|row| matches(row, &select.filter))
            .cloned()
            .collect();

        if let Some(order_by) = &select.order_by {
            rows.sort_by(|a, b| {
                // Incomparable cells keep their relative insertion order
                let ordering = match (a.get(&order_by.column), b.get(&order_by.column)) {
                    (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                };
                if order_by.direction.is_desc() {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        if let Some(limit) = select.limit {
            rows.truncate(limit as usize);
        }

        match &select.columns {
            Columns::All => rows,
            Columns::Named(_) => rows
                .iter()
                .map(|row| project(row, &select.columns))
                .collect(),
        }
    }

    pub(crate) fn update(&self, keyspace: &str, table: &str, update: &Update) -> Result<u64> {
        let mut keyspaces = self.keyspaces.lock().unwrap();
        let Some(table) = keyspaces
            .get_mut(keyspace)
            .and_then(|tables| tables.get_mut(table))
        else {
            return Ok(0);
        };

        let mut count = 0;
        for row in table
            .rows
            .iter_mut()
            .filter(|row| matches(row, &update.filter))
        {
            for (column, assignment) in update.assignments.iter() {
                apply(row, column, assignment)?;
            }
            count += 1;
        }

        Ok(count)
    }

    pub(crate) fn delete(&self, keyspace: &str, table: &str, delete: &Delete) -> u64 {
        let mut keyspaces = self.keyspaces.lock().unwrap();
        let Some(table) = keyspaces
            .get_mut(keyspace)
            .and_then(|tables| tables.get_mut(table))
        else {
            return 0;
        };

        match &delete.columns {
            Columns::All => {
                let before = table.rows.len();
                table.rows.retain(|row| !matches(row, &delete.filter));
                (before - table.rows.len()) as u64
            }
            Columns::Named(columns) => {
                let mut count = 0;
                for row in table
                    .rows
                    .iter_mut()
                    .filter(|row| matches(row, &delete.filter))
                {
                    for column in columns {
                        row.set(column.as_str(), Value::Null);
                    }
                    count += 1;
                }
                count
            }
        }
    }
}

fn apply(row: &mut Row, column: &str, assignment: &Assignment) -> Result<()> {
    match assignment.op {
        AssignmentOp::Set => row.set(column, assignment.value.clone()),
        AssignmentOp::Add | AssignmentOp::Sub => {
            // Counter columns start at zero
            let current = match row.get(column) {
                Some(value) if !value.is_null() => value.clone().to_i64()?,
                _ => 0,
            };
            let delta = assignment.value.clone().to_i64()?;
            let next = match assignment.op {
                AssignmentOp::Add => current + delta,
                _ => current - delta,
            };
            row.set(column, next);
        }
    }

    Ok(())
}

fn project(row: &Row, columns: &Columns) -> Row {
    match columns {
        Columns::All => row.clone(),
        Columns::Named(names) => names
            .iter()
            .map(|name| (name.as_str(), row.get(name).cloned().unwrap_or_default()))
            .collect(),
    }
}

/// A row matches when every predicate matches.
fn matches(row: &Row, filter: &Filter) -> bool {
    filter.iter().all(|predicate| matches_predicate(row, predicate))
}

fn matches_predicate(row: &Row, predicate: &Predicate) -> bool {
    // Missing cells never match; null cells fail every comparison
    let Some(actual) = row.get(&predicate.column) else {
        return false;
    };

    match predicate.op {
        Operator::Eq => compares(actual, &predicate.value, Ordering::is_eq),
        Operator::Gt => compares(actual, &predicate.value, Ordering::is_gt),
        Operator::Gte => compares(actual, &predicate.value, Ordering::is_ge),
        Operator::Lt => compares(actual, &predicate.value, Ordering::is_lt),
        Operator::Lte => compares(actual, &predicate.value, Ordering::is_le),
        Operator::In => match &predicate.value {
            Value::List(candidates) => candidates
                .iter()
                .any(|candidate| compares(actual, candidate, Ordering::is_eq)),
            candidate => compares(actual, candidate, Ordering::is_eq),
        },
        // Ordering hints place no constraint on the row
        Operator::Asc | Operator::Desc => true,
    }
}

fn compares(actual: &Value, expected: &Value, test: fn(Ordering) -> bool) -> bool {
    actual.compare(expected).is_some_and(test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cassata_core::stmt::{Direction, OrderBy};

    fn seed() -> Store {
        let store = Store::default();

        for (id, title, ranking) in [(1, "one", 30), (2, "two", 10), (3, "three", 20)] {
            let mut values = Assignments::default();
            values.set("id", id as i64);
            values.set("title", title);
            values.set("ranking", ranking as i64);
            store.insert("beat", "songs", &values);
        }

        store
    }

    #[test]
    fn insert_then_scan_all() {
        let store = seed();
        let rows = store.select("beat", "songs", &Select::all("songs"));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].get_i64("id"), Some(1));
        assert_eq!(rows[2].get_str("title"), Some("three"));
    }

    #[test]
    fn unknown_table_reads_empty() {
        let store = seed();

        assert!(store.select("beat", "missing", &Select::all("missing")).is_empty());
        assert!(store.select("other", "songs", &Select::all("songs")).is_empty());
    }

    #[test]
    fn filters_compare_across_numeric_widths() {
        let store = seed();

        let mut select = Select::all("songs");
        select.filter.apply("ranking", 20i32, Operator::Gte);

        let rows = store.select("beat", "songs", &select);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn in_filter_matches_candidates() {
        let store = seed();

        let mut select = Select::all("songs");
        select.filter.apply(
            "id",
            Value::List(vec![1i64.into(), 3i64.into()]),
            Operator::In,
        );

        let rows = store.select("beat", "songs", &select);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get_i64("id"), Some(3));
    }

    #[test]
    fn order_by_descending_then_limit() {
        let store = seed();

        let mut select = Select::all("songs");
        select.order_by = Some(OrderBy::new("ranking", Direction::Desc));
        select.limit = Some(2);

        let rows = store.select("beat", "songs", &select);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get_i64("ranking"), Some(30));
        assert_eq!(rows[1].get_i64("ranking"), Some(20));
    }

    #[test]
    fn named_projection_keeps_order_and_nulls_missing() {
        let store = seed();

        let mut select = Select::all("songs");
        select.columns = Columns::Named(vec!["title".into(), "absent".into()]);
        select.limit = Some(1);

        let rows = store.select("beat", "songs", &select);
        let columns: Vec<_> = rows[0].columns().collect();
        assert_eq!(columns, ["title", "absent"]);
        assert_eq!(rows[0].get("absent"), Some(&Value::Null));
    }

    #[test]
    fn update_set_matching_rows() {
        let store = seed();

        let mut update = Update::new("songs");
        update.assignments.set("title", "renamed");
        update.filter.apply("id", 2i64, Operator::Eq);

        assert_eq!(store.update("beat", "songs", &update).unwrap(), 1);

        let mut select = Select::all("songs");
        select.filter.apply("id", 2i64, Operator::Eq);
        let rows = store.select("beat", "songs", &select);
        assert_eq!(rows[0].get_str("title"), Some("renamed"));
    }

    #[test]
    fn counters_default_to_zero() {
        let store = Store::default();

        let mut values = Assignments::default();
        values.set("id", 1i64);
        store.insert("beat", "plays", &values);

        let mut update = Update::new("plays");
        update.assignments.add("count", 5i64);
        update.filter.apply("id", 1i64, Operator::Eq);
        store.update("beat", "plays", &update).unwrap();

        let mut update = Update::new("plays");
        update.assignments.sub("count", 2i64);
        update.filter.apply("id", 1i64, Operator::Eq);
        store.update("beat", "plays", &update).unwrap();

        let rows = store.select("beat", "plays", &Select::all("plays"));
        assert_eq!(rows[0].get_i64("count"), Some(3));
    }

    #[test]
    fn counter_delta_must_be_numeric() {
        let store = seed();

        let mut update = Update::new("songs");
        update.assignments.add("ranking", "not a number");
        update.filter.apply("id", 1i64, Operator::Eq);

        let err = store.update("beat", "songs", &update).unwrap_err();
        assert!(err.is_type_conversion());
    }

    #[test]
    fn delete_rows_and_clear_columns() {
        let store = seed();

        let mut delete = Delete::rows("songs");
        delete.filter.apply("id", 1i64, Operator::Eq);
        assert_eq!(store.delete("beat", "songs", &delete), 1);

        let rows = store.select("beat", "songs", &Select::all("songs"));
        assert_eq!(rows.len(), 2);

        let mut delete = Delete::column("songs", "title");
        delete.filter.apply("id", 2i64, Operator::Eq);
        assert_eq!(store.delete("beat", "songs", &delete), 1);

        let mut select = Select::all("songs");
        select.filter.apply("id", 2i64, Operator::Eq);
        let rows = store.select("beat", "songs", &select);
        assert_eq!(rows[0].get("title"), Some(&Value::Null));
    }

    #[test]
    fn null_cells_never_match_filters() {
        let store = seed();

        let mut delete = Delete::column("songs", "title");
        delete.filter.apply("id", 3i64, Operator::Eq);
        store.delete("beat", "songs", &delete);

        let mut select = Select::all("songs");
        select.filter.apply("title", "three", Operator::Eq);
        assert!(store.select("beat", "songs", &select).is_empty());
    }
}
