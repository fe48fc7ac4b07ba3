use super::{Comma, Ident, Params, ToCql};

use cassata_core::stmt;

impl ToCql for &stmt::Statement {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::Batch(stmt) => stmt.to_cql(f),
            stmt::Statement::Delete(stmt) => stmt.to_cql(f),
            stmt::Statement::Insert(stmt) => stmt.to_cql(f),
            stmt::Statement::Raw(stmt) => stmt.to_cql(f),
            stmt::Statement::Select(stmt) => stmt.to_cql(f),
            stmt::Statement::Update(stmt) => stmt.to_cql(f),
        }
    }
}

impl ToCql for &stmt::Select {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "SELECT " self.columns " FROM " self.from self.filter);

        if let Some(order_by) = &self.order_by {
            fmt!(f, " " order_by);
        }
        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToCql for &stmt::Columns {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Columns::All => fmt!(f, "*"),
            stmt::Columns::Named(columns) => {
                let columns = Comma(columns.iter().map(|column| Ident(column.as_str())));
                fmt!(f, columns);
            }
        }
    }
}

impl ToCql for &stmt::TableRef {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let keyspace = self.keyspace.as_deref().or(f.serializer.keyspace);

        if let Some(keyspace) = keyspace {
            fmt!(f, Ident(keyspace) ".");
        }
        fmt!(f, Ident(self.name.as_str()));
    }
}

impl ToCql for &stmt::OrderBy {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(self.column.as_str());

        fmt!(f, "ORDER BY " column " " self.direction);
    }
}

impl ToCql for &stmt::Direction {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Direction::Asc => fmt!(f, "ASC"),
            stmt::Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

impl ToCql for &stmt::Insert {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(self.values.keys().map(Ident));
        let values = Comma(self.values.iter().map(|(_, assignment)| &assignment.value));

        fmt!(f, "INSERT INTO " self.into " (" columns ") VALUES (" values ")");
    }
}

impl ToCql for &stmt::Update {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "UPDATE " self.table " SET ");

        for (i, (column, assignment)) in self.assignments.iter().enumerate() {
            if i > 0 {
                f.dst.push_str(", ");
            }

            let column = Ident(column);

            match assignment.op {
                stmt::AssignmentOp::Set => fmt!(f, column " = " assignment.value),
                stmt::AssignmentOp::Add => {
                    fmt!(f, column " = " column " + " assignment.value)
                }
                stmt::AssignmentOp::Sub => {
                    fmt!(f, column " = " column " - " assignment.value)
                }
            }
        }

        fmt!(f, self.filter);
    }
}

impl ToCql for &stmt::Delete {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match &self.columns {
            stmt::Columns::All => fmt!(f, "DELETE FROM " self.from self.filter),
            stmt::Columns::Named(columns) => {
                let columns = Comma(columns.iter().map(|column| Ident(column.as_str())));
                fmt!(f, "DELETE " columns " FROM " self.from self.filter);
            }
        }
    }
}

impl ToCql for &stmt::Raw {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        // The statement terminator is appended once by `serialize`
        fmt!(f, trim_terminator(&self.text));
    }
}

impl ToCql for &stmt::Batch {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let template = trim_terminator(&self.template);

        fmt!(f, "BEGIN BATCH");

        for tuple in &self.bindings {
            fmt!(f, "\n    " template ";");
            for value in tuple {
                f.params.push(value);
            }
        }

        fmt!(f, "\nAPPLY BATCH");
    }
}

fn trim_terminator(text: &str) -> &str {
    text.trim_end().trim_end_matches(';').trim_end()
}
