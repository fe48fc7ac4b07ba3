use super::{Delimited, Ident, Params, ToCql};

use cassata_core::stmt;

impl ToCql for &stmt::Filter {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if self.is_empty() {
            return;
        }

        let predicates = Delimited(self.iter(), " AND ");
        fmt!(f, " WHERE " predicates);
    }
}

impl ToCql for &stmt::Predicate {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(self.column.as_str());

        fmt!(f, column " " self.op " " self.value);
    }
}

impl ToCql for &stmt::Operator {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Operator::*;

        f.dst.push_str(match self {
            Eq => "=",
            Gt => ">",
            Gte => ">=",
            Lt => "<",
            Lte => "<=",
            In => "IN",
            Asc | Desc => panic!("ordering operator in a predicate; op={self:?}"),
        })
    }
}
