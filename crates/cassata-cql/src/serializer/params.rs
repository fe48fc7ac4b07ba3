use super::{Formatter, ToCql};

use cassata_core::stmt;

pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToCql for Placeholder {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        // The native protocol binds positionally
        f.dst.push('?');
    }
}
