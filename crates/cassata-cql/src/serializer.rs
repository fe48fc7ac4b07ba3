#[macro_use]
mod fmt;
use fmt::ToCql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod value;

use cassata_core::stmt::Statement;

/// Serialize a statement to a CQL string
#[derive(Debug, Default)]
pub struct Serializer<'a> {
    /// Keyspace used to qualify table references that do not name one
    keyspace: Option<&'a str>,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized CQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    pub fn new() -> Self {
        Self { keyspace: None }
    }

    /// A serializer that qualifies unqualified table references with the
    /// given keyspace.
    pub fn with_keyspace(keyspace: &'a str) -> Self {
        Self {
            keyspace: Some(keyspace),
        }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_cql(&mut fmt);

        ret.push(';');
        ret
    }
}
