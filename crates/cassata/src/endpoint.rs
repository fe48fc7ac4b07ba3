mod builder;
mod dispatch;

pub use builder::Builder;

use crate::{
    driver::{Consistency, Credentials},
    Operation, ResponseFormat,
};

use cassata_core::Driver;

use std::sync::Arc;

/// A validated gateway to one keyspace of a column-family store.
///
/// An endpoint pairs a driver with the configuration every request shares:
/// keyspace, default table and operation, response format, and connection
/// options. It is cheap to clone; clones share the driver. Connections are
/// not pooled here, each dispatched request opens and closes its own.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub(crate) driver: Arc<dyn Driver>,
    pub(crate) keyspace: String,
    pub(crate) table: Option<String>,
    pub(crate) operation: Operation,
    pub(crate) format: ResponseFormat,
    pub(crate) contact_points: Vec<String>,
    pub(crate) port: Option<u16>,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) consistency: Option<Consistency>,
}

impl Endpoint {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The keyspace scoping this endpoint's statements.
    pub fn keyspace(&self) -> &str {
        &self.keyspace
    }

    /// The table targeted by table-bound operations, when configured.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// The operation dispatched when a request carries no override.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// How cursor results are shaped.
    pub fn format(&self) -> ResponseFormat {
        self.format
    }
}
