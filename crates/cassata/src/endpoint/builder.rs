use super::Endpoint;
use crate::{
    driver::{Consistency, Credentials},
    Error, Operation, Result, ResponseFormat,
};

use cassata_core::Driver;

use std::sync::Arc;

/// Configures and validates an [`Endpoint`].
#[derive(Debug, Default)]
pub struct Builder {
    keyspace: Option<String>,
    table: Option<String>,
    operation: Operation,
    format: FormatSlot,
    contact_points: Vec<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
    consistency: Option<Consistency>,
}

/// The format slot accepts either a typed format or a wire name; names are
/// resolved during `build` so configuration mistakes fail fast.
#[derive(Debug, Default)]
enum FormatSlot {
    #[default]
    Unset,
    Typed(ResponseFormat),
    Named(String),
}

impl Builder {
    /// Sets the keyspace scoping the endpoint's statements. Required.
    pub fn keyspace(&mut self, keyspace: impl Into<String>) -> &mut Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    /// Sets the table targeted by table-bound operations.
    ///
    /// Required unless the default operation is `raw-query` or
    /// `batch-execute`, which name their tables inline.
    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the operation dispatched when a request carries no override.
    ///
    /// Defaults to [`Operation::ScanAll`].
    pub fn operation(&mut self, operation: Operation) -> &mut Self {
        self.operation = operation;
        self
    }

    /// Sets the response format. Defaults to passthrough.
    pub fn format(&mut self, format: ResponseFormat) -> &mut Self {
        self.format = FormatSlot::Typed(format);
        self
    }

    /// Sets the response format by wire name.
    ///
    /// The name is resolved during [`build`]; an unknown name fails the
    /// build rather than a later request.
    ///
    /// [`build`]: Builder::build
    pub fn format_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.format = FormatSlot::Named(name.into());
        self
    }

    /// Adds a store node to contact.
    pub fn contact_point(&mut self, contact_point: impl Into<String>) -> &mut Self {
        self.contact_points.push(contact_point.into());
        self
    }

    /// Sets the native protocol port.
    pub fn port(&mut self, port: u16) -> &mut Self {
        self.port = Some(port);
        self
    }

    /// Sets the authentication username. Requires [`password`] as well.
    ///
    /// [`password`]: Builder::password
    pub fn username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the authentication password. Requires [`username`] as well.
    ///
    /// [`username`]: Builder::username
    pub fn password(&mut self, password: impl Into<String>) -> &mut Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the consistency level requested at connect time.
    pub fn consistency(&mut self, consistency: Consistency) -> &mut Self {
        self.consistency = Some(consistency);
        self
    }

    /// Validates the configuration and builds the endpoint.
    ///
    /// Nothing is re-validated per request, and no connection is opened
    /// here; the driver is only exercised once requests are dispatched.
    pub fn build(&self, driver: impl Driver) -> Result<Endpoint> {
        let Some(keyspace) = self.keyspace.clone() else {
            return Err(Error::invalid_configuration("a keyspace must be specified"));
        };

        if self.operation.requires_table() && self.table.is_none() {
            return Err(Error::invalid_configuration(format!(
                "a table must be specified for the {} operation",
                self.operation
            )));
        }

        let format = match &self.format {
            FormatSlot::Unset => ResponseFormat::default(),
            FormatSlot::Typed(format) => *format,
            FormatSlot::Named(name) => ResponseFormat::from_name(name).ok_or_else(|| {
                Error::invalid_configuration(format!("unknown result format `{name}`"))
            })?,
        };

        let credentials = match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            (None, None) => None,
            _ => {
                return Err(Error::invalid_configuration(
                    "username and password must be specified together",
                ));
            }
        };

        Ok(Endpoint {
            driver: Arc::new(driver),
            keyspace,
            table: self.table.clone(),
            operation: self.operation,
            format,
            contact_points: self.contact_points.clone(),
            port: self.port,
            credentials,
            consistency: self.consistency,
        })
    }
}
