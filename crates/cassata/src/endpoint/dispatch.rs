use super::Endpoint;
use crate::{
    build,
    driver::ConnectOptions,
    request::{Fields, Request},
    response::{Body, Response},
    stmt, Operation, Result,
};

use cassata_core::{err, Connection};

impl Endpoint {
    /// Dispatches one request.
    ///
    /// Resolution order: a non-blank request body always executes as a raw
    /// statement; otherwise the request's operation override, when present,
    /// replaces the endpoint's configured operation. The statement built
    /// from the request fields runs on a connection scoped to this call,
    /// and the driver response is shaped by the endpoint's format.
    ///
    /// The connection is closed before returning. Under the passthrough
    /// format, rows the driver has not yet buffered become unreadable at
    /// that point; materialized-list results are unaffected.
    pub async fn dispatch(&self, request: Request) -> Result<Response> {
        let connection = self.connect(&request.fields).await?;

        let result = self.run(&*connection, &request).await;
        let closed = connection.close().await;

        let body = match result {
            Ok(body) => body,
            Err(err) => {
                // The run error is primary; a close failure on top of it is
                // only logged
                if let Err(close_err) = closed {
                    tracing::debug!(error = %close_err, "failed to close the connection");
                }
                return Err(err.context(err!("dispatch failed")));
            }
        };
        closed?;

        Ok(Response::new(request.metadata, body))
    }

    /// Opens a connection for one dispatch, applying per-request overrides
    /// of the contact points and port.
    pub(crate) async fn connect(&self, fields: &Fields) -> Result<Box<dyn Connection>> {
        let options = ConnectOptions {
            contact_points: fields
                .contact_points
                .clone()
                .unwrap_or_else(|| self.contact_points.clone()),
            port: fields.port.or(self.port),
            keyspace: Some(self.keyspace.clone()),
            credentials: self.credentials.clone(),
            consistency: self.consistency,
        };

        self.driver.connect(&options).await
    }

    async fn run(&self, connection: &dyn Connection, request: &Request) -> Result<Body> {
        // A non-blank body short-circuits operation resolution entirely
        if let Some(text) = request.body.as_deref().filter(|text| !text.trim().is_empty()) {
            tracing::debug!(cql = %text, "executing raw statement");

            let response = connection
                .exec(stmt::Statement::Raw(text.into()))
                .await
                .map_err(|err| err.context(err!("failed to execute the raw statement")))?;

            return self.format.format(response).await;
        }

        let operation = self.resolve_operation(&request.fields)?;
        let statement = build::build(operation, &request.fields, self.table.as_deref())?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let mut params = Vec::new();
            let cql = cassata_cql::Serializer::with_keyspace(&self.keyspace)
                .serialize(&statement, &mut params);
            tracing::debug!(operation = %operation, cql = %cql, params = params.len(), "executing statement");
        }

        let response = connection
            .exec(statement)
            .await
            .map_err(|err| err.context(err!("failed to execute the {operation} operation")))?;

        self.format.format(response).await
    }

    /// The operation for one request: the override when present, decoded
    /// exactly once, else the configured default.
    fn resolve_operation(&self, fields: &Fields) -> Result<Operation> {
        let Some(arg) = &fields.operation else {
            return Ok(self.operation);
        };

        let operation = arg.resolve().map_err(|err| {
            err.context(err!("failed to resolve the request operation override"))
        })?;

        tracing::debug!(operation = %operation, "request overrides the configured operation");
        Ok(operation)
    }
}
