use crate::{driver::Rows, request::Fields, stmt, Endpoint, Error, Result};

use cassata_core::{err, Connection};

use std::time::Duration;

/// Polls a query against an endpoint on a fixed interval.
///
/// Each poll opens a connection, runs the polling query, closes the
/// connection, and hands the materialized rows to the handler. Rows are
/// always materialized here; a poll result must outlive its connection.
#[derive(Debug)]
pub struct Consumer {
    endpoint: Endpoint,
    polling_query: String,
    interval: Duration,
}

impl Consumer {
    /// Creates a consumer, validating what polling needs beyond the
    /// endpoint's own configuration: a non-blank query and at least one
    /// contact point.
    pub fn new(
        endpoint: Endpoint,
        polling_query: impl Into<String>,
        interval: Duration,
    ) -> Result<Consumer> {
        let polling_query = polling_query.into();

        if polling_query.trim().is_empty() {
            return Err(Error::invalid_configuration(
                "a polling query must be specified",
            ));
        }

        if endpoint.contact_points.is_empty() {
            return Err(Error::invalid_configuration(
                "at least one contact point must be specified for polling",
            ));
        }

        Ok(Consumer {
            endpoint,
            polling_query,
            interval,
        })
    }

    /// Runs the polling query once.
    pub async fn poll_once(&self) -> Result<Vec<stmt::Row>> {
        let connection = self.endpoint.connect(&Fields::default()).await?;

        let result = self.poll(&*connection).await;
        let closed = connection.close().await;

        let rows = match result {
            Ok(rows) => rows,
            Err(err) => {
                if let Err(close_err) = closed {
                    tracing::debug!(error = %close_err, "failed to close the connection");
                }
                return Err(err.context(err!(
                    "failed to execute the polling query `{}`",
                    self.polling_query
                )));
            }
        };
        closed?;

        Ok(rows)
    }

    async fn poll(&self, connection: &dyn Connection) -> Result<Vec<stmt::Row>> {
        let response = connection
            .exec(stmt::Statement::Raw(self.polling_query.as_str().into()))
            .await?;

        match response.rows {
            Rows::Cursor(cursor) => cursor.collect().await,
            Rows::Count(_) => Ok(Vec::new()),
        }
    }

    /// Polls forever, handing each successful result to `handler`.
    ///
    /// A failed poll is logged and skipped; it does not stop the loop. Stop
    /// the consumer by cancelling the task driving this future.
    pub async fn run<F>(&self, mut handler: F)
    where
        F: FnMut(Vec<stmt::Row>),
    {
        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;

            match self.poll_once().await {
                Ok(rows) => handler(rows),
                Err(err) => {
                    tracing::warn!(error = %err, query = %self.polling_query, "poll failed");
                }
            }
        }
    }
}
