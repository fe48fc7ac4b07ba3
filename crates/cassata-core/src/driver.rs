mod connect;
pub use connect::{ConnectOptions, Consistency, Credentials};

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, stmt::Statement};

use std::fmt::Debug;

/// A store client able to open connections.
///
/// Drivers are injected into an endpoint once and shared across requests;
/// connections are scoped to a single dispatch.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Open a connection with the given options.
    async fn connect(&self, options: &ConnectOptions) -> crate::Result<Box<dyn Connection>>;
}

/// An open connection to a store.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Execute a statement.
    async fn exec(&self, statement: Statement) -> crate::Result<Response>;

    /// Close the connection.
    ///
    /// Cursors handed out by this connection keep serving their buffered
    /// rows; pulling past the buffer fails once the connection is closed.
    async fn close(&self) -> crate::Result<()>;
}
