mod build;

pub mod consumer;
pub use consumer::Consumer;

pub mod endpoint;
pub use endpoint::Endpoint;

pub mod format;
pub use format::ResponseFormat;

pub mod operation;
pub use operation::Operation;

pub mod request;
pub use request::{Fields, OperationArg, Request};

pub mod response;
pub use response::{Body, Response};

pub use cassata_core::{driver, stmt, Connection, Driver, Error, Result};
