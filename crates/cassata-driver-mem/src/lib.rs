mod cql;

mod store;
use store::Store;

use cassata_core::{
    async_trait,
    driver::{ConnectOptions, Response, Rows},
    stmt, Error, Result,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use url::Url;

/// Rows a cursor serves per pull when no page size is configured.
const DEFAULT_PAGE_SIZE: usize = 5000;

/// An in-process driver backed by a shared table store.
///
/// Every connection opened from one `Mem` sees the same tables, so a test can
/// write through one connection and read through another. Rows live in
/// insertion order with no schema or primary key; an insert always appends.
#[derive(Debug, Clone)]
pub struct Mem {
    store: Arc<Store>,
    page_size: usize,
}

impl Mem {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Store::default()),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a driver from a `mem:` connection URL.
    pub fn from_url(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_configuration(format!("malformed connection URL `{url_str}`: {err}"))
        })?;

        if url.scheme() != "mem" {
            return Err(Error::invalid_configuration(format!(
                "connection URL does not have a `mem` scheme; url={url_str}"
            )));
        }

        Ok(Self::new())
    }

    /// Number of rows a cursor fetches from the store per pull.
    ///
    /// The first page is fetched at execution time; later pages require the
    /// connection to still be open.
    pub fn page_size(mut self, page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be greater than zero");
        self.page_size = page_size;
        self
    }
}

impl Default for Mem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl cassata_core::Driver for Mem {
    async fn connect(&self, options: &ConnectOptions) -> Result<Box<dyn cassata_core::Connection>> {
        // Contact points, credentials, and consistency have no meaning for an
        // in-process store; only the default keyspace carries over.
        Ok(Box::new(Connection {
            store: self.store.clone(),
            keyspace: options.keyspace.clone(),
            page_size: self.page_size,
            open: Arc::new(AtomicBool::new(true)),
        }))
    }
}

#[derive(Debug)]
struct Connection {
    store: Arc<Store>,
    keyspace: Option<String>,
    page_size: usize,
    open: Arc<AtomicBool>,
}

#[async_trait]
impl cassata_core::Connection for Connection {
    async fn exec(&self, statement: stmt::Statement) -> Result<Response> {
        if !self.open.load(Ordering::Acquire) {
            return Err(Error::execution("connection is closed"));
        }

        self.exec_inner(statement)
    }

    async fn close(&self) -> Result<()> {
        self.open.store(false, Ordering::Release);
        Ok(())
    }
}

impl Connection {
    fn exec_inner(&self, statement: stmt::Statement) -> Result<Response> {
        match statement {
            stmt::Statement::Select(select) => self.select(&select),
            stmt::Statement::Insert(insert) => {
                let keyspace = self.resolve(&insert.into)?;
                let count = self
                    .store
                    .insert(keyspace, &insert.into.name, &insert.values);
                Ok(Response::count(count))
            }
            stmt::Statement::Update(update) => {
                let keyspace = self.resolve(&update.table)?;
                let count = self.store.update(keyspace, &update.table.name, &update)?;
                Ok(Response::count(count))
            }
            stmt::Statement::Delete(delete) => {
                let keyspace = self.resolve(&delete.from)?;
                let count = self.store.delete(keyspace, &delete.from.name, &delete);
                Ok(Response::count(count))
            }
            stmt::Statement::Raw(raw) => {
                let tokens = cql::lex(&raw.text)?;
                self.exec_inner(cql::read(&tokens, &[])?)
            }
            stmt::Statement::Batch(batch) => self.batch(&batch),
        }
    }

    fn select(&self, select: &stmt::Select) -> Result<Response> {
        let keyspace = self.resolve(&select.from)?;
        let rows = self.store.select(keyspace, &select.from.name, select);
        Ok(Response::cursor(self.cursor(rows)))
    }

    fn batch(&self, batch: &stmt::Batch) -> Result<Response> {
        // The template lexes once; each bound tuple reads against it
        let tokens = cql::lex(&batch.template)?;

        let mut count = 0;
        for bindings in &batch.bindings {
            let statement = cql::read(&tokens, bindings)?;
            if statement.is_select() {
                return Err(Error::execution(
                    "SELECT statements are not allowed in a batch",
                ));
            }

            let response = self.exec_inner(statement)?;
            if let Rows::Count(n) = response.rows {
                count += n;
            }
        }

        Ok(Response::count(count))
    }

    /// The keyspace a table resolves to: its own qualifier, or the
    /// connection's default.
    fn resolve<'a>(&'a self, table: &'a stmt::TableRef) -> Result<&'a str> {
        table
            .keyspace
            .as_deref()
            .or(self.keyspace.as_deref())
            .ok_or_else(|| {
                Error::execution(format!("no keyspace specified for table `{}`", table.name))
            })
    }

    fn cursor(&self, rows: Vec<stmt::Row>) -> stmt::RowCursor {
        let page_size = self.page_size;
        let open = self.open.clone();

        let stream = async_stream::stream! {
            let mut rows = rows.into_iter();

            // The first page models rows already fetched at execution time;
            // it stays readable after the connection closes
            for row in rows.by_ref().take(page_size) {
                yield Ok(row);
            }

            loop {
                let page: Vec<_> = rows.by_ref().take(page_size).collect();
                if page.is_empty() {
                    return;
                }
                if !open.load(Ordering::Acquire) {
                    yield Err(Error::execution(
                        "connection closed before the cursor was drained",
                    ));
                    return;
                }
                for row in page {
                    yield Ok(row);
                }
            }
        };

        stmt::RowCursor::from_stream(stream)
    }
}
