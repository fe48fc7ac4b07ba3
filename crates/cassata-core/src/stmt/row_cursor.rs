use super::Row;

use std::{
    collections::VecDeque,
    fmt, mem,
    pin::Pin,
    task::{Context, Poll},
};
use tokio_stream::{Stream, StreamExt};

/// A lazy, forward-only cursor over result rows.
///
/// Rows already buffered stay readable regardless of what happens to the
/// producing connection; the tail stream is only polled once the buffer
/// drains.
#[derive(Default)]
pub struct RowCursor {
    buffer: Buffer,
    stream: Option<DynStream>,
}

#[derive(Clone, Default, PartialEq)]
enum Buffer {
    #[default]
    Empty,
    One(Row),
    Many(VecDeque<Row>),
}

type DynStream = Pin<Box<dyn Stream<Item = crate::Result<Row>> + Send + 'static>>;

impl RowCursor {
    pub fn from_row(row: impl Into<Row>) -> Self {
        Self {
            buffer: Buffer::One(row.into()),
            stream: None,
        }
    }

    pub fn from_stream<T: Stream<Item = crate::Result<Row>> + Send + 'static>(stream: T) -> Self {
        Self {
            buffer: Buffer::Empty,
            stream: Some(Box::pin(stream)),
        }
    }

    pub fn from_vec(rows: Vec<Row>) -> Self {
        Self {
            buffer: Buffer::Many(rows.into()),
            stream: None,
        }
    }

    /// Returns the next row in the cursor
    pub async fn next(&mut self) -> Option<crate::Result<Row>> {
        StreamExt::next(self).await
    }

    /// Peek at the next row in the cursor
    pub async fn peek(&mut self) -> Option<crate::Result<&Row>> {
        if self.buffer.is_empty() {
            match self.next().await {
                Some(Ok(row)) => self.buffer.push(row),
                Some(Err(e)) => return Some(Err(e)),
                None => return None,
            }
        }

        self.buffer.first().map(Ok)
    }

    /// The cursor will yield at least this number of rows
    pub fn min_len(&self) -> usize {
        let (ret, _) = self.size_hint();
        ret
    }

    /// Drains the cursor into a vector.
    pub async fn collect(mut self) -> crate::Result<Vec<Row>> {
        let mut ret = Vec::with_capacity(self.min_len());

        while let Some(res) = self.next().await {
            ret.push(res?);
        }

        Ok(ret)
    }

    // NOTE: this method is only used for testing purposes. It should not ever be made
    // available via the public API.
    #[cfg(test)]
    fn into_inner(self) -> (Buffer, Option<DynStream>) {
        (self.buffer, self.stream)
    }
}

impl Stream for RowCursor {
    type Item = crate::Result<Row>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(next) = self.buffer.next() {
            Poll::Ready(Some(Ok(next)))
        } else if let Some(stream) = self.stream.as_mut() {
            Pin::new(stream).poll_next(cx)
        } else {
            Poll::Ready(None)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (mut low, mut high) = match &self.stream {
            Some(stream) => stream.size_hint(),
            None => (0, Some(0)),
        };

        let buffered = self.buffer.len();

        low += buffered;

        if let Some(high) = high.as_mut() {
            *high += buffered;
        }

        (low, high)
    }
}

impl From<Row> for RowCursor {
    fn from(src: Row) -> Self {
        Self {
            buffer: Buffer::One(src),
            stream: None,
        }
    }
}

impl From<Vec<Row>> for RowCursor {
    fn from(rows: Vec<Row>) -> Self {
        Self::from_vec(rows)
    }
}

impl fmt::Debug for RowCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowCursor").finish()
    }
}

impl Buffer {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    fn first(&self) -> Option<&Row> {
        match self {
            Self::Empty => None,
            Self::One(row) => Some(row),
            Self::Many(rows) => rows.front(),
        }
    }

    fn next(&mut self) -> Option<Row> {
        match self {
            Self::Empty => None,
            Self::One(_) => {
                let Self::One(row) = mem::take(self) else {
                    panic!()
                };
                Some(row)
            }
            Self::Many(rows) => rows.pop_front(),
        }
    }

    fn push(&mut self, row: Row) {
        match self {
            Self::Empty => {
                *self = Self::One(row);
            }
            Self::One(_) => {
                let Self::One(first) = mem::replace(self, Self::Many(VecDeque::with_capacity(2)))
                else {
                    panic!()
                };

                let Self::Many(rows) = self else { panic!() };

                rows.push_back(first);
                rows.push_back(row);
            }
            Self::Many(rows) => {
                rows.push_back(row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::Value;

    #[test]
    fn default() {
        let (buffer, stream) = RowCursor::default().into_inner();
        assert!(buffer == Buffer::Empty);
        assert!(stream.is_none());
    }

    #[tokio::test]
    async fn collect_buffered_rows() {
        let rows = vec![
            Row::from_iter([("id", Value::I64(1))]),
            Row::from_iter([("id", Value::I64(2))]),
        ];
        let cursor = RowCursor::from_vec(rows.clone());
        assert_eq!(cursor.min_len(), 2);
        assert_eq!(cursor.collect().await.unwrap(), rows);
    }

    #[tokio::test]
    async fn peek_does_not_consume() {
        let mut cursor = RowCursor::from_row(Row::from_iter([("id", Value::I64(1))]));

        let peeked = cursor.peek().await.unwrap().unwrap().clone();
        let next = cursor.next().await.unwrap().unwrap();
        assert_eq!(peeked, next);
        assert!(cursor.next().await.is_none());
    }
}
