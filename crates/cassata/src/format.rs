use crate::{driver, response::Body, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an endpoint shapes cursor results.
///
/// Count results pass through as [`Body::Count`] under either format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseFormat {
    /// Hand the cursor over unchanged.
    ///
    /// Single pass; rows not yet buffered become unreadable once the
    /// connection closes.
    #[default]
    Passthrough,

    /// Drain the cursor into a `Vec<Row>` while the connection is open.
    ///
    /// The materialized rows outlive the connection.
    MaterializedList,
}

impl ResponseFormat {
    /// Looks up a format by wire name.
    ///
    /// Matching is exact; unknown names yield `None` so configuration can
    /// fail fast.
    pub fn from_name(name: &str) -> Option<ResponseFormat> {
        match name {
            "passthrough" => Some(Self::Passthrough),
            "materialized-list" => Some(Self::MaterializedList),
            _ => None,
        }
    }

    /// The format's wire name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::MaterializedList => "materialized-list",
        }
    }

    /// Shapes a driver response into a result body.
    pub(crate) async fn format(self, response: driver::Response) -> Result<Body> {
        Ok(match response.rows {
            driver::Rows::Count(count) => Body::Count(count),
            driver::Rows::Cursor(cursor) => match self {
                Self::Passthrough => Body::Cursor(cursor),
                Self::MaterializedList => Body::Rows(cursor.collect().await?),
            },
        })
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_exact() {
        assert_eq!(
            ResponseFormat::from_name("passthrough"),
            Some(ResponseFormat::Passthrough)
        );
        assert_eq!(
            ResponseFormat::from_name("materialized-list"),
            Some(ResponseFormat::MaterializedList)
        );

        assert_eq!(ResponseFormat::from_name("materialized_list"), None);
        assert_eq!(ResponseFormat::from_name("Passthrough"), None);
        assert_eq!(ResponseFormat::from_name(""), None);
    }

    #[tokio::test]
    async fn counts_pass_through_either_format() {
        let shaped = ResponseFormat::Passthrough
            .format(driver::Response::count(3))
            .await
            .unwrap();
        assert_eq!(shaped.into_count(), 3);

        let shaped = ResponseFormat::MaterializedList
            .format(driver::Response::count(3))
            .await
            .unwrap();
        assert_eq!(shaped.into_count(), 3);
    }

    #[tokio::test]
    async fn materialized_list_drains_the_cursor() {
        let rows: Vec<crate::stmt::Row> = (0..4)
            .map(|id| [("id", crate::stmt::Value::from(id))].into_iter().collect())
            .collect();

        let shaped = ResponseFormat::MaterializedList
            .format(driver::Response::cursor(rows))
            .await
            .unwrap();

        let rows = shaped.into_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].get_i64("id").unwrap(), 2);
    }

    #[tokio::test]
    async fn passthrough_keeps_the_cursor() {
        let rows: Vec<crate::stmt::Row> = (0..2)
            .map(|id| [("id", crate::stmt::Value::from(id))].into_iter().collect())
            .collect();

        let shaped = ResponseFormat::Passthrough
            .format(driver::Response::cursor(rows))
            .await
            .unwrap();

        let mut cursor = shaped.into_cursor();
        assert!(cursor.next().await.is_some());
        assert!(cursor.next().await.is_some());
        assert!(cursor.next().await.is_none());
    }
}
