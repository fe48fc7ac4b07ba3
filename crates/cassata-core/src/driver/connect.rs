use serde::{Deserialize, Serialize};

/// Options for opening a store connection.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Store nodes to contact
    pub contact_points: Vec<String>,

    /// Native protocol port, when not the store default
    pub port: Option<u16>,

    /// Keyspace scoping unqualified statements
    pub keyspace: Option<String>,

    /// Optional authentication
    pub credentials: Option<Credentials>,

    /// Consistency level requested for the session
    pub consistency: Option<Consistency>,
}

impl ConnectOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Username and password for store authentication.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps the password out of logs and error chains.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Consistency level applied at connect time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Consistency {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    LocalOne,
}
