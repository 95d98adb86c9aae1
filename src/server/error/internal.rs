use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} value stored in database: '{value}'")]
    UnknownStoredValue {
        /// Which enum failed to parse (role, status, ...)
        kind: &'static str,
        /// The raw stored value
        value: String,
    },

    /// A JSON column could not be decoded into its domain type.
    #[error("Failed to decode JSON column {column}: {source}")]
    InvalidJsonColumn {
        /// Column name
        column: &'static str,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// The session table could not be created or reached.
    #[error("Session store error: {0}")]
    SessionStore(String),
}
