/// Boxed transport error, kept opaque so any HTTP backend can plug in.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument failed validation before any I/O was attempted.
    #[error("invalid argument `{argument}`: {expected}")]
    Validation {
        argument: &'static str,
        expected: String,
    },

    /// The client was constructed with an unusable setting.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The transport collaborator could not produce any response.
    #[error("cannot obtain response")]
    Transport(#[source] BoxError),

    #[error("JSON encode error: {0}")]
    JsonEncode(#[from] serde_json::Error),

    #[error("XML encode error: {0}")]
    XmlEncode(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Shorthand used by the catalog validators.
    pub(crate) fn validation(argument: &'static str, expected: impl Into<String>) -> Self {
        Error::Validation {
            argument,
            expected: expected.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
