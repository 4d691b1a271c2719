use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Server responded with `{}`", .status)]
    Http { status: String },

    #[error("Error reaching the server: {}", _0)]
    Transport(#[source] reqwest::Error),

    #[error("Error decoding the command list: {}", _0)]
    Decode(#[source] reqwest::Error),

    #[error("Invalid server URL `{}`: {}", .url, .reason)]
    InvalidUrl { url: String, reason: String },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No command named `{}` on the server", .0)]
    UnknownCommand(String),

    #[error("Server URL may not be empty")]
    EmptyServerUrl,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    /// Builds an [`Error::Http`] from the status line, or the bare code when
    /// the status has no standard reason phrase.
    pub fn http_error(status: reqwest::StatusCode) -> Self {
        let status = match status.canonical_reason() {
            Some(reason) => format!("{} {reason}", status.as_u16()),
            None => status.as_u16().to_string(),
        };
        Self::Http { status }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
