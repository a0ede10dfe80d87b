use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("Invalid roster document: {}", .0)]
    Schema(String),

    #[error("Invalid birthday `{}`: {}", .value, .original)]
    Birthday {
        value: String,
        original: chrono::format::ParseError,
    },

    #[error("`{}` requires a file path argument", .0)]
    MissingArgument(String),

    #[error("Unknown command `{}`", .0)]
    UnknownCommand(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn birthday_error(value: String, original: chrono::format::ParseError) -> Self {
        Self::Birthday { value, original }
    }
}
